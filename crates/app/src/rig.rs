//! Rig tick driver
//!
//! Runs the control models in order for one simulation tick. All mutable
//! state lives in [`RigState`], passed in and handed back by the caller.

use control::{DriveSource, SicknessFusion, WheelActuation};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use simcore::{
    AutopilotState, ConfigError, DriveCommand, Model, SicknessAssessment, SicknessReading, SimContext, SimError,
    VehicleState, WheelCommand,
};
use telemetry::{DashboardFrame, DashboardInput, DashboardProjector, DashboardState};

use crate::config::RigConfig;

/// External samples consumed on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickInputs {
    /// `None` until the physics subsystem is ready.
    pub vehicle: Option<VehicleState>,
    pub manual_primary: DriveCommand,
    pub manual_secondary: DriveCommand,
    pub autopilot: AutopilotState,
    pub sickness: SicknessReading,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOutputs {
    pub tick: u64,
    pub drive: DriveCommand,
    pub wheels: Vec<WheelCommand>,
    pub sickness: SicknessAssessment,
    pub dashboard: Option<DashboardFrame>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigState {
    pub tick: u64,
    /// Accumulated simulation time (s)
    pub elapsed: f64,
    pub dashboard: DashboardState,
}

impl Model for RigState {
    fn reset(&mut self) {
        self.tick = 0;
        self.elapsed = 0.0;
        self.dashboard.reset();
    }
}

#[derive(Debug, Clone)]
pub struct Rig {
    actuation: WheelActuation,
    fusion: SicknessFusion,
    projector: DashboardProjector,
}

impl Rig {
    pub fn new(config: &RigConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rig = Rig {
            actuation: WheelActuation::new(config.actuator, config.wheel_count)?,
            fusion: SicknessFusion::new(config.sickness)?,
            projector: DashboardProjector::new(config.dashboard)?,
        };
        info!(
            "rig ready: {} wheels, envelope [{}, {}] m/s, dashboard every {} s",
            config.wheel_count,
            config.actuator.envelope.min_speed,
            config.actuator.envelope.max_speed,
            config.dashboard.interval
        );
        Ok(rig)
    }

    pub fn initial_state(&self) -> RigState {
        RigState {
            tick: 0,
            elapsed: 0.0,
            dashboard: self.projector.initial_state(),
        }
    }

    /// One simulation step. A rejected tick advances nothing; the caller keeps
    /// its previous state.
    pub fn tick(&self, state: RigState, inputs: &TickInputs, dt: f64) -> Result<(TickOutputs, RigState), SimError> {
        if !dt.is_finite() || dt < 0.0 {
            warn!("rejecting tick {} with duration {}", state.tick + 1, dt);
            return Err(SimError::InvalidTimestep(dt));
        }

        let mut next = state;
        next.tick += 1;
        next.elapsed += dt;
        let ctx = SimContext::new(dt, next.elapsed, next.tick);

        let drive = DriveSource::select(inputs.manual_primary, inputs.manual_secondary, &inputs.autopilot).resolve();
        let wheels = self.actuation.actuate(inputs.vehicle.as_ref(), drive);
        let sickness = self.fusion.fuse(&inputs.sickness);

        let dashboard = self.projector.poll(
            &mut next.dashboard,
            &ctx,
            &DashboardInput {
                vehicle: inputs.vehicle,
                drive,
                sickness: sickness.level,
            },
        );

        let outputs = TickOutputs {
            tick: next.tick,
            drive,
            wheels,
            sickness,
            dashboard,
        };
        Ok((outputs, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use simcore::{ActuatorRange, SicknessLevel};

    fn rig() -> Rig {
        Rig::new(&RigConfig::default()).unwrap()
    }

    #[test]
    fn test_full_pipeline_single_tick() {
        let rig = rig();
        let inputs = TickInputs {
            vehicle: Some(VehicleState::new(0.0, 0.0)),
            manual_primary: DriveCommand::new(0.0, 1.0),
            sickness: SicknessReading::new(0.0, [0.0, 0.6, 0.0, 0.0]),
            ..Default::default()
        };

        let (out, state) = rig.tick(rig.initial_state(), &inputs, 0.02).unwrap();
        assert_eq!(out.tick, 1);
        assert_eq!(state.tick, 1);
        assert_eq!(out.wheels.len(), 4);
        assert_relative_eq!(out.wheels[0].motor_torque_nm, 3600.0);
        assert_eq!(out.sickness.level, SicknessLevel::Weak);
        assert!(out.dashboard.is_none());
    }

    #[test]
    fn test_autopilot_drives_wheels() {
        let rig = rig();
        let inputs = TickInputs {
            vehicle: Some(VehicleState::new(0.0, 0.0)),
            manual_primary: DriveCommand::new(-1.0, -1.0),
            autopilot: AutopilotState { enabled: true, command: DriveCommand::new(0.2, 0.9) },
            ..Default::default()
        };
        let (out, _) = rig.tick(rig.initial_state(), &inputs, 0.02).unwrap();
        assert_eq!(out.drive, DriveCommand::new(0.2, 0.9));
        assert_relative_eq!(out.wheels[0].motor_torque_nm, 0.9 * 3600.0);
        assert_relative_eq!(out.wheels[0].steer_angle_degrees, 0.2 * 35.0);
    }

    #[test]
    fn test_missing_vehicle_gives_neutral_wheels() {
        let rig = rig();
        let inputs = TickInputs { manual_primary: DriveCommand::new(1.0, 1.0), ..Default::default() };
        let (out, _) = rig.tick(rig.initial_state(), &inputs, 0.02).unwrap();
        assert!(out.wheels.iter().all(|w| *w == WheelCommand::NEUTRAL));
        assert_eq!(out.drive, DriveCommand::new(1.0, 1.0));
    }

    #[test]
    fn test_invalid_timestep_rejected() {
        let rig = rig();
        let state = rig.initial_state();
        assert_eq!(
            rig.tick(state, &TickInputs::default(), -0.01).unwrap_err(),
            SimError::InvalidTimestep(-0.01)
        );
        assert!(rig.tick(state, &TickInputs::default(), f64::NAN).is_err());
    }

    #[test]
    fn test_elapsed_accumulates() {
        let rig = rig();
        let mut state = rig.initial_state();
        for _ in 0..4 {
            state = rig.tick(state, &TickInputs::default(), 0.25).unwrap().1;
        }
        assert_eq!(state.tick, 4);
        assert_relative_eq!(state.elapsed, 1.0);
    }

    #[test]
    fn test_reset_state() {
        let rig = rig();
        let (_, mut state) = rig.tick(rig.initial_state(), &TickInputs::default(), 0.1).unwrap();
        state.reset();
        assert_eq!(state, rig.initial_state());
    }

    #[test]
    fn test_invalid_config_refused() {
        let inverted = ActuatorRange::default().with_motor_torque(3600.0, 2400.0);
        let config = RigConfig::default().with_actuator(inverted);
        assert!(matches!(Rig::new(&config), Err(ConfigError::InvertedRange { .. })));
    }
}
