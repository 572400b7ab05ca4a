//! Wheel Actuation Model
//!
//! Maps forward speed and the resolved drive command to per-wheel steer, motor
//! and brake commands. One speed factor drives all three curves: full
//! authority at standstill, the range minimum at the envelope's top speed.

use log::debug;
use simcore::math::{inverse_lerp, lerp, sign};
use simcore::{ActuatorRange, ConfigError, DriveCommand, VehicleState, WheelCommand};

/// Below this speed (m/s) the motor may push against the direction of travel.
pub const MOTOR_ENGAGE_SPEED: f64 = 0.5;

/// Intermediate values of one actuation solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuationReport {
    pub factor: f64,
    pub motor_torque_max: f64,
    pub brake_torque_max: f64,
    pub steer_angle_max: f64,
    pub motors_enabled: bool,
    pub in_envelope: bool,
    pub command: WheelCommand,
}

#[derive(Debug, Clone)]
pub struct WheelActuation {
    range: ActuatorRange,
    wheel_count: usize,
}

impl WheelActuation {
    pub fn new(range: ActuatorRange, wheel_count: usize) -> Result<Self, ConfigError> {
        range.validate()?;
        if wheel_count == 0 {
            return Err(ConfigError::NoWheels);
        }
        Ok(Self { range, wheel_count })
    }

    /// Solve a single wheel command for signed forward velocity `velocity`.
    pub fn solve(&self, velocity: f64, drive: DriveCommand) -> ActuationReport {
        let speed = velocity.abs();
        let factor = inverse_lerp(self.range.envelope.max_speed, 0.0, speed);

        let motor_torque_max = lerp(self.range.motor_torque.min, self.range.motor_torque.max, factor);
        let brake_torque_max = lerp(self.range.brake_torque.min, self.range.brake_torque.max, factor);
        let steer_angle_max = lerp(self.range.steer_angle.min, self.range.steer_angle.max, factor);

        // Keep the motor from fighting the vehicle's momentum except near standstill
        let motors_enabled = sign(drive.throttle_brake) == sign(velocity) || speed < MOTOR_ENGAGE_SPEED;
        let in_envelope = self.range.envelope.contains(velocity);

        let (motor_torque_nm, brake_torque_nm) = if motors_enabled && in_envelope {
            (drive.throttle_brake * motor_torque_max, 0.0)
        } else {
            (0.0, drive.throttle_brake.abs() * brake_torque_max)
        };

        ActuationReport {
            factor,
            motor_torque_max,
            brake_torque_max,
            steer_angle_max,
            motors_enabled,
            in_envelope,
            command: WheelCommand {
                steer_angle_degrees: drive.steer * steer_angle_max,
                motor_torque_nm,
                brake_torque_nm,
            },
        }
    }

    /// Commands for every wheel. Without vehicle state, or with a non-finite
    /// speed, the neutral command is returned for each wheel.
    pub fn actuate(&self, vehicle: Option<&VehicleState>, drive: DriveCommand) -> Vec<WheelCommand> {
        let command = match vehicle.filter(|state| state.forward_speed.is_finite()) {
            Some(state) => self.solve(state.forward_speed, drive).command,
            None => {
                debug!("vehicle state unavailable or non-finite, issuing neutral wheel commands");
                WheelCommand::NEUTRAL
            }
        };
        vec![command; self.wheel_count]
    }
}
