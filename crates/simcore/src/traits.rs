use serde::{Deserialize, Serialize};

// Drive Traits
/// Two-axis driving intent, both components in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DriveCommand {
    pub steer: f64,
    pub throttle_brake: f64,
}

impl DriveCommand {
    pub const NEUTRAL: DriveCommand = DriveCommand { steer: 0.0, throttle_brake: 0.0 };

    pub fn new(steer: f64, throttle_brake: f64) -> Self {
        DriveCommand { steer, throttle_brake }
    }

    /// Component-wise clamp into [-1, 1]. Non-finite components become 0.
    pub fn clamped(self) -> Self {
        DriveCommand {
            steer: crate::math::clamp_unit(self.steer),
            throttle_brake: crate::math::clamp_unit(self.throttle_brake),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AutopilotState {
    pub enabled: bool,
    pub command: DriveCommand,
}

/// Actuator command for a single wheel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelCommand {
    pub steer_angle_degrees: f64,
    pub motor_torque_nm: f64,
    pub brake_torque_nm: f64,
}

impl WheelCommand {
    pub const NEUTRAL: WheelCommand = WheelCommand {
        steer_angle_degrees: 0.0,
        motor_torque_nm: 0.0,
        brake_torque_nm: 0.0,
    };
}

// Sickness Traits
pub const XR_AXIS_COUNT: usize = 4;

/// Raw discomfort sensor samples for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SicknessReading {
    /// Direct magnitude signal from the desktop controller, sign carrying.
    pub pc_axis: f64,
    /// Headset controller axes, magnitude only.
    pub xr_axes: [f64; XR_AXIS_COUNT],
}

impl SicknessReading {
    pub fn new(pc_axis: f64, xr_axes: [f64; XR_AXIS_COUNT]) -> Self {
        SicknessReading { pc_axis, xr_axes }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum SicknessLevel {
    #[default]
    None,
    Weak,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SicknessAssessment {
    /// Continuous severity in [0, 1].
    pub severity: f64,
    pub level: SicknessLevel,
}

// General Traits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimContext {
    pub dt: f64,
    pub t: f64,
    pub tick: u64,
}

impl SimContext {
    pub fn new(dt: f64, t: f64, tick: u64) -> Self {
        SimContext { dt, t, tick }
    }
}

pub trait Model {
    fn reset(&mut self);
}
