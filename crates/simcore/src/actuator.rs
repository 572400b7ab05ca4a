//! Per-vehicle actuator configuration
//!
//! Each curve is a `{min, max}` pair sampled by the shared speed factor:
//! `max` at standstill, `min` at the envelope's top speed.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarRange {
    pub min: f64,
    pub max: f64,
}

impl ScalarRange {
    pub fn new(min: f64, max: f64) -> Self {
        ScalarRange { min, max }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFinite { name });
        }
        if self.max < self.min {
            return Err(ConfigError::InvertedRange { name, min: self.min, max: self.max });
        }
        Ok(())
    }
}

/// Signed forward speeds (m/s) over which the curves are defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedEnvelope {
    pub min_speed: f64,
    pub max_speed: f64,
}

impl SpeedEnvelope {
    pub fn new(min_speed: f64, max_speed: f64) -> Self {
        SpeedEnvelope { min_speed, max_speed }
    }

    pub fn symmetric(max_speed: f64) -> Self {
        SpeedEnvelope { min_speed: -max_speed, max_speed }
    }

    /// Strictly inside the open interval; the bounds count as outside.
    pub fn contains(&self, velocity: f64) -> bool {
        self.min_speed < velocity && velocity < self.max_speed
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_speed.is_finite() || !self.max_speed.is_finite() {
            return Err(ConfigError::NonFinite { name: "speed envelope" });
        }
        if self.max_speed <= 0.0 {
            return Err(ConfigError::NonPositiveMaxSpeed(self.max_speed));
        }
        if self.min_speed >= self.max_speed {
            return Err(ConfigError::EmptyEnvelope { min: self.min_speed, max: self.max_speed });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActuatorRange {
    /// Motor torque (N·m)
    pub motor_torque: ScalarRange,
    /// Brake torque (N·m)
    pub brake_torque: ScalarRange,
    /// Steer angle (degrees)
    pub steer_angle: ScalarRange,
    pub envelope: SpeedEnvelope,
}

impl Default for ActuatorRange {
    fn default() -> Self {
        // Road car profile
        ActuatorRange {
            motor_torque: ScalarRange::new(2400.0, 3600.0),
            brake_torque: ScalarRange::new(4000.0, 6000.0),
            steer_angle: ScalarRange::new(10.0, 35.0),
            envelope: SpeedEnvelope::symmetric(55.0),
        }
    }
}

impl ActuatorRange {
    pub fn with_motor_torque(mut self, min: f64, max: f64) -> Self {
        self.motor_torque = ScalarRange::new(min, max);
        self
    }

    pub fn with_brake_torque(mut self, min: f64, max: f64) -> Self {
        self.brake_torque = ScalarRange::new(min, max);
        self
    }

    pub fn with_steer_angle(mut self, min: f64, max: f64) -> Self {
        self.steer_angle = ScalarRange::new(min, max);
        self
    }

    pub fn with_envelope(mut self, min_speed: f64, max_speed: f64) -> Self {
        self.envelope = SpeedEnvelope::new(min_speed, max_speed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motor_torque.validate("motor torque")?;
        self.brake_torque.validate("brake torque")?;
        self.steer_angle.validate("steer angle")?;
        self.envelope.validate()
    }
}
