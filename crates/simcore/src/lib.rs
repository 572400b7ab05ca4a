//! Shared vocabulary for the rig's tick-driven models
//!
//! - Drive, wheel and sickness value types
//! - Actuator configuration and validation
//! - Interpolation helpers and the per-tick countdown

pub mod actuator;
pub mod countdown;
pub mod error;
pub mod math;
pub mod traits;
pub mod vehicle;

pub use actuator::{ActuatorRange, ScalarRange, SpeedEnvelope};
pub use countdown::Countdown;
pub use error::{ConfigError, SimError};
pub use traits::*;
pub use vehicle::VehicleState;
