//! Per-tick control models for the driving rig
//!
//! This crate provides:
//! - Input aggregation between manual axes and the autopilot
//! - Speed-dependent wheel actuation with motor-enable hysteresis
//! - Fusion of the discomfort sensors into a sickness level

pub mod actuation;
pub mod input;
pub mod sickness;

pub use actuation::*;
pub use input::*;
pub use sickness::*;
