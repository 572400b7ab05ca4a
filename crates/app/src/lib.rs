//! Tick driver and scenario replay for the driving rig

pub mod config;
pub mod error;
pub mod rig;
pub mod scenario;

pub use config::RigConfig;
pub use error::AppError;
pub use rig::{Rig, RigState, TickInputs, TickOutputs};
pub use scenario::{Scenario, ScenarioReport, ScenarioTick};
