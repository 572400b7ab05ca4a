use std::fs;
use std::path::Path;

use control::SicknessThresholds;
use log::info;
use serde::{Deserialize, Serialize};
use simcore::{ActuatorRange, ConfigError};
use telemetry::DashboardConfig;

use crate::error::AppError;

/// Full rig configuration. Every field falls back to the road-car defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub actuator: ActuatorRange,
    pub wheel_count: usize,
    pub sickness: SicknessThresholds,
    pub dashboard: DashboardConfig,
}

impl Default for RigConfig {
    fn default() -> Self {
        RigConfig {
            actuator: ActuatorRange::default(),
            wheel_count: 4,
            sickness: SicknessThresholds::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl RigConfig {
    pub fn with_actuator(mut self, actuator: ActuatorRange) -> Self {
        self.actuator = actuator;
        self
    }

    pub fn with_wheel_count(mut self, wheel_count: usize) -> Self {
        self.wheel_count = wheel_count;
        self
    }

    pub fn with_sickness(mut self, sickness: SicknessThresholds) -> Self {
        self.sickness = sickness;
        self
    }

    pub fn with_dashboard(mut self, dashboard: DashboardConfig) -> Self {
        self.dashboard = dashboard;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.actuator.validate()?;
        if self.wheel_count == 0 {
            return Err(ConfigError::NoWheels);
        }
        self.sickness.validate()?;
        self.dashboard.validate()
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: RigConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        info!("loaded rig configuration from {}", path.display());
        Ok(config)
    }
}
