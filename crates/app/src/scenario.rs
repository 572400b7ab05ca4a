//! Scenario replay
//!
//! A scenario is a rig configuration plus a recorded sequence of per-tick
//! samples. Replaying it through [`Rig`] is deterministic.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use telemetry::DisplayBuffer;

use crate::config::RigConfig;
use crate::error::AppError;
use crate::rig::{Rig, TickInputs, TickOutputs};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTick {
    /// Tick duration (s)
    pub dt: f64,
    #[serde(flatten)]
    pub inputs: TickInputs,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: RigConfig,
    pub ticks: Vec<ScenarioTick>,
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioReport {
    pub outputs: Vec<TickOutputs>,
    pub display: DisplayBuffer,
}

impl ScenarioReport {
    pub fn dashboard_ticks(&self) -> Vec<u64> {
        self.outputs
            .iter()
            .filter(|out| out.dashboard.is_some())
            .map(|out| out.tick)
            .collect()
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.config.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Replays every tick. Stops at the first rejected tick.
    pub fn run(&self) -> Result<ScenarioReport, AppError> {
        let rig = Rig::new(&self.config)?;
        let mut state = rig.initial_state();
        let mut report = ScenarioReport::default();

        for (index, sample) in self.ticks.iter().enumerate() {
            let (outputs, next) = rig
                .tick(state, &sample.inputs, sample.dt)
                .map_err(|source| AppError::Tick { tick: index, source })?;
            state = next;

            if let Some(frame) = &outputs.dashboard {
                report.display.overwrite(frame.clone());
            }
            report.outputs.push(outputs);
        }

        debug!("replayed {} ticks", report.outputs.len());
        Ok(report)
    }
}
