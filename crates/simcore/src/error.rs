use thiserror::Error;

/// Invalid rig configuration. Detected once when the rig is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} range is inverted: max {max} < min {min}")]
    InvertedRange { name: &'static str, min: f64, max: f64 },
    #[error("{name} contains a non-finite value")]
    NonFinite { name: &'static str },
    #[error("speed envelope max must be positive, got {0}")]
    NonPositiveMaxSpeed(f64),
    #[error("speed envelope is empty: min {min} >= max {max}")]
    EmptyEnvelope { min: f64, max: f64 },
    #[error("vehicle must have at least one wheel")]
    NoWheels,
    #[error("dashboard interval must be positive, got {0}")]
    NonPositiveInterval(f64),
    #[error("sickness thresholds must satisfy 0 < weak <= full, got weak {weak}, full {full}")]
    InvalidThresholds { weak: f64, full: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("tick duration must be finite and non-negative, got {0}")]
    InvalidTimestep(f64),
}
