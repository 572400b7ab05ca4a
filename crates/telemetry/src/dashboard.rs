//! Dashboard Telemetry Projector
//!
//! Projects vehicle state into display-ready values on a reduced cadence.

use log::debug;
use serde::{Deserialize, Serialize};
use simcore::math::{finite_or_zero, normalize_degrees};
use simcore::{ConfigError, Countdown, DriveCommand, Model, SicknessLevel, SimContext, VehicleState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[default]
    KilometersPerHour,
    MilesPerHour,
}

impl SpeedUnit {
    /// Multiplier from m/s.
    pub fn per_meter_per_second(&self) -> f64 {
        match self {
            SpeedUnit::KilometersPerHour => 3.6,
            SpeedUnit::MilesPerHour => 2.236936,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::MilesPerHour => "mph",
        }
    }
}

/// Traffic-light tier shown for the current sickness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorTier {
    Green,
    Amber,
    Red,
}

impl From<SicknessLevel> for IndicatorTier {
    fn from(level: SicknessLevel) -> Self {
        match level {
            SicknessLevel::None => IndicatorTier::Green,
            SicknessLevel::Weak => IndicatorTier::Amber,
            SicknessLevel::Full => IndicatorTier::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Refresh interval in seconds
    pub interval: f64,
    pub speed_unit: SpeedUnit,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            interval: 0.5,
            speed_unit: SpeedUnit::KilometersPerHour,
        }
    }
}

impl DashboardConfig {
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_speed_unit(mut self, unit: SpeedUnit) -> Self {
        self.speed_unit = unit;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_finite() && self.interval > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositiveInterval(self.interval))
        }
    }
}

/// What the projector reads on a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardInput {
    pub vehicle: Option<VehicleState>,
    pub drive: DriveCommand,
    pub sickness: SicknessLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFrame {
    pub tick: u64,
    pub speed: f64,
    pub speed_unit: SpeedUnit,
    /// Signed: negative while braking or reversing
    pub power_percent: i32,
    pub heading_degrees: f64,
    pub elapsed: String,
    pub indicator: IndicatorTier,
}

impl DashboardFrame {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("SPD {:>4.0} {}", self.speed, self.speed_unit.label()),
            format!("PWR {:>+4}%", self.power_percent),
            format!("HDG {:>+7.1}", self.heading_degrees),
            format!("T   {}", self.elapsed),
            format!("SICK {:?}", self.indicator),
        ]
    }
}

/// Latest frame plus its rendered text. Overwritten whenever the projector fires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayBuffer {
    pub frame: Option<DashboardFrame>,
    pub lines: Vec<String>,
}

impl DisplayBuffer {
    pub fn overwrite(&mut self, frame: DashboardFrame) {
        self.lines = frame.lines();
        self.frame = Some(frame);
    }
}

/// Countdown state owned by the caller and threaded through every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardState {
    pub countdown: Countdown,
    last_polled_tick: Option<u64>,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        DashboardState {
            countdown: Countdown::new(config.interval),
            last_polled_tick: None,
        }
    }
}

impl Model for DashboardState {
    fn reset(&mut self) {
        self.countdown.rearm();
        self.last_polled_tick = None;
    }
}

/// `MM:SS`, or `H:MM:SS` from one hour on.
pub fn format_elapsed(seconds: f64) -> String {
    let total = finite_or_zero(seconds).max(0.0).floor() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

#[derive(Debug, Clone)]
pub struct DashboardProjector {
    config: DashboardConfig,
}

impl DashboardProjector {
    pub fn new(config: DashboardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn initial_state(&self) -> DashboardState {
        DashboardState::new(&self.config)
    }

    pub fn frame(&self, ctx: &SimContext, input: &DashboardInput) -> DashboardFrame {
        let vehicle = input.vehicle.unwrap_or_default();
        DashboardFrame {
            tick: ctx.tick,
            speed: finite_or_zero(vehicle.forward_speed).abs() * self.config.speed_unit.per_meter_per_second(),
            speed_unit: self.config.speed_unit,
            power_percent: (input.drive.throttle_brake * 100.0).round() as i32,
            heading_degrees: normalize_degrees(finite_or_zero(vehicle.yaw_degrees)),
            elapsed: format_elapsed(ctx.t),
            indicator: input.sickness.into(),
        }
    }

    /// Advances the countdown once per tick and returns a frame when it fires.
    /// Polling again with the same tick index is a no-op.
    pub fn poll(&self, state: &mut DashboardState, ctx: &SimContext, input: &DashboardInput) -> Option<DashboardFrame> {
        if state.last_polled_tick == Some(ctx.tick) {
            return None;
        }
        state.last_polled_tick = Some(ctx.tick);

        if state.countdown.advance(ctx.dt) {
            debug!("dashboard refresh at tick {}", ctx.tick);
            Some(self.frame(ctx, input))
        } else {
            None
        }
    }
}
