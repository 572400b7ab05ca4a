pub mod dashboard;

pub use dashboard::{
    format_elapsed, DashboardConfig, DashboardFrame, DashboardInput, DashboardProjector, DashboardState,
    DisplayBuffer, IndicatorTier, SpeedUnit,
};
