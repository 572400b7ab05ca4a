//! Input Aggregator
//!
//! Selects between the manual axis sources and the autopilot, and clamps the
//! result into a [`DriveCommand`].

use simcore::math::finite_or_zero;
use simcore::{AutopilotState, DriveCommand};

/// Where this tick's driving intent comes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriveSource {
    /// Keyboard and motion controller, summed before clamping so they can
    /// cancel or saturate together.
    Manual {
        primary: DriveCommand,
        secondary: DriveCommand,
    },
    /// Autopilot override. Manual input is ignored entirely.
    Autopilot(DriveCommand),
}

impl DriveSource {
    pub fn select(primary: DriveCommand, secondary: DriveCommand, autopilot: &AutopilotState) -> Self {
        if autopilot.enabled {
            DriveSource::Autopilot(autopilot.command)
        } else {
            DriveSource::Manual { primary, secondary }
        }
    }

    pub fn resolve(&self) -> DriveCommand {
        match *self {
            DriveSource::Autopilot(command) => command.clamped(),
            DriveSource::Manual { primary, secondary } => DriveCommand {
                steer: finite_or_zero(primary.steer) + finite_or_zero(secondary.steer),
                throttle_brake: finite_or_zero(primary.throttle_brake)
                    + finite_or_zero(secondary.throttle_brake),
            }
            .clamped(),
        }
    }
}

pub fn resolve_drive(
    manual_a: DriveCommand,
    manual_b: DriveCommand,
    autopilot_axis: DriveCommand,
    autopilot_enabled: bool,
) -> DriveCommand {
    let autopilot = AutopilotState { enabled: autopilot_enabled, command: autopilot_axis };
    DriveSource::select(manual_a, manual_b, &autopilot).resolve()
}
