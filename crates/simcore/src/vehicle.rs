use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::math::normalize_degrees;

/// Vehicle state as exposed by the physics subsystem. Read-only to the core.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleState {
    /// Signed velocity along the chassis forward axis (m/s).
    pub forward_speed: f64,
    /// Heading in degrees, (-180, 180].
    pub yaw_degrees: f64,
}

impl VehicleState {
    pub fn new(forward_speed: f64, yaw_degrees: f64) -> Self {
        VehicleState {
            forward_speed,
            yaw_degrees: normalize_degrees(yaw_degrees),
        }
    }

    /// Derives the state from a world-space pose. The world is Y-up and the
    /// chassis faces +Z when the orientation is identity.
    pub fn from_pose(linear_velocity: &Vector3<f64>, orientation: &UnitQuaternion<f64>) -> Self {
        let forward = orientation * Vector3::z();
        let forward_speed = linear_velocity.dot(&forward);
        let yaw = forward.x.atan2(forward.z).to_degrees();
        VehicleState::new(forward_speed, yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_pose() {
        let state = VehicleState::from_pose(&Vector3::new(0.0, 0.0, 12.0), &UnitQuaternion::identity());
        assert_relative_eq!(state.forward_speed, 12.0);
        assert_relative_eq!(state.yaw_degrees, 0.0);
    }

    #[test]
    fn test_reversing_has_negative_speed() {
        let state = VehicleState::from_pose(&Vector3::new(0.0, 0.0, -3.0), &UnitQuaternion::identity());
        assert_relative_eq!(state.forward_speed, -3.0);
    }

    #[test]
    fn test_quarter_turn_yaw() {
        let orientation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2);
        let state = VehicleState::from_pose(&Vector3::new(8.0, 0.0, 0.0), &orientation);
        assert_relative_eq!(state.yaw_degrees, 90.0, epsilon = 1e-9);
        assert_relative_eq!(state.forward_speed, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lateral_velocity_ignored() {
        let state = VehicleState::from_pose(&Vector3::new(5.0, -1.0, 2.0), &UnitQuaternion::identity());
        assert_relative_eq!(state.forward_speed, 2.0);
    }

    #[test]
    fn test_new_normalizes_yaw() {
        assert_relative_eq!(VehicleState::new(0.0, 270.0).yaw_degrees, -90.0);
        assert_relative_eq!(VehicleState::new(0.0, -180.0).yaw_degrees, 180.0);
    }
}
