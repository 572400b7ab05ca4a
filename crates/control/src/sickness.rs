//! Sickness Fusion Model
//!
//! Fuses the desktop axis and the four headset axes into one severity and a
//! discrete [`SicknessLevel`]. Stateless: each tick is evaluated from scratch,
//! so a signal hovering at a threshold will flicker between levels.

use serde::{Deserialize, Serialize};
use simcore::math::finite_or_zero;
use simcore::{ConfigError, SicknessAssessment, SicknessLevel, SicknessReading};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SicknessThresholds {
    pub weak: f64,
    pub full: f64,
}

impl Default for SicknessThresholds {
    fn default() -> Self {
        SicknessThresholds { weak: 0.5, full: 1.0 }
    }
}

impl SicknessThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = self.weak.is_finite() && self.full.is_finite() && self.weak > 0.0 && self.weak <= self.full;
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidThresholds { weak: self.weak, full: self.full })
        }
    }

    pub fn level(&self, severity: f64) -> SicknessLevel {
        if severity >= self.full {
            SicknessLevel::Full
        } else if severity >= self.weak {
            SicknessLevel::Weak
        } else {
            SicknessLevel::None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SicknessFusion {
    thresholds: SicknessThresholds,
}

impl SicknessFusion {
    pub fn new(thresholds: SicknessThresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Bucketed headset severity: 0, the weak threshold, or the full threshold.
    fn xr_severity(&self, xr_axes: &[f64]) -> f64 {
        let mut severity = 0.0;
        if xr_axes.iter().any(|&axis| axis >= self.thresholds.weak) {
            severity = self.thresholds.weak;
        }
        if xr_axes.iter().any(|&axis| axis >= self.thresholds.full) {
            severity = self.thresholds.full;
        }
        severity
    }

    pub fn fuse(&self, reading: &SicknessReading) -> SicknessAssessment {
        let pc = finite_or_zero(reading.pc_axis);
        let xr = self.xr_severity(&reading.xr_axes);

        // Priority order, not a maximum: any positive PC signal wins
        let severity = if pc > 0.0 {
            pc
        } else if xr > 0.0 {
            xr
        } else {
            0.0
        };

        SicknessAssessment {
            severity: severity.clamp(0.0, 1.0),
            level: self.thresholds.level(severity),
        }
    }
}

pub fn fuse(pc_axis: f64, xr1: f64, xr2: f64, xr3: f64, xr4: f64) -> SicknessAssessment {
    SicknessFusion::default().fuse(&SicknessReading::new(pc_axis, [xr1, xr2, xr3, xr4]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_signal() {
        let out = fuse(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(out.severity, 0.0);
        assert_eq!(out.level, SicknessLevel::None);
    }

    #[test]
    fn test_pc_priority_over_xr() {
        let out = fuse(0.3, 0.0, 1.0, 0.0, 0.0);
        assert_relative_eq!(out.severity, 0.3);
        assert_eq!(out.level, SicknessLevel::None);
    }

    #[test]
    fn test_negative_pc_falls_back_to_xr() {
        let out = fuse(-0.8, 0.0, 0.0, 0.6, 0.0);
        assert_relative_eq!(out.severity, 0.5);
        assert_eq!(out.level, SicknessLevel::Weak);
    }

    #[test]
    fn test_xr_full_overrides_weak() {
        let out = fuse(0.0, 0.7, 1.0, 0.2, 0.0);
        assert_relative_eq!(out.severity, 1.0);
        assert_eq!(out.level, SicknessLevel::Full);
    }

    #[test]
    fn test_xr_below_weak_is_ignored() {
        let out = fuse(0.0, 0.49, 0.3, 0.1, 0.4999);
        assert_eq!(out.severity, 0.0);
        assert_eq!(out.level, SicknessLevel::None);
    }

    #[test]
    fn test_exact_bucket_boundaries() {
        assert_eq!(fuse(0.5, 0.0, 0.0, 0.0, 0.0).level, SicknessLevel::Weak);
        assert_eq!(fuse(1.0, 0.0, 0.0, 0.0, 0.0).level, SicknessLevel::Full);
        assert_eq!(fuse(0.4999, 0.0, 0.0, 0.0, 0.0).level, SicknessLevel::None);
        assert_eq!(fuse(0.0, 0.0, 0.0, 0.0, 0.5).level, SicknessLevel::Weak);
    }

    #[test]
    fn test_pc_above_one_reports_full_with_clamped_severity() {
        let out = fuse(2.5, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(out.severity, 1.0);
        assert_eq!(out.level, SicknessLevel::Full);
    }

    #[test]
    fn test_non_finite_pc_treated_as_absent() {
        let out = fuse(f64::NAN, 0.0, 0.5, 0.0, 0.0);
        assert_relative_eq!(out.severity, 0.5);
        assert_eq!(out.level, SicknessLevel::Weak);
    }

    #[test]
    fn test_no_hysteresis_between_ticks() {
        let fusion = SicknessFusion::default();
        let levels: Vec<SicknessLevel> = [0.51, 0.49, 0.51, 0.49]
            .iter()
            .map(|&pc| fusion.fuse(&SicknessReading::new(pc, [0.0; 4])).level)
            .collect();
        assert_eq!(
            levels,
            vec![SicknessLevel::Weak, SicknessLevel::None, SicknessLevel::Weak, SicknessLevel::None]
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let fusion = SicknessFusion::new(SicknessThresholds { weak: 0.3, full: 0.8 }).unwrap();
        let out = fusion.fuse(&SicknessReading::new(0.0, [0.0, 0.85, 0.0, 0.0]));
        assert_relative_eq!(out.severity, 0.8);
        assert_eq!(out.level, SicknessLevel::Full);
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        assert!(SicknessFusion::new(SicknessThresholds { weak: 0.9, full: 0.5 }).is_err());
        assert!(SicknessFusion::new(SicknessThresholds { weak: 0.0, full: 1.0 }).is_err());
        assert!(SicknessFusion::new(SicknessThresholds { weak: f64::NAN, full: 1.0 }).is_err());
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(SicknessLevel::None < SicknessLevel::Weak);
        assert!(SicknessLevel::Weak < SicknessLevel::Full);
    }
}
