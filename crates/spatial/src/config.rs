//! Position analysis configuration

use serde::{Deserialize, Serialize};
use crate::SpatialError;

/// Which distance estimator to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceEstimator {
    /// Continuous estimate from area with vertical and width corrections
    #[default]
    Continuous,
    /// Five fixed buckets on area alone
    Staged,
}

/// Position analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    /// Distance estimator policy
    pub estimator: DistanceEstimator,

    /// Left edge of the walking corridor (normalized centerX)
    pub corridor_min: f32,

    /// Right edge of the walking corridor (normalized centerX)
    pub corridor_max: f32,

    /// Box origin `y` above which the object is at ground level
    pub ground_level_y: f32,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            estimator: DistanceEstimator::Continuous,
            corridor_min: 0.25,
            corridor_max: 0.75,
            ground_level_y: 0.7,
        }
    }
}

impl PositionConfig {
    /// Narrower walking corridor (0.35 - 0.65)
    pub fn tight_corridor() -> Self {
        Self {
            corridor_min: 0.35,
            corridor_max: 0.65,
            ..Default::default()
        }
    }

    /// Staged distance buckets instead of the continuous estimate
    pub fn staged() -> Self {
        Self {
            estimator: DistanceEstimator::Staged,
            ..Default::default()
        }
    }

    /// Whether a normalized centerX falls inside the walking corridor
    pub fn in_path(&self, center_x: f32) -> bool {
        center_x >= self.corridor_min && center_x <= self.corridor_max
    }

    pub fn validate(&self) -> Result<(), SpatialError> {
        let valid = (0.0..=1.0).contains(&self.corridor_min)
            && (0.0..=1.0).contains(&self.corridor_max)
            && self.corridor_min < self.corridor_max;
        if !valid {
            return Err(SpatialError::InvalidCorridor {
                min: self.corridor_min,
                max: self.corridor_max,
            });
        }
        if !(0.0..=1.0).contains(&self.ground_level_y) {
            return Err(SpatialError::InvalidGroundThreshold(self.ground_level_y));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_corridor() {
        let config = PositionConfig::default();
        assert!(config.in_path(0.25));
        assert!(config.in_path(0.75));
        assert!(!config.in_path(0.8));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tight_corridor() {
        let config = PositionConfig::tight_corridor();
        assert!(!config.in_path(0.3));
        assert!(config.in_path(0.5));
    }

    #[test]
    fn test_invalid_corridor_rejected() {
        let config = PositionConfig {
            corridor_min: 0.8,
            corridor_max: 0.2,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SpatialError::InvalidCorridor { .. })));

        let config = PositionConfig {
            ground_level_y: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(SpatialError::InvalidGroundThreshold(1.5)));
    }
}
