//! Heuristic distance estimation from apparent size
//!
//! Not metric depth: a larger box is claimed to be closer. Two estimators
//! exist. The continuous one is the default; the staged one is kept as an
//! alternative policy selected through [`DistanceEstimator`].

use serde::{Deserialize, Serialize};
use crate::bbox::BoundingBox;
use crate::config::DistanceEstimator;

/// (area, base meters) anchors, strictly decreasing in meters
const AREA_ANCHORS: [(f32, f32); 8] = [
    (0.00, 10.0),
    (0.01, 7.0),
    (0.02, 5.0),
    (0.04, 3.5),
    (0.08, 2.0),
    (0.15, 1.2),
    (0.25, 0.8),
    (0.40, 0.5),
];

/// Descriptive distance bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceBand {
    VeryClose,
    Close,
    Medium,
    Far,
    VeryFar,
}

impl DistanceBand {
    pub fn from_meters(meters: f32) -> Self {
        if meters < 1.0 {
            DistanceBand::VeryClose
        } else if meters < 2.5 {
            DistanceBand::Close
        } else if meters < 5.0 {
            DistanceBand::Medium
        } else if meters < 8.0 {
            DistanceBand::Far
        } else {
            DistanceBand::VeryFar
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            DistanceBand::VeryClose => "very close",
            DistanceBand::Close => "close",
            DistanceBand::Medium => "medium distance",
            DistanceBand::Far => "far",
            DistanceBand::VeryFar => "very far",
        }
    }
}

/// Estimated distance of one object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEstimate {
    /// Heuristic meters
    pub meters: f32,
    /// Bucket the estimate falls in
    pub band: DistanceBand,
    /// Human phrase for the bucket
    pub label: String,
}

impl DistanceEstimate {
    /// Run the selected estimator on a (sanitized) box
    pub fn estimate(bbox: &BoundingBox, estimator: DistanceEstimator) -> Self {
        match estimator {
            DistanceEstimator::Continuous => {
                let meters = continuous_meters(bbox);
                let band = DistanceBand::from_meters(meters);
                Self {
                    meters,
                    band,
                    label: band.phrase().to_string(),
                }
            }
            DistanceEstimator::Staged => staged(bbox.area()),
        }
    }
}

/// Base meters for an apparent area, piecewise-linear between anchors
pub fn base_meters(area: f32) -> f32 {
    if area <= 0.0 || area.is_nan() {
        return AREA_ANCHORS[0].1;
    }

    for pair in AREA_ANCHORS.windows(2) {
        let (a0, m0) = pair[0];
        let (a1, m1) = pair[1];
        if area <= a1 {
            let t = (area - a0) / (a1 - a0);
            return m0 + t * (m1 - m0);
        }
    }

    // Past the last anchor: inverse-proportional tail, continuous at the anchor
    let (last_area, last_meters) = AREA_ANCHORS[AREA_ANCHORS.len() - 1];
    last_meters * last_area / area
}

/// Continuous estimate: base meters with vertical and width corrections
pub fn continuous_meters(bbox: &BoundingBox) -> f32 {
    let base = base_meters(bbox.area());
    let vertical_correction = 1.0 + bbox.center_y() * 0.3;
    let width_correction = (1.0 - bbox.width * 0.5).max(0.7);
    base * vertical_correction * width_correction
}

/// Staged buckets on area alone, with a representative meters value each
fn staged(area: f32) -> DistanceEstimate {
    let (meters, band, label) = if area > 0.4 {
        (1.5, DistanceBand::VeryClose, "<2m")
    } else if area > 0.25 {
        (2.5, DistanceBand::Close, "2-3m")
    } else if area > 0.15 {
        (4.5, DistanceBand::Medium, "4-5m")
    } else if area > 0.08 {
        (7.0, DistanceBand::Far, "6-8m")
    } else {
        (10.0, DistanceBand::VeryFar, ">8m")
    };

    DistanceEstimate {
        meters,
        band,
        label: label.to_string(),
    }
}
