//! Spatial Reasoning
//!
//! Turns a normalized detection box into navigational facts:
//! - Horizontal and vertical zoning
//! - Heuristic distance estimation (continuous and staged)
//! - Urgency assessment against the walking corridor
//! - Walkable corridor analysis across a whole frame

pub mod bbox;
pub mod config;
pub mod distance;
pub mod position;
pub mod walkable;

pub use bbox::{BoundingBox, PixelRect};
pub use config::{DistanceEstimator, PositionConfig};
pub use distance::{DistanceBand, DistanceEstimate};
pub use position::{HorizontalZone, PositionAnalyzer, PositionFact, Urgency, VerticalZone};
pub use walkable::{Corridor, CorridorState, Heading, WalkabilityReport, WalkableSpaceAnalyzer};

use thiserror::Error;

/// Spatial configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpatialError {
    #[error("Path corridor [{min}, {max}] is not a valid sub-range of [0, 1]")]
    InvalidCorridor { min: f32, max: f32 },

    #[error("Ground level threshold {0} is outside [0, 1]")]
    InvalidGroundThreshold(f32),
}
