//! Detection Frame Aggregation
//!
//! Runs position analysis and hazard classification over every detection
//! of a frame, buckets the results into severity tiers and computes the
//! label signature used for scene-change detection. The aggregator keeps
//! only the latest snapshot.

mod aggregator;
mod detection;
mod snapshot;

pub use aggregator::{AggregatorConfig, FrameAggregator};
pub use detection::{LabelScore, RawDetection};
pub use snapshot::{signature_of, DetectionFacts, FrameSnapshot, SeverityTier};
