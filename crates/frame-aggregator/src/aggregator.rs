//! Frame aggregator holding the latest snapshot

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use spatial::{PositionAnalyzer, PositionConfig};
use crate::detection::RawDetection;
use crate::snapshot::{DetectionFacts, FrameSnapshot, SeverityTier};

/// Aggregator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Detections at or below this confidence are left out of the snapshot
    pub confidence_floor: f32,
    /// Position analysis settings
    pub position: PositionConfig,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            confidence_floor: 0.01,
            position: PositionConfig::default(),
        }
    }
}

/// Builds one [`FrameSnapshot`] per processed frame.
///
/// Only the latest snapshot is retained; each call replaces it.
#[derive(Debug)]
pub struct FrameAggregator {
    analyzer: PositionAnalyzer,
    confidence_floor: f32,
    last: Option<Arc<FrameSnapshot>>,
    frames_processed: u64,
}

impl FrameAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self {
            analyzer: PositionAnalyzer::new(config.position),
            confidence_floor: config.confidence_floor,
            last: None,
            frames_processed: 0,
        }
    }

    pub fn confidence_floor(&self) -> f32 {
        self.confidence_floor
    }

    /// Analyze a frame's detections and retain the result as the latest snapshot
    pub fn aggregate<I>(&mut self, detections: I) -> Arc<FrameSnapshot>
    where
        I: IntoIterator<Item = RawDetection>,
    {
        self.frames_processed += 1;
        let sequence = self.frames_processed;

        let mut skipped = 0usize;
        let entries: Vec<DetectionFacts> = detections
            .into_iter()
            .filter_map(|mut detection| {
                let confidence = detection.clamped_confidence();
                if confidence != detection.confidence {
                    warn!("Clamping confidence {} for '{}'", detection.confidence, detection.label);
                    detection.confidence = confidence;
                }
                if confidence <= self.confidence_floor {
                    skipped += 1;
                    return None;
                }
                Some(self.analyze_detection(detection))
            })
            .collect();

        let snapshot = Arc::new(FrameSnapshot::new(sequence, entries));
        debug!(
            "Frame #{}: {} included, {} below floor, signature '{}', critical={}",
            sequence,
            snapshot.len(),
            skipped,
            snapshot.signature,
            snapshot.has_tier(SeverityTier::Critical)
        );

        self.last = Some(Arc::clone(&snapshot));
        snapshot
    }

    fn analyze_detection(&self, detection: RawDetection) -> DetectionFacts {
        let position = self.analyzer.analyze(&detection.bbox);
        let (category, priority) =
            hazard::priority(&detection.label, position.distance_meters, position.in_path);
        let tier = SeverityTier::from_assessment(position.urgency, priority);

        DetectionFacts {
            label: hazard::normalize_label(&detection.label),
            detection,
            position,
            category,
            priority,
            tier,
        }
    }

    /// Latest snapshot, if any frame has been processed
    pub fn last_snapshot(&self) -> Option<Arc<FrameSnapshot>> {
        self.last.clone()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Drop the retained snapshot (e.g. when the camera session restarts)
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for FrameAggregator {
    fn default() -> Self {
        Self::new(AggregatorConfig::default())
    }
}
