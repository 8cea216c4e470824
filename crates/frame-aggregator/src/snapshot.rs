//! Frame snapshots and severity tiers

use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use hazard::{HazardCategory, Priority};
use spatial::{BoundingBox, PositionFact, Urgency, WalkabilityReport, WalkableSpaceAnalyzer};
use crate::detection::RawDetection;

/// Severity tier used to section guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Safe,
    Medium,
    High,
    Critical,
}

impl SeverityTier {
    /// Higher of the urgency-derived and priority-derived tiers
    pub fn from_assessment(urgency: Urgency, priority: Priority) -> Self {
        let by_urgency = match urgency {
            Urgency::Critical => SeverityTier::Critical,
            Urgency::High => SeverityTier::High,
            Urgency::Medium => SeverityTier::Medium,
            Urgency::Low => SeverityTier::Safe,
        };
        let by_priority = match priority {
            1 => SeverityTier::Critical,
            2 => SeverityTier::High,
            3 => SeverityTier::Medium,
            _ => SeverityTier::Safe,
        };
        by_urgency.max(by_priority)
    }
}

/// Everything derived from one detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionFacts {
    pub detection: RawDetection,
    /// Normalized top label
    pub label: String,
    pub position: PositionFact,
    pub category: HazardCategory,
    pub priority: Priority,
    pub tier: SeverityTier,
}

/// Results for one processed frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Sequence number assigned by the aggregator
    pub sequence: u64,
    /// Included detections in detector order
    pub entries: Vec<DetectionFacts>,
    /// Sorted, comma-joined distinct labels
    pub signature: String,
}

impl FrameSnapshot {
    pub fn new(sequence: u64, entries: Vec<DetectionFacts>) -> Self {
        let signature = signature_of(entries.iter().map(|e| e.label.as_str()));
        Self {
            sequence,
            entries,
            signature,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries of one tier, most urgent first (priority, then distance)
    pub fn tier(&self, tier: SeverityTier) -> Vec<&DetectionFacts> {
        let mut items: Vec<_> = self.entries.iter().filter(|e| e.tier == tier).collect();
        items.sort_by(|a, b| {
            a.priority.cmp(&b.priority).then_with(|| {
                a.position
                    .distance_meters
                    .total_cmp(&b.position.distance_meters)
            })
        });
        items
    }

    pub fn has_tier(&self, tier: SeverityTier) -> bool {
        self.entries.iter().any(|e| e.tier == tier)
    }

    /// Most urgent entry overall
    pub fn most_urgent(&self) -> Option<&DetectionFacts> {
        self.entries.iter().min_by(|a, b| {
            b.tier
                .cmp(&a.tier)
                .then_with(|| a.priority.cmp(&b.priority))
                .then_with(|| a.position.distance_meters.total_cmp(&b.position.distance_meters))
        })
    }

    pub fn boxes(&self) -> impl Iterator<Item = &BoundingBox> {
        self.entries.iter().map(|e| &e.detection.bbox)
    }

    /// Corridor analysis over this frame's boxes
    pub fn walkability(&self) -> WalkabilityReport {
        WalkableSpaceAnalyzer::analyze(self.boxes())
    }
}

/// Order-independent signature of a label set
pub fn signature_of<'a, I>(labels: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_signature_sorted_and_deduplicated() {
        assert_eq!(signature_of(["person", "car", "person"]), "car,person");
        assert_eq!(signature_of(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_tier_takes_higher_assessment() {
        assert_eq!(SeverityTier::from_assessment(Urgency::Low, 1), SeverityTier::Critical);
        assert_eq!(SeverityTier::from_assessment(Urgency::Critical, 4), SeverityTier::Critical);
        assert_eq!(SeverityTier::from_assessment(Urgency::Medium, 2), SeverityTier::High);
        assert_eq!(SeverityTier::from_assessment(Urgency::Low, 4), SeverityTier::Safe);
        assert_eq!(SeverityTier::from_assessment(Urgency::Low, 3), SeverityTier::Medium);
    }

    proptest! {
        #[test]
        fn prop_signature_order_independent(mut labels in proptest::collection::vec("[a-z]{1,6}", 0..8), seed: u64) {
            let forward = signature_of(labels.iter().map(String::as_str));
            let n = labels.len();
            if n > 1 {
                labels.rotate_left((seed as usize) % n);
            }
            labels.reverse();
            let shuffled = signature_of(labels.iter().map(String::as_str));
            prop_assert_eq!(forward, shuffled);
        }
    }
}
