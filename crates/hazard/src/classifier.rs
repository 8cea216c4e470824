//! Label classifier and priority mapping

use serde::{Deserialize, Serialize};
use tracing::debug;

const MOVING_VEHICLES: &[&str] = &[
    "car", "truck", "bus", "motorcycle", "bicycle", "train", "boat",
    "airplane", "scooter", "van", "taxi",
];

const LIVING_BEINGS: &[&str] = &[
    "person", "dog", "cat", "horse", "cow", "elephant", "bear", "sheep",
    "zebra", "giraffe",
];

// "bicycle" also reads as a parked obstacle; MovingVehicle is checked first.
const PATH_BLOCKERS: &[&str] = &[
    "chair", "couch", "dining table", "bench", "bed", "suitcase", "backpack",
    "handbag", "umbrella", "potted plant", "vase", "tv", "laptop", "bicycle",
    "microwave", "oven", "toaster", "sink", "refrigerator",
    "stop sign", "traffic light", "fire hydrant", "parking meter",
];

const POTENTIAL_HAZARDS: &[&str] = &[
    "knife", "scissors", "baseball bat", "tennis racket", "hot dog", "pizza",
    "cake", "donut",
];

/// Detector vocabulary aliases mapped onto canonical names
const ALIASES: &[(&str, &str)] = &[
    ("motorbike", "motorcycle"),
    ("aeroplane", "airplane"),
    ("sofa", "couch"),
    ("diningtable", "dining table"),
    ("pottedplant", "potted plant"),
    ("tvmonitor", "tv"),
];

/// Obstacle priority, 1 (most urgent) to 4 (least)
pub type Priority = u8;

/// Hazard category of a detected object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardCategory {
    MovingVehicle,
    LivingBeing,
    PathBlocker,
    PotentialHazard,
    GeneralObject,
}

impl HazardCategory {
    /// Machine code used in serialized payloads
    pub fn code(&self) -> &'static str {
        match self {
            HazardCategory::MovingVehicle => "MOVING_VEHICLE",
            HazardCategory::LivingBeing => "LIVING_BEING",
            HazardCategory::PathBlocker => "PATH_BLOCKER",
            HazardCategory::PotentialHazard => "POTENTIAL_HAZARD",
            HazardCategory::GeneralObject => "GENERAL_OBJECT",
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            HazardCategory::MovingVehicle => "moving vehicle",
            HazardCategory::LivingBeing => "living being",
            HazardCategory::PathBlocker => "path blocker",
            HazardCategory::PotentialHazard => "potential hazard",
            HazardCategory::GeneralObject => "object",
        }
    }
}

/// Trim, lowercase, collapse inner whitespace and resolve aliases
pub fn normalize_label(label: &str) -> String {
    let lowered = label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(lowered)
}

/// Classify a label by exact match on its normalized form
pub fn classify(label: &str) -> HazardCategory {
    let normalized = normalize_label(label);
    let name = normalized.as_str();

    if MOVING_VEHICLES.contains(&name) {
        HazardCategory::MovingVehicle
    } else if LIVING_BEINGS.contains(&name) {
        HazardCategory::LivingBeing
    } else if PATH_BLOCKERS.contains(&name) {
        HazardCategory::PathBlocker
    } else if POTENTIAL_HAZARDS.contains(&name) {
        HazardCategory::PotentialHazard
    } else {
        HazardCategory::GeneralObject
    }
}

/// Category and priority for a label at a distance, in or out of the path
pub fn priority(label: &str, distance_m: f32, in_path: bool) -> (HazardCategory, Priority) {
    let category = classify(label);
    let priority = match category {
        HazardCategory::MovingVehicle => 1,
        HazardCategory::LivingBeing => {
            if distance_m <= 3.0 { 1 } else { 2 }
        }
        HazardCategory::PathBlocker => {
            if distance_m <= 2.0 && in_path { 2 } else { 3 }
        }
        HazardCategory::PotentialHazard => {
            if distance_m <= 1.5 { 2 } else { 4 }
        }
        HazardCategory::GeneralObject => {
            if distance_m <= 1.0 && in_path { 3 } else { 4 }
        }
    };

    debug!("'{}' -> {} priority {} ({:.1}m, in_path={})",
        label, category.code(), priority, distance_m, in_path);

    (category, priority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_categories() {
        assert_eq!(classify("car"), HazardCategory::MovingVehicle);
        assert_eq!(classify("Person"), HazardCategory::LivingBeing);
        assert_eq!(classify("  dining   table "), HazardCategory::PathBlocker);
        assert_eq!(classify("fire hydrant"), HazardCategory::PathBlocker);
        assert_eq!(classify("scissors"), HazardCategory::PotentialHazard);
        assert_eq!(classify("pole"), HazardCategory::GeneralObject);
        assert_eq!(classify(""), HazardCategory::GeneralObject);
    }

    #[test]
    fn test_exact_match_not_substring() {
        assert_eq!(classify("carpet"), HazardCategory::GeneralObject);
        assert_eq!(classify("cat"), HazardCategory::LivingBeing);
        assert_eq!(classify("scatter"), HazardCategory::GeneralObject);
    }

    #[test]
    fn test_bicycle_is_vehicle() {
        assert_eq!(classify("bicycle"), HazardCategory::MovingVehicle);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(normalize_label("Motorbike"), "motorcycle");
        assert_eq!(classify("motorbike"), HazardCategory::MovingVehicle);
        assert_eq!(classify("sofa"), HazardCategory::PathBlocker);
        assert_eq!(classify("tvmonitor"), HazardCategory::PathBlocker);
    }

    #[test]
    fn test_vehicle_always_priority_one() {
        assert_eq!(priority("car", 9.0, false), (HazardCategory::MovingVehicle, 1));
        assert_eq!(priority("bus", 0.5, true).1, 1);
    }

    #[test]
    fn test_priority_mapping() {
        assert_eq!(priority("dog", 3.0, false).1, 1);
        assert_eq!(priority("dog", 3.5, true).1, 2);
        assert_eq!(priority("chair", 1.8, true).1, 2);
        assert_eq!(priority("chair", 1.8, false).1, 3);
        assert_eq!(priority("knife", 1.0, false).1, 2);
        assert_eq!(priority("knife", 2.0, true).1, 4);
        assert_eq!(priority("pole", 0.9, true).1, 3);
        assert_eq!(priority("pole", 0.9, false).1, 4);
    }

    #[test]
    fn test_category_codes() {
        assert_eq!(HazardCategory::PathBlocker.code(), "PATH_BLOCKER");
    }

    proptest! {
        #[test]
        fn prop_classify_is_total_and_deterministic(label in ".*") {
            prop_assert_eq!(classify(&label), classify(&label));
        }

        #[test]
        fn prop_priority_in_range(label in "[a-z ]{0,12}", distance in 0.0f32..20.0, in_path: bool) {
            let (_, p) = priority(&label, distance, in_path);
            prop_assert!((1..=4).contains(&p));
        }

        #[test]
        fn prop_vehicle_priority_ignores_distance(distance in 0.0f32..100.0, in_path: bool) {
            for label in MOVING_VEHICLES {
                prop_assert_eq!(priority(label, distance, in_path).1, 1);
            }
        }
    }
}
