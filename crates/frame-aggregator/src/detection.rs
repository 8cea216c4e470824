//! Raw detector output

use serde::{Deserialize, Serialize};
use spatial::BoundingBox;

/// One ranked alternate classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub confidence: f32,
}

/// One detector output for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Top classification
    pub label: String,

    /// Top-label confidence, expected in [0, 1]
    pub confidence: f32,

    /// Normalized box in inference-frame coordinates
    #[serde(rename = "box", alias = "bbox")]
    pub bbox: BoundingBox,

    /// Ranked alternates below the top label
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<LabelScore>,
}

impl RawDetection {
    pub fn new(label: impl Into<String>, confidence: f32, bbox: BoundingBox) -> Self {
        Self {
            label: label.into(),
            confidence,
            bbox,
            alternates: Vec::new(),
        }
    }

    pub fn with_alternates(mut self, alternates: Vec<LabelScore>) -> Self {
        self.alternates = alternates;
        self
    }

    /// Confidence clamped into [0, 1]; NaN reads as 0
    pub fn clamped_confidence(&self) -> f32 {
        if self.confidence.is_nan() {
            0.0
        } else {
            self.confidence.clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_clamping() {
        let bbox = BoundingBox::new(0.1, 0.1, 0.1, 0.1);
        assert_eq!(RawDetection::new("car", 1.7, bbox).clamped_confidence(), 1.0);
        assert_eq!(RawDetection::new("car", -0.3, bbox).clamped_confidence(), 0.0);
        assert_eq!(RawDetection::new("car", f32::NAN, bbox).clamped_confidence(), 0.0);
        assert_eq!(RawDetection::new("car", 0.42, bbox).clamped_confidence(), 0.42);
    }

    #[test]
    fn test_deserialize_box_field() {
        let json = r#"{"label":"car","confidence":0.9,"box":{"x":0.4,"y":0.6,"width":0.3,"height":0.3}}"#;
        let det: RawDetection = serde_json::from_str(json).unwrap();
        assert_eq!(det.label, "car");
        assert_eq!(det.bbox, BoundingBox::new(0.4, 0.6, 0.3, 0.3));
        assert!(det.alternates.is_empty());
    }
}
