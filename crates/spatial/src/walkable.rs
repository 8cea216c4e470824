//! Walkable corridor analysis across a whole frame

use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::bbox::BoundingBox;

/// Clearance reported for an empty corridor (meters)
const OPEN_CLEARANCE_M: f32 = 10.0;

/// Center clearance needed to recommend going straight (meters)
const STRAIGHT_CLEARANCE_M: f32 = 3.0;

/// Lateral third of the walking path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corridor {
    Left,
    Center,
    Right,
}

impl Corridor {
    pub fn from_center_x(center_x: f32) -> Self {
        if center_x < 0.33 {
            Corridor::Left
        } else if center_x < 0.67 {
            Corridor::Center
        } else {
            Corridor::Right
        }
    }

    /// Area above which one object blocks the corridor
    pub fn blocking_area(&self) -> f32 {
        match self {
            Corridor::Center => 0.15,
            Corridor::Left | Corridor::Right => 0.10,
        }
    }
}

/// State of one corridor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorridorState {
    pub blocked: bool,
    /// Minimum rough distance among members (meters)
    pub clearance_m: f32,
    pub object_count: usize,
}

impl Default for CorridorState {
    fn default() -> Self {
        Self {
            blocked: false,
            clearance_m: OPEN_CLEARANCE_M,
            object_count: 0,
        }
    }
}

/// Recommended heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    Straight,
    Left,
    Right,
    Careful,
}

impl Heading {
    pub fn phrase(&self) -> &'static str {
        match self {
            Heading::Straight => "continue straight ahead",
            Heading::Left => "move to the left, it is clearer",
            Heading::Right => "move to the right, it is clearer",
            Heading::Careful => "proceed carefully, obstacles detected",
        }
    }
}

/// Walkability of the three corridors in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkabilityReport {
    pub left: CorridorState,
    pub center: CorridorState,
    pub right: CorridorState,
    pub heading: Heading,
}

impl Default for WalkabilityReport {
    fn default() -> Self {
        WalkableSpaceAnalyzer::analyze(std::iter::empty())
    }
}

impl WalkabilityReport {
    pub fn corridor(&self, corridor: Corridor) -> &CorridorState {
        match corridor {
            Corridor::Left => &self.left,
            Corridor::Center => &self.center,
            Corridor::Right => &self.right,
        }
    }
}

/// Aggregates boxes into corridor states and a heading
pub struct WalkableSpaceAnalyzer;

impl WalkableSpaceAnalyzer {
    /// Rough distance used only for corridor clearance
    pub fn rough_distance(area: f32) -> f32 {
        (10.0 * (1.0 - area)).max(1.0)
    }

    pub fn analyze<'a, I>(boxes: I) -> WalkabilityReport
    where
        I: IntoIterator<Item = &'a BoundingBox>,
    {
        let mut left = CorridorState::default();
        let mut center = CorridorState::default();
        let mut right = CorridorState::default();

        for bbox in boxes {
            let bbox = bbox.sanitized();
            let corridor = Corridor::from_center_x(bbox.center_x());
            let state = match corridor {
                Corridor::Left => &mut left,
                Corridor::Center => &mut center,
                Corridor::Right => &mut right,
            };

            let area = bbox.area();
            state.object_count += 1;
            state.clearance_m = state.clearance_m.min(Self::rough_distance(area));
            if area > corridor.blocking_area() {
                state.blocked = true;
            }
        }

        let heading = if !center.blocked && center.clearance_m > STRAIGHT_CLEARANCE_M {
            Heading::Straight
        } else if !left.blocked && left.clearance_m > right.clearance_m {
            Heading::Left
        } else if !right.blocked {
            Heading::Right
        } else {
            Heading::Careful
        };

        debug!(
            "Corridors L(blocked={}, {:.1}m) C(blocked={}, {:.1}m) R(blocked={}, {:.1}m) -> {:?}",
            left.blocked, left.clearance_m, center.blocked, center.clearance_m,
            right.blocked, right.clearance_m, heading
        );

        WalkabilityReport {
            left,
            center,
            right,
            heading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame_is_open() {
        let report = WalkabilityReport::default();
        assert!(!report.center.blocked);
        assert_eq!(report.center.clearance_m, 10.0);
        assert_eq!(report.heading, Heading::Straight);
    }

    #[test]
    fn test_center_blocked_by_large_object() {
        // centerX 0.5, area 0.20
        let boxes = [BoundingBox::new(0.3, 0.5, 0.4, 0.5)];
        let report = WalkableSpaceAnalyzer::analyze(&boxes);

        assert!(report.center.blocked);
        assert_eq!(report.center.object_count, 1);
        assert!((report.center.clearance_m - 8.0).abs() < 1e-5);

        assert!(!report.left.blocked);
        assert_eq!(report.left.clearance_m, 10.0);
        assert!(!report.right.blocked);
        assert_eq!(report.right.clearance_m, 10.0);

        // Equal side clearances fall through to the right
        assert_eq!(report.heading, Heading::Right);
    }

    #[test]
    fn test_prefers_clearer_left() {
        let boxes = [
            BoundingBox::new(0.3, 0.5, 0.4, 0.5),
            BoundingBox::new(0.75, 0.5, 0.2, 0.3),
        ];
        let report = WalkableSpaceAnalyzer::analyze(&boxes);
        assert!(!report.right.blocked);
        assert!(report.right.clearance_m < report.left.clearance_m);
        assert_eq!(report.heading, Heading::Left);
    }

    #[test]
    fn test_all_blocked_is_careful() {
        let boxes = [
            BoundingBox::new(0.0, 0.5, 0.3, 0.5),
            BoundingBox::new(0.3, 0.5, 0.4, 0.5),
            BoundingBox::new(0.7, 0.5, 0.3, 0.5),
        ];
        let report = WalkableSpaceAnalyzer::analyze(&boxes);
        assert_eq!(report.heading, Heading::Careful);
    }

    #[test]
    fn test_small_center_object_keeps_straight() {
        let boxes = [BoundingBox::new(0.45, 0.5, 0.1, 0.1)];
        let report = WalkableSpaceAnalyzer::analyze(&boxes);
        assert!(!report.center.blocked);
        assert_eq!(report.heading, Heading::Straight);
    }

    #[test]
    fn test_rough_distance_floor() {
        assert_eq!(WalkableSpaceAnalyzer::rough_distance(0.95), 1.0);
        assert!((WalkableSpaceAnalyzer::rough_distance(0.2) - 8.0).abs() < 1e-5);
    }
}
