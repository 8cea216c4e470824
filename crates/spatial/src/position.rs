//! Per-object position analysis

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::bbox::BoundingBox;
use crate::config::PositionConfig;
use crate::distance::{DistanceBand, DistanceEstimate};

/// Horizontal zone by box centerX.
///
/// Boundaries at 0.10, 0.25, 0.40, 0.60, 0.75, 0.90; each zone is
/// half-open `[lower, upper)`, so every value lands in exactly one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalZone {
    FarLeftEdge,
    Left,
    SlightlyLeft,
    Ahead,
    SlightlyRight,
    Right,
    FarRightEdge,
}

impl HorizontalZone {
    pub const ALL: [HorizontalZone; 7] = [
        HorizontalZone::FarLeftEdge,
        HorizontalZone::Left,
        HorizontalZone::SlightlyLeft,
        HorizontalZone::Ahead,
        HorizontalZone::SlightlyRight,
        HorizontalZone::Right,
        HorizontalZone::FarRightEdge,
    ];

    pub fn from_center_x(center_x: f32) -> Self {
        if center_x < 0.10 {
            HorizontalZone::FarLeftEdge
        } else if center_x < 0.25 {
            HorizontalZone::Left
        } else if center_x < 0.40 {
            HorizontalZone::SlightlyLeft
        } else if center_x < 0.60 {
            HorizontalZone::Ahead
        } else if center_x < 0.75 {
            HorizontalZone::SlightlyRight
        } else if center_x < 0.90 {
            HorizontalZone::Right
        } else {
            HorizontalZone::FarRightEdge
        }
    }

    /// `[lower, upper)` bounds of the zone; the outer edges are open-ended
    pub fn bounds(&self) -> (f32, f32) {
        match self {
            HorizontalZone::FarLeftEdge => (f32::NEG_INFINITY, 0.10),
            HorizontalZone::Left => (0.10, 0.25),
            HorizontalZone::SlightlyLeft => (0.25, 0.40),
            HorizontalZone::Ahead => (0.40, 0.60),
            HorizontalZone::SlightlyRight => (0.60, 0.75),
            HorizontalZone::Right => (0.75, 0.90),
            HorizontalZone::FarRightEdge => (0.90, f32::INFINITY),
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            HorizontalZone::FarLeftEdge => "far left edge",
            HorizontalZone::Left => "left side",
            HorizontalZone::SlightlyLeft => "slightly left of center",
            HorizontalZone::Ahead => "directly ahead",
            HorizontalZone::SlightlyRight => "slightly right of center",
            HorizontalZone::Right => "right side",
            HorizontalZone::FarRightEdge => "far right edge",
        }
    }

    /// Actionable instruction for an object in this zone
    pub fn instruction(&self) -> &'static str {
        match self {
            HorizontalZone::FarLeftEdge => "sharp right turn available",
            HorizontalZone::Left => "keep slightly right, about 1 step",
            HorizontalZone::SlightlyLeft => "move right about 2-3 steps",
            HorizontalZone::Ahead => "stop, then step left or right to pass",
            HorizontalZone::SlightlyRight => "move left about 2-3 steps",
            HorizontalZone::Right => "keep slightly left, about 1 step",
            HorizontalZone::FarRightEdge => "sharp left turn available",
        }
    }
}

/// Vertical zone by box origin `y` (higher `y` is lower in the frame)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalZone {
    Ground,
    WaistToChest,
    Head,
    Overhead,
}

impl VerticalZone {
    pub fn from_y(y: f32) -> Self {
        if y > 0.7 {
            VerticalZone::Ground
        } else if y > 0.4 {
            VerticalZone::WaistToChest
        } else if y > 0.2 {
            VerticalZone::Head
        } else {
            VerticalZone::Overhead
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            VerticalZone::Ground => "ground level",
            VerticalZone::WaistToChest => "waist to chest height",
            VerticalZone::Head => "head height",
            VerticalZone::Overhead => "overhead",
        }
    }
}

/// Urgency of an object relative to the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// Combine estimated distance, path membership and ground level
    pub fn assess(distance_m: f32, in_path: bool, ground_level: bool) -> Self {
        if distance_m <= 1.5 && in_path && ground_level {
            Urgency::Critical
        } else if distance_m <= 2.5 && in_path {
            Urgency::High
        } else if distance_m <= 4.0 && in_path {
            Urgency::Medium
        } else if distance_m <= 2.0 {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "immediate",
        }
    }
}

/// Navigational facts derived from one detection box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionFact {
    pub horizontal_zone: HorizontalZone,
    pub vertical_zone: VerticalZone,
    pub distance_meters: f32,
    pub distance_band: DistanceBand,
    pub distance_label: String,
    pub urgency: Urgency,
    pub direction_instruction: String,
    /// centerX inside the walking corridor
    pub in_path: bool,
}

/// Maps bounding boxes to [`PositionFact`]s. Pure; safe to share.
#[derive(Debug, Clone, Default)]
pub struct PositionAnalyzer {
    config: PositionConfig,
}

impl PositionAnalyzer {
    pub fn new(config: PositionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PositionConfig {
        &self.config
    }

    /// Analyze one box. Total: malformed extents read as zero-area.
    pub fn analyze(&self, bbox: &BoundingBox) -> PositionFact {
        if bbox.is_malformed() {
            warn!("Sanitizing malformed bounding box {:?}", bbox);
        }
        let bbox = bbox.sanitized();

        let center_x = bbox.center_x();
        let horizontal_zone = HorizontalZone::from_center_x(center_x);
        let vertical_zone = VerticalZone::from_y(bbox.y);
        let distance = DistanceEstimate::estimate(&bbox, self.config.estimator);

        let in_path = self.config.in_path(center_x);
        let ground_level = bbox.y > self.config.ground_level_y;
        let urgency = Urgency::assess(distance.meters, in_path, ground_level);

        debug!(
            "Box cx={:.2} y={:.2} area={:.3} -> {:?}, {:?}, {:.1}m, {:?}",
            center_x,
            bbox.y,
            bbox.area(),
            horizontal_zone,
            vertical_zone,
            distance.meters,
            urgency
        );

        PositionFact {
            horizontal_zone,
            vertical_zone,
            distance_meters: distance.meters,
            distance_band: distance.band,
            distance_label: distance.label,
            urgency,
            direction_instruction: horizontal_zone.instruction().to_string(),
            in_path,
        }
    }
}
