//! Normalized bounding boxes

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in normalized frame coordinates.
///
/// `x`/`y` is the origin, `width`/`height` the extent, all as fractions of
/// the inference frame. `x + width` is not clamped to 1; detector output is
/// used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Bounding box in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Copy with negative or NaN extents collapsed to zero.
    ///
    /// A malformed box is still positioned, it just reads as zero-area
    /// (far away).
    pub fn sanitized(&self) -> Self {
        Self {
            x: finite_or_zero(self.x),
            y: finite_or_zero(self.y),
            width: finite_or_zero(self.width).max(0.0),
            height: finite_or_zero(self.height).max(0.0),
        }
    }

    /// Whether sanitizing would change this box
    pub fn is_malformed(&self) -> bool {
        self.sanitized() != *self
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Scale into pixel coordinates of a `frame_width` x `frame_height` image
    pub fn to_pixels(&self, frame_width: u32, frame_height: u32) -> PixelRect {
        let w = frame_width as f32;
        let h = frame_height as f32;
        PixelRect {
            x: (self.x * w) as i32,
            y: (self.y * h) as i32,
            width: (self.width * w) as i32,
            height: (self.height * h) as i32,
        }
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_geometry() {
        let b = BoundingBox::new(0.4, 0.6, 0.3, 0.3);
        assert!((b.center_x() - 0.55).abs() < 1e-6);
        assert!((b.center_y() - 0.75).abs() < 1e-6);
        assert!((b.area() - 0.09).abs() < 1e-6);
    }

    #[test]
    fn test_negative_extent_becomes_zero_area() {
        let b = BoundingBox::new(0.5, 0.5, -0.2, 0.3);
        assert!(b.is_malformed());

        let clean = b.sanitized();
        assert_eq!(clean.width, 0.0);
        assert_eq!(clean.height, 0.3);
        assert_eq!(clean.area(), 0.0);
        assert_eq!(clean.x, 0.5);
    }

    #[test]
    fn test_nan_is_sanitized() {
        let b = BoundingBox::new(f32::NAN, 0.1, 0.2, f32::NAN);
        let clean = b.sanitized();
        assert_eq!(clean.x, 0.0);
        assert_eq!(clean.height, 0.0);
    }

    #[test]
    fn test_out_of_range_origin_is_kept() {
        let b = BoundingBox::new(0.9, 0.1, 0.5, 0.2);
        assert!(!b.is_malformed());
        assert!(b.center_x() > 1.0);
    }

    #[test]
    fn test_to_pixels() {
        let b = BoundingBox::new(0.25, 0.5, 0.5, 0.25);
        let px = b.to_pixels(640, 480);
        assert_eq!(px, PixelRect { x: 160, y: 240, width: 320, height: 120 });
    }
}
