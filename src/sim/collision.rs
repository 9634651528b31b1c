//! Collision primitives for the runner
//!
//! Everything on screen is either an axis-aligned rectangle (player hitbox,
//! obstacles) or a circle (sparks), so two tests cover the whole game:
//! AABB overlap and circle-vs-rect via the closest-point method.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Right/bottom corner (exclusive)
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Clamp a point into the rectangle
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.pos, self.max())
    }
}

/// Standard AABB overlap test over half-open intervals.
///
/// Strict inequalities: rectangles that merely share an edge do not collide.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.pos.x < b_max.x && a_max.x > b.pos.x && a.pos.y < b_max.y && a_max.y > b.pos.y
}

/// Circle-vs-rect test via the closest-point method: clamp the circle center
/// to the rectangle bounds and compare squared distance to squared radius.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    (center - closest).length_squared() <= radius * radius
}
