//! Axis-aligned collision rectangles
//!
//! Every entity exposes its hitbox as an [`Aabb`]; the tick resolves overlaps
//! with plain rectangle intersection. Overlap is strict: rectangles that only
//! share an edge do not intersect.

use glam::Vec2;

/// An axis-aligned bounding box, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the given size with its bottom edge at `baseline`, centered on `cx`
    pub fn anchored(cx: f32, baseline: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, baseline - h, w, h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// True if the two boxes overlap with positive area
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}
