//! Axis-aligned rectangles and edge-crossing tests
//!
//! World coordinates put the origin at the world center, with y growing
//! downward: `top` is the smaller y, `bottom` the larger.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Crossing state for a single edge of an outer rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeFlags {
    /// Inner rectangle reached or passed the edge
    pub crossed: bool,
    /// Inner rectangle is still partially on the inside of the edge
    pub straddling: bool,
}

impl EdgeFlags {
    /// Crossed while still overlapping the edge
    #[inline]
    pub fn crossing(&self) -> bool {
        self.crossed && self.straddling
    }

    /// Crossed and already entirely on the far side
    #[inline]
    pub fn passed(&self) -> bool {
        self.crossed && !self.straddling
    }
}

/// Per-edge crossing flags of an inner rectangle against an outer one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeCrossing {
    pub left: EdgeFlags,
    pub right: EdgeFlags,
    pub top: EdgeFlags,
    pub bottom: EdgeFlags,
}

impl EdgeCrossing {
    /// Flags as seen after mirroring both rectangles across x = 0
    pub fn mirrored(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            top: self.top,
            bottom: self.bottom,
        }
    }
}

impl Bounds {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        debug_assert!(left < right && top < bottom, "degenerate bounds");
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle centered on the origin with the given half extents
    pub fn centered(half_extents: Vec2) -> Self {
        Self::new(
            -half_extents.x,
            -half_extents.y,
            half_extents.x,
            half_extents.y,
        )
    }

    /// Rectangle from a top-left corner and a size
    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self::new(corner.x, corner.y, corner.x + size.x, corner.y + size.y)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        Self::new(
            self.left + margin,
            self.top + margin,
            self.right - margin,
            self.bottom - margin,
        )
    }

    /// Mirror across the vertical axis x = 0
    pub fn mirrored(&self) -> Self {
        Self::new(-self.right, self.top, -self.left, self.bottom)
    }

    /// Half-open containment: right and bottom edges are excluded
    pub fn contains(&self, point: Vec2) -> bool {
        (self.left <= point.x && point.x < self.right)
            && (self.top <= point.y && point.y < self.bottom)
    }

    /// Test which edges of `self` the `inner` rectangle has crossed
    pub fn edge_crossing(&self, inner: &Bounds) -> EdgeCrossing {
        let mut flags = EdgeCrossing::default();

        if inner.left <= self.left {
            flags.left = EdgeFlags {
                crossed: true,
                straddling: inner.right > self.left,
            };
        }

        if inner.right >= self.right {
            flags.right = EdgeFlags {
                crossed: true,
                straddling: inner.left < self.right,
            };
        }

        if inner.top <= self.top {
            flags.top = EdgeFlags {
                crossed: true,
                straddling: inner.bottom > self.top,
            };
        }

        if inner.bottom >= self.bottom {
            flags.bottom = EdgeFlags {
                crossed: true,
                straddling: inner.top < self.bottom,
            };
        }

        flags
    }
}
