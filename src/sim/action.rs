//! Pointer-held force field
//!
//! The field only steers sideways: it pushes actors away from its origin
//! along x, with a strength that falls off linearly to zero at the
//! interaction width.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use crate::consts::FIELD_RADIUS;

/// A transient force field at a world position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionPoint {
    pub origin: Vec2,
}

impl ActionPoint {
    pub fn new(origin: Vec2) -> Self {
        Self { origin }
    }

    /// Drawn radius of the marker
    #[inline]
    pub fn radius(&self) -> f32 {
        FIELD_RADIUS
    }

    /// Strength at `point`: 1 at the origin, 0 at `width` and beyond
    pub fn falloff(&self, point: Vec2, width: f32) -> f32 {
        if width.is_nan() || width <= 0.0 {
            return 0.0;
        }
        1.0 - (point.distance(self.origin) / width).min(1.0)
    }

    /// Velocity change the field would give `actor`
    pub fn impulse(&self, actor: &Actor, width: f32) -> Vec2 {
        let offset = actor.mass() - self.origin;
        let factor = self.falloff(actor.mass(), width);

        let mut direction = offset.normalize_or_zero();
        direction.y = 0.0;

        direction * factor
    }

    /// Nudge `actor` horizontally
    pub fn apply(&self, actor: &mut Actor, width: f32) {
        actor.velocity += self.impulse(actor, width);
    }
}

/// Input notifications from the pointer collaborator, in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Vec2),
    Move(Vec2),
    Release,
}
