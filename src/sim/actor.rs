//! Falling balls

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::color::Color;
use super::track::Track;
use crate::consts::*;

/// Acceleration every new actor starts with
pub const fn initial_acceleration() -> Vec2 {
    Vec2::new(INITIAL_ACCELERATION.0, INITIAL_ACCELERATION.1)
}

/// A single falling ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    /// Index of the lane the actor was spawned on; landings are counted there
    pub track: usize,
    /// Top-left corner of the bounding square
    pub origin: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub color: Color,
    /// Tick of the first update
    #[serde(default)]
    started_at: Option<u64>,
}

impl Actor {
    /// New actor at rest, centered at the top of `track`
    pub fn new(id: u32, track: &Track, color: Color) -> Self {
        Self::with_motion(id, track, color, Vec2::ZERO, initial_acceleration())
    }

    /// New actor at the top of `track` with an explicit initial motion
    pub fn with_motion(
        id: u32,
        track: &Track,
        color: Color,
        velocity: Vec2,
        acceleration: Vec2,
    ) -> Self {
        let origin = Vec2::new(
            track.origin.x + (track.half_width - ACTOR_SIZE / 2.0),
            track.origin.y,
        );
        Self {
            id,
            track: track.index,
            origin,
            velocity,
            acceleration,
            color,
            started_at: None,
        }
    }

    /// Geometric center, used for field distances
    #[inline]
    pub fn mass(&self) -> Vec2 {
        self.origin + Vec2::splat(ACTOR_SIZE / 2.0)
    }

    #[inline]
    pub fn size(&self) -> f32 {
        ACTOR_SIZE
    }

    /// Advance one tick: position, then velocity, then decay the impulse
    pub fn update(&mut self, now: u64) {
        self.started_at.get_or_insert(now);

        self.origin += self.velocity;
        self.velocity += self.acceleration;
        self.acceleration *= ACCELERATION_DECAY;
    }

    /// Ticks since the first update, if it has happened
    pub fn age(&self, now: u64) -> Option<u64> {
        self.started_at.map(|start| now.saturating_sub(start))
    }

    /// Hit box: the bounding square inset on every side
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corner(self.origin, Vec2::splat(ACTOR_SIZE)).inset(ACTOR_INSET)
    }
}
