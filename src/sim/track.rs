//! Vertical lanes and their landing counters

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::bounds::Bounds;
use super::color::Color;
use crate::consts::*;

/// A fixed vertical lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Position in the lane list (0-based, left to right for the default set)
    pub index: usize,
    pub color: Color,
    /// Top-left corner of the lane
    pub origin: Vec2,
    pub half_width: f32,
    pub length: f32,
    /// Actors that landed after being spawned on this lane
    landing_count: u32,
}

impl Track {
    /// Lane centered on `center_x`, spanning the full world height `length`
    pub fn new(index: usize, center_x: f32, half_width: f32, length: f32, color: Color) -> Self {
        Self {
            index,
            color,
            origin: Vec2::new(center_x - half_width, -length / 2.0),
            half_width,
            length,
            landing_count: 0,
        }
    }

    /// The four standard lanes for a world of the given height
    pub fn standard_set(length: f32) -> Vec<Track> {
        TRACK_CENTERS
            .iter()
            .zip(Color::TRACKS)
            .enumerate()
            .map(|(index, (&center, color))| {
                Track::new(index, center, TRACK_HALF_WIDTH, length, color)
            })
            .collect()
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.origin.x + self.half_width
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    /// Lane rectangle in world coordinates
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corner(self.origin, Vec2::new(self.width(), self.length))
    }

    #[inline]
    pub fn landing_count(&self) -> u32 {
        self.landing_count
    }

    /// Count an actor that landed; the only way the counter changes
    pub fn drop_actor(&mut self, actor: &Actor) {
        self.landing_count += 1;
        log::debug!(
            "Track {}: actor {} landed (count {})",
            self.index,
            actor.id,
            self.landing_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_layout() {
        let tracks = Track::standard_set(600.0);
        assert_eq!(tracks.len(), TRACK_COUNT);
        let centers: Vec<f32> = tracks.iter().map(Track::center_x).collect();
        assert_eq!(centers, TRACK_CENTERS.to_vec());
        for (i, track) in tracks.iter().enumerate() {
            assert_eq!(track.index, i);
            assert_eq!(track.origin.y, -300.0);
            assert_eq!(track.width(), 100.0);
            assert_eq!(track.landing_count(), 0);
            assert_eq!(track.color, Color::TRACKS[i]);
        }
    }

    #[test]
    fn test_lane_bounds() {
        let track = Track::new(0, -150.0, 50.0, 600.0, Color::WHITE);
        assert_eq!(track.bounds(), Bounds::new(-200.0, -300.0, -100.0, 300.0));
    }

    #[test]
    fn test_drop_actor_increments_once() {
        let mut track = Track::new(2, 50.0, 50.0, 600.0, Color::WHITE);
        let actor = Actor::new(7, &track, Color::YELLOW);
        track.drop_actor(&actor);
        assert_eq!(track.landing_count(), 1);
        track.drop_actor(&actor);
        assert_eq!(track.landing_count(), 2);
    }
}
