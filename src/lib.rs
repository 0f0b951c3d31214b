//! Track Drop - balls falling down four lanes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, force field, wall/floor crossing, spawning)
//! - `render`: Read-only drawing seam for an external canvas
//! - `settings`: Runtime settings (world size, seed, headless run length)
//! - `error`: Errors for the fallible outer surface

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SettingsResult};
pub use settings::Settings;

use glam::Vec2;

/// World constants (fixed, not configurable)
pub mod consts {
    /// Number of lanes
    pub const TRACK_COUNT: usize = 4;
    /// Lane centers along x, left to right
    pub const TRACK_CENTERS: [f32; TRACK_COUNT] = [-150.0, -50.0, 50.0, 150.0];
    /// Half the width of every lane
    pub const TRACK_HALF_WIDTH: f32 = 50.0;

    /// Actor bounding square side
    pub const ACTOR_SIZE: f32 = 50.0;
    /// Hit box inset from each side of the bounding square
    pub const ACTOR_INSET: f32 = 5.0;
    /// Acceleration given to a new actor (the only "gravity" it ever gets)
    pub const INITIAL_ACCELERATION: (f32, f32) = (0.0, 0.1);
    /// Per-tick multiplier applied to acceleration
    pub const ACCELERATION_DECAY: f32 = 0.9;

    /// Distance at which the force field stops acting
    pub const FIELD_INTERACTION_WIDTH: f32 = 80.0;
    /// Drawn radius of the force field marker
    pub const FIELD_RADIUS: f32 = 20.0;

    /// Minimum ticks between spawns (spawn when elapsed is strictly greater)
    pub const SPAWN_INTERVAL: u64 = 2500;
}

/// Convert a pointer position in canvas pixels to world coordinates
///
/// The world origin sits at the canvas center; results are rounded to whole units.
#[inline]
pub fn screen_to_world(screen: Vec2, canvas_half_extents: Vec2) -> Vec2 {
    (screen - canvas_half_extents).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_centers_origin() {
        let half = Vec2::new(200.0, 300.0);
        assert_eq!(screen_to_world(Vec2::new(200.0, 300.0), half), Vec2::ZERO);
        assert_eq!(
            screen_to_world(Vec2::new(10.4, 599.6), half),
            Vec2::new(-190.0, 300.0)
        );
    }

    #[test]
    fn test_lanes_fill_default_width() {
        use consts::*;
        let left = TRACK_CENTERS[0] - TRACK_HALF_WIDTH;
        let right = TRACK_CENTERS[TRACK_COUNT - 1] + TRACK_HALF_WIDTH;
        assert_eq!(right - left, Settings::default().width);
    }
}
