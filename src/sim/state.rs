//! Simulation state
//!
//! Owns every lane and live actor, the optional force field, and the spawner
//! bookkeeping. The per-frame step lives in `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::action::{ActionPoint, PointerEvent};
use super::actor::Actor;
use super::bounds::Bounds;
use super::color::Color;
use super::tick::{TickReport, tick};
use super::track::Track;
use crate::consts::*;
use crate::render::Scene;
use crate::settings::Settings;

/// Size a world falls back to along an axis given an unusable extent
const MIN_WORLD_SIZE: f32 = 2.0;

/// Keep a world dimension positive and finite
fn sanitize_size(axis: &str, value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        return value;
    }
    log::warn!(
        "World {} {} is unusable, using {}",
        axis,
        value,
        MIN_WORLD_SIZE
    );
    MIN_WORLD_SIZE
}

/// The whole world
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Seed the spawner RNG was created from
    pub seed: u64,
    /// Half of the world width and height; the world spans -half..half
    pub(super) half_extents: Vec2,
    pub(super) tracks: Vec<Track>,
    /// Live actors in spawn order
    pub(super) actors: Vec<Actor>,
    /// At most one field, held while the pointer is down
    pub(super) action: Option<ActionPoint>,
    /// Tick of the most recent spawn
    pub(super) last_spawn: Option<u64>,
    pub(super) spawning: bool,
    pub(super) total_landed: u64,
    rng: Pcg32,
    next_id: u32,
}

impl Simulation {
    /// World of the given size with the four standard lanes
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let height = sanitize_size("height", height);
        Self::with_tracks(width, height, Track::standard_set(height), seed)
    }

    /// World of the given size with a custom lane set
    ///
    /// Non-positive or non-finite sizes are replaced so stepping never fails.
    pub fn with_tracks(width: f32, height: f32, tracks: Vec<Track>, seed: u64) -> Self {
        let width = sanitize_size("width", width);
        let height = sanitize_size("height", height);
        log::info!(
            "World {}x{} with {} tracks, seed {}",
            width,
            height,
            tracks.len(),
            seed
        );
        Self {
            seed,
            half_extents: Vec2::new(width / 2.0, height / 2.0),
            tracks,
            actors: Vec::new(),
            action: None,
            last_spawn: None,
            spawning: true,
            total_landed: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// World described by `settings`; draws a seed from entropy when none is set
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut sim = Self::new(settings.width, settings.height, seed);
        sim.set_spawning(settings.spawning);
        sim
    }

    /// Advance the world by one frame
    pub fn step(&mut self, now: u64) -> TickReport {
        tick(self, now)
    }

    /// The world rectangle, recomputed from the current size
    pub fn world_bounds(&self) -> Bounds {
        Bounds::centered(self.half_extents)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor_mut(&mut self, id: u32) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    pub fn action(&self) -> Option<&ActionPoint> {
        self.action.as_ref()
    }

    /// Read-only view for the renderer
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            half_extents: self.half_extents,
            tracks: &self.tracks,
            actors: &self.actors,
            action: self.action.as_ref(),
        }
    }

    /// Landing counters in lane order
    pub fn landing_counts(&self) -> Vec<u32> {
        self.tracks.iter().map(Track::landing_count).collect()
    }

    pub fn total_landed(&self) -> u64 {
        self.total_landed
    }

    pub fn last_spawn(&self) -> Option<u64> {
        self.last_spawn
    }

    pub fn set_spawning(&mut self, enabled: bool) {
        self.spawning = enabled;
    }

    /// Allocate a new actor ID
    fn next_actor_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Put a new default actor at the top of lane `track`
    pub fn spawn_on(&mut self, track: usize) -> Option<u32> {
        if track >= self.tracks.len() {
            return None;
        }
        let id = self.next_actor_id();
        let actor = Actor::new(id, &self.tracks[track], Color::default());
        log::debug!("Spawned actor {} on track {}", id, track);
        self.actors.push(actor);
        Some(id)
    }

    /// Spawn on a uniformly chosen lane
    pub(super) fn spawn_random(&mut self) -> Option<(u32, usize)> {
        if self.tracks.is_empty() {
            return None;
        }
        let track = self.rng.random_range(0..self.tracks.len());
        self.spawn_on(track).map(|id| (id, track))
    }

    /// True when no spawn happened yet or the interval has strictly elapsed
    pub(super) fn spawn_due(&self, now: u64) -> bool {
        match self.last_spawn {
            None => true,
            Some(last) => now.saturating_sub(last) > SPAWN_INTERVAL,
        }
    }

    /// Route a pointer notification to the field slot
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(pos) => self.press(pos),
            PointerEvent::Move(pos) => self.move_to(pos),
            PointerEvent::Release => self.release(),
        }
    }

    /// Create the field; ignored while one is already held
    pub fn press(&mut self, pos: Vec2) {
        if self.action.is_none() {
            self.action = Some(ActionPoint::new(pos));
        }
    }

    /// Move the held field, if any
    pub fn move_to(&mut self, pos: Vec2) {
        if let Some(action) = self.action.as_mut() {
            action.origin = pos;
        }
    }

    pub fn release(&mut self) {
        self.action = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world() {
        let sim = Simulation::new(400.0, 600.0, 42);
        assert_eq!(sim.tracks().len(), TRACK_COUNT);
        assert!(sim.actors().is_empty());
        assert!(sim.action().is_none());
        assert_eq!(
            sim.world_bounds(),
            Bounds::new(-200.0, -300.0, 200.0, 300.0)
        );
        assert_eq!(sim.landing_counts(), vec![0; TRACK_COUNT]);
    }

    #[test]
    fn test_degenerate_size_steps_safely() {
        let sizes = [
            (0.0, 600.0),
            (-400.0, 600.0),
            (400.0, f32::NAN),
            (f32::INFINITY, 0.0),
        ];
        for (width, height) in sizes {
            let mut sim = Simulation::new(width, height, 1);
            let bounds = sim.world_bounds();
            assert!(bounds.left < bounds.right && bounds.top < bounds.bottom);
            for t in 0..10 {
                sim.step(t * 16);
            }
            assert!(sim.tracks().iter().all(|t| t.length > 0.0));
        }
    }

    #[test]
    fn test_pointer_lifecycle() {
        let mut sim = Simulation::new(400.0, 600.0, 42);

        sim.handle_pointer(PointerEvent::Move(Vec2::new(1.0, 1.0)));
        assert!(sim.action().is_none());

        sim.handle_pointer(PointerEvent::Press(Vec2::new(10.0, 20.0)));
        assert_eq!(sim.action().map(|a| a.origin), Some(Vec2::new(10.0, 20.0)));

        // Second press while held does not replace the field
        sim.handle_pointer(PointerEvent::Press(Vec2::new(-5.0, -5.0)));
        assert_eq!(sim.action().map(|a| a.origin), Some(Vec2::new(10.0, 20.0)));

        sim.handle_pointer(PointerEvent::Move(Vec2::new(30.0, 40.0)));
        assert_eq!(sim.action().map(|a| a.origin), Some(Vec2::new(30.0, 40.0)));

        sim.handle_pointer(PointerEvent::Release);
        assert!(sim.action().is_none());
        sim.handle_pointer(PointerEvent::Release);
        assert!(sim.action().is_none());
    }

    #[test]
    fn test_spawn_on_assigns_increasing_ids() {
        let mut sim = Simulation::new(400.0, 600.0, 42);
        let a = sim.spawn_on(0);
        let b = sim.spawn_on(3);
        assert_eq!(a, Some(1));
        assert_eq!(b, Some(2));
        assert_eq!(sim.spawn_on(4), None);
        assert_eq!(sim.actors().len(), 2);
        assert_eq!(sim.actors()[1].track, 3);
    }

    #[test]
    fn test_spawn_random_without_tracks() {
        let mut sim = Simulation::with_tracks(400.0, 600.0, Vec::new(), 1);
        assert_eq!(sim.spawn_random(), None);
    }

    #[test]
    fn test_spawn_random_covers_all_lanes() {
        let mut sim = Simulation::new(400.0, 600.0, 7);
        let mut seen = [false; TRACK_COUNT];
        for _ in 0..200 {
            if let Some((_, track)) = sim.spawn_random() {
                seen[track] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            seed: Some(5),
            spawning: false,
            ..Default::default()
        };
        let sim = Simulation::from_settings(&settings);
        assert_eq!(sim.seed, 5);
        assert!(!sim.spawning);
        assert_eq!(sim.half_extents(), Vec2::new(200.0, 300.0));
    }
}
