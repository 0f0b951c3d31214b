//! Track Drop headless runner
//!
//! Steps the world at a fixed frame spacing with a scripted pointer sweep and
//! prints a JSON summary. Usage: `track-drop [settings.json]`

use std::path::PathBuf;

use glam::Vec2;
use serde::Serialize;

use track_drop::Settings;
use track_drop::sim::{PointerEvent, SimEvent, Simulation};

/// Frames per pointer press/release cycle
const POINTER_CYCLE: u32 = 240;
/// The pointer is held for the first part of each cycle
const POINTER_HELD: u32 = 120;

#[derive(Serialize)]
struct Summary<'a> {
    seed: u64,
    frames: u32,
    spawned: u32,
    landed: u64,
    escaped: u32,
    bounces: u32,
    landing_counts: Vec<u32>,
    scene: track_drop::render::Scene<'a>,
}

/// Pointer notification for `frame`: sweep left to right across the lower half while held
fn scripted_pointer(frame: u32, half_extents: Vec2) -> Option<PointerEvent> {
    let phase = frame % POINTER_CYCLE;
    let t = phase as f32 / POINTER_HELD as f32;
    let pos = Vec2::new(
        -half_extents.x + t * 2.0 * half_extents.x,
        half_extents.y * 0.5,
    );
    match phase {
        0 => Some(PointerEvent::Press(pos)),
        p if p < POINTER_HELD => Some(PointerEvent::Move(pos)),
        p if p == POINTER_HELD => Some(PointerEvent::Release),
        _ => None,
    }
}

/// Tick of `frame`, pinned at the end of time instead of wrapping
fn frame_tick(frame: u32, frame_ms: u64) -> u64 {
    u64::from(frame).saturating_mul(frame_ms)
}

fn main() {
    env_logger::init();
    log::info!("Track Drop (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref());
    if let Err(e) = settings.validate() {
        log::error!("{}", e);
        std::process::exit(2);
    }

    let mut sim = Simulation::from_settings(&settings);
    let (mut spawned, mut escaped, mut bounces) = (0, 0, 0);

    for frame in 0..settings.frames {
        if let Some(event) = scripted_pointer(frame, sim.half_extents()) {
            sim.handle_pointer(event);
        }

        let report = sim.step(frame_tick(frame, settings.frame_ms));
        for event in &report.events {
            match event {
                SimEvent::Spawned { .. } => spawned += 1,
                SimEvent::Escaped { .. } => escaped += 1,
                SimEvent::Bounced { .. } => bounces += 1,
                SimEvent::Landed { .. } => {}
            }
        }
    }

    log::info!(
        "Ran {} frames: {} landed, {} live",
        settings.frames,
        sim.total_landed(),
        sim.actors().len()
    );

    let summary = Summary {
        seed: sim.seed,
        frames: settings.frames,
        spawned,
        landed: sim.total_landed(),
        escaped,
        bounces,
        landing_counts: sim.landing_counts(),
        scene: sim.scene(),
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to encode summary: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_tick_saturates() {
        assert_eq!(frame_tick(3, 16), 48);
        assert_eq!(frame_tick(2, u64::MAX), u64::MAX);
        assert_eq!(frame_tick(0, u64::MAX), 0);
    }

    #[test]
    fn test_scripted_pointer_cycle() {
        let half = Vec2::new(200.0, 300.0);
        assert!(matches!(
            scripted_pointer(0, half),
            Some(PointerEvent::Press(_))
        ));
        assert!(matches!(
            scripted_pointer(60, half),
            Some(PointerEvent::Move(_))
        ));
        assert_eq!(
            scripted_pointer(POINTER_HELD, half),
            Some(PointerEvent::Release)
        );
        assert_eq!(scripted_pointer(POINTER_HELD + 1, half), None);
    }
}
