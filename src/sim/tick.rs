//! Per-frame simulation step
//!
//! Order per actor: field push, integration, wall bounce, floor test.
//! Spawning runs after every live actor has been advanced.

use serde::Serialize;

use super::state::Simulation;
use crate::consts::*;

/// Side wall an actor bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Wall {
    Left,
    Right,
}

/// Something that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimEvent {
    /// Horizontal velocity was reversed
    Bounced { actor: u32, wall: Wall },
    /// Actor reached the floor and was counted on its lane
    Landed { actor: u32, track: usize },
    /// Actor jumped entirely past the floor in one step; removed uncounted
    Escaped { actor: u32 },
    /// New actor entered at the top of a lane
    Spawned { actor: u32, track: usize },
}

/// What changed during one step
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickReport {
    pub now: u64,
    pub events: Vec<SimEvent>,
}

impl TickReport {
    pub fn landed(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SimEvent::Landed { actor, track } => Some((actor, track)),
            _ => None,
        })
    }

    pub fn spawned(&self) -> Option<(u32, usize)> {
        self.events.iter().find_map(|e| match *e {
            SimEvent::Spawned { actor, track } => Some((actor, track)),
            _ => None,
        })
    }

    pub fn bounces(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::Bounced { .. }))
            .count()
    }
}

/// Advance the world by one frame at tick `now`
pub fn tick(state: &mut Simulation, now: u64) -> TickReport {
    let mut report = TickReport {
        now,
        events: Vec::new(),
    };
    let world = state.world_bounds();

    // Index only advances when the current actor stays
    let mut index = 0;
    while index < state.actors.len() {
        let actor = &mut state.actors[index];

        if let Some(field) = &state.action {
            field.apply(actor, FIELD_INTERACTION_WIDTH);
        }

        actor.update(now);

        let flags = world.edge_crossing(&actor.bounds());

        // Left wins when both walls are crossed
        let wall = if flags.left.crossed {
            Some(Wall::Left)
        } else if flags.right.crossed {
            Some(Wall::Right)
        } else {
            None
        };
        if let Some(wall) = wall {
            actor.velocity.x = -actor.velocity.x;
            log::trace!("Actor {} bounced off {:?} wall", actor.id, wall);
            report.events.push(SimEvent::Bounced {
                actor: actor.id,
                wall,
            });
        }

        if flags.bottom.crossing() {
            let actor = state.actors.remove(index);
            match state.tracks.get_mut(actor.track) {
                Some(track) => track.drop_actor(&actor),
                None => log::warn!("Actor {} landed on unknown track {}", actor.id, actor.track),
            }
            state.total_landed += 1;
            report.events.push(SimEvent::Landed {
                actor: actor.id,
                track: actor.track,
            });
            continue;
        }

        if flags.bottom.passed() {
            let actor = state.actors.remove(index);
            log::warn!("Actor {} passed the floor without landing", actor.id);
            report.events.push(SimEvent::Escaped { actor: actor.id });
            continue;
        }

        index += 1;
    }

    if state.spawning && state.spawn_due(now) {
        if let Some((actor, track)) = state.spawn_random() {
            state.last_spawn = Some(now);
            report.events.push(SimEvent::Spawned { actor, track });
        }
    }

    report
}
