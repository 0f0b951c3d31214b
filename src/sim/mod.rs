//! Deterministic simulation module
//!
//! All world logic lives here. This module must stay pure:
//! - Time comes in as ticks from the caller
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod action;
pub mod actor;
pub mod bounds;
pub mod color;
pub mod state;
pub mod tick;
pub mod track;

pub use action::{ActionPoint, PointerEvent};
pub use actor::Actor;
pub use bounds::{Bounds, EdgeCrossing, EdgeFlags};
pub use color::Color;
pub use state::Simulation;
pub use tick::{SimEvent, TickReport, Wall, tick};
pub use track::Track;
