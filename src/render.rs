//! Drawing seam for an external 2D canvas
//!
//! The simulation never draws. A host hands a [`Painter`] to [`draw_scene`],
//! which walks a read-only [`Scene`] in paint order. All coordinates are in
//! world space; the host translates by the canvas center.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{ActionPoint, Actor, Color, Track};

/// Radius of the world-center marker
const CENTER_MARKER_RADIUS: f32 = 2.0;
/// Stroke width of the divider on each lane's right edge
const TRACK_DIVIDER_WIDTH: f32 = 2.0;
/// Offset of the landing counter text from a lane's top-left corner
const TRACK_LABEL_OFFSET: Vec2 = Vec2::new(10.0, 15.0);
const ACTOR_OUTLINE_WIDTH: f32 = 1.5;
const FIELD_OUTLINE_WIDTH: f32 = 1.0;

/// Borrowed view of everything a renderer needs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scene<'a> {
    pub half_extents: Vec2,
    pub tracks: &'a [Track],
    pub actors: &'a [Actor],
    pub action: Option<&'a ActionPoint>,
}

/// Minimal canvas operations
pub trait Painter {
    fn fill_rect(&mut self, corner: Vec2, size: Vec2, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    /// Circle with an optional fill and an optional `(width, color)` outline
    fn circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<(f32, Color)>,
    );
    fn text(&mut self, at: Vec2, text: &str, color: Color);
}

/// Paint the scene: center marker, lanes, actors, then the field on top
pub fn draw_scene<P: Painter>(scene: &Scene<'_>, painter: &mut P) {
    painter.circle(
        Vec2::ZERO,
        CENTER_MARKER_RADIUS,
        None,
        Some((1.0, Color::BLACK)),
    );

    for track in scene.tracks {
        draw_track(track, painter);
    }

    for actor in scene.actors {
        painter.circle(
            actor.mass(),
            actor.size() / 2.0,
            Some(actor.color),
            Some((ACTOR_OUTLINE_WIDTH, Color::BLACK)),
        );
    }

    if let Some(action) = scene.action {
        painter.circle(
            action.origin,
            action.radius(),
            Some(Color::WHITE),
            Some((FIELD_OUTLINE_WIDTH, Color::BLACK)),
        );
    }
}

fn draw_track<P: Painter>(track: &Track, painter: &mut P) {
    let size = Vec2::new(track.width(), track.length);
    painter.fill_rect(track.origin, size, track.color);

    let divider = track.origin + Vec2::new(track.width(), 0.0);
    painter.line(
        divider,
        divider + Vec2::new(0.0, track.length),
        TRACK_DIVIDER_WIDTH,
        Color::BLACK,
    );

    painter.text(
        track.origin + TRACK_LABEL_OFFSET,
        &track.landing_count().to_string(),
        Color::WHITE,
    );
}
