//! Display colors carried by tracks and actors
//!
//! The simulation never interprets a color; it only hands it to the renderer.

use serde::{Deserialize, Serialize};

use crate::consts::TRACK_COUNT;

/// Packed `0xRRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const YELLOW: Color = Color(0xFFFF00);

    /// Lane fills, left to right
    pub const TRACKS: [Color; TRACK_COUNT] = [
        Color(0xBFF2E6),
        Color(0xBFE0F2),
        Color(0xF0F2BF),
        Color(0xF2BFEE),
    ];

    /// CSS hex form, e.g. `#BFF2E6`
    pub fn to_css(self) -> String {
        format!("#{:06X}", self.0 & 0xFF_FFFF)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::YELLOW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_css() {
        assert_eq!(Color::TRACKS[0].to_css(), "#BFF2E6");
        assert_eq!(Color::BLACK.to_css(), "#000000");
        assert_eq!(Color::default(), Color::YELLOW);
    }
}
