//! Presentation layer: renders a generated [Map] as a character grid. Depth
//! values are bucketed into glyphs here and only here; the generation code
//! deals purely in integers.

use crate::map::{grid::GridPoint, Map};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The set of glyphs used to draw a map. Each palette covers the same six
/// depth buckets: land, shallows, three intermediate bands, and the deepest
/// water.
#[derive(
    Copy, Clone, Debug, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GlyphPalette {
    /// Unicode block shades: dense blocks for land, lighter shades and wave
    /// marks for progressively deeper water.
    Blocks,
    /// Plain ASCII, for terminals without Unicode support.
    Ascii,
}

impl GlyphPalette {
    /// Map a depth value to its display glyph.
    pub fn glyph(self, depth: u32) -> &'static str {
        match self {
            Self::Blocks => match depth {
                0 => "▓",
                1..=9 => "░",
                10..=19 => "~",
                20..=29 => "≈",
                30..=39 => "▒",
                _ => "█",
            },
            Self::Ascii => match depth {
                0 => ".",
                1..=9 => ",",
                10..=19 => "~",
                20..=29 => "=",
                30..=39 => "%",
                _ => "#",
            },
        }
    }
}

impl Default for GlyphPalette {
    fn default() -> Self {
        Self::Blocks
    }
}

/// Options to configure map rendering.
///
/// **This is different from the map config.** The map config controls how the
/// map is generated; the render config just controls how it's visually
/// presented _after_ generation.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// The glyph set used for depth buckets.
    pub palette: GlyphPalette,
}

/// A map renderer converts maps into a textual output format. A renderer is
/// created using a particular [RenderConfig], and from there can be used to
/// render any number of maps any number of times.
#[derive(Copy, Clone, Debug)]
pub struct MapRenderer {
    render_config: RenderConfig,
}

impl MapRenderer {
    /// Initialize a new renderer with the given options.
    pub fn new(render_config: RenderConfig) -> Self {
        Self { render_config }
    }

    /// Get a reference to the config that this renderer uses.
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Render the map as a character grid, one text row per map row.
    pub fn render_as_text(&self, map: &Map) -> String {
        let grid = map.depths();
        let palette = self.render_config.palette;
        // Glyphs can be multi-byte, so this is just a lower bound
        let mut out = String::with_capacity(
            (grid.width() as usize + 1) * grid.height() as usize,
        );
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                if let Some(&depth) = grid.get(GridPoint::new(x, y)) {
                    out.push_str(palette.glyph(depth));
                }
            }
            out.push('\n');
        }
        out
    }
}
