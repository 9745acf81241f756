//! Tarn is a 2D lake-map generation kit. This crate contains all the core
//! generation logic: it places irregularly shaped lakes on a bounded grid,
//! gives each one a banded depth gradient from shoreline to deepest point,
//! and can render the result as a character grid.
//!
//! ```
//! use tarn::{Map, MapConfig};
//!
//! let config = MapConfig::default();
//! let map = Map::generate(config).unwrap();
//! println!("{}", map.depths().width());
//! // From here you can render/use the map however you like.
//! ```
//!
//! See [MapConfig] for details on how the map generation can be customized.

mod config;
mod map;
mod render;
mod util;

pub use crate::{
    config::{LakeConfig, MapConfig},
    map::{
        grid::{Bounds, Grid, GridPoint},
        Map,
    },
    render::{GlyphPalette, MapRenderer, RenderConfig},
    util::range::NumRange,
};
