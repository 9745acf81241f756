mod generate;
pub mod grid;

use crate::{
    config::MapConfig,
    map::{generate::MapBuilder, grid::Grid},
    timed,
};
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A fully generated lake map. Contains the global depth grid as well as the
/// configuration that was used to generate it.
///
/// Cell values are water depths: `0` is land, any positive value is water,
/// deeper towards each lake's center. Depths are always multiples of 10 and
/// never exceed the configured maximum, which makes them easy to bucket into
/// rendering glyphs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Map {
    /// The config used to generate this map. Map generation is deterministic
    /// based on the config, and once the map has been generated, the config
    /// can never change.
    config: MapConfig,

    /// The global depth grid.
    depths: Grid<u32>,
}

impl Map {
    /// Get a reference to the config that defines this map.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Get a reference to the global depth grid.
    pub fn depths(&self) -> &Grid<u32> {
        &self.depths
    }

    /// Generate a new map with the given config. Returns an error if the
    /// given config is invalid. Lakes that can't be placed are silently
    /// dropped, so the output may hold fewer lakes than requested.
    pub fn generate(config: MapConfig) -> anyhow::Result<Self> {
        info!("Generating map with config {:#?}", config);

        config.validate().context("invalid config")?;

        let depths = timed!(
            "Map generation",
            log::Level::Info,
            MapBuilder::new(&config).generate_map()?
        );

        Ok(Self { config, depths })
    }

    /// Deserialize a map from JSON. A map can be serialized into JSON with
    /// [Map::to_json]. Will fail if the input is malformed.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("error deserializing map")
    }

    /// Serialize this map into JSON. This is a recoverable format, which can
    /// be loaded back into a [Map] with [Map::from_json].
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(self).expect("error serializing map")
    }
}
