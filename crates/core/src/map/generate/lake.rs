//! Lake synthesis: turn a center point into a fully-formed [Lake].

use crate::{
    config::MapConfig,
    map::{
        generate::{contour, depth, distance, raster},
        grid::{Bounds, Grid, GridPoint},
    },
};
use anyhow::anyhow;
use rand::Rng;

/// A single synthesized lake: its outline, its bounding box, and a local
/// depth map sized to that box (0 = not part of this lake, positive = water
/// depth). Lakes are built once by [Lake::synthesize] and never mutated
/// afterwards; the compositor only reads them while merging.
#[derive(Clone, Debug)]
pub struct Lake {
    pub(super) contour: Vec<GridPoint>,
    pub(super) center: GridPoint,
    pub(super) bounds: Bounds,
    pub(super) depths: Grid<u32>,
}

impl Lake {
    /// Build a complete lake around the given center: synthesize a contour,
    /// rasterize it, measure every interior cell's distance to the shore,
    /// and derive banded depths from those distances. The whole lake shares
    /// one randomly drawn steepness exponent, so each lake has a single
    /// coherent falloff profile.
    pub fn synthesize(
        center: GridPoint,
        config: &MapConfig,
        rng: &mut impl Rng,
    ) -> anyhow::Result<Self> {
        let contour = contour::synthesize_contour(center, &config.lake, rng);
        let bounds = Bounds::of_points(&contour)
            .ok_or_else(|| anyhow!("empty contour for lake at {}", center))?;

        let filled = raster::rasterize(&contour, bounds);
        let distances = distance::shore_distances(&filled);
        let max_distance = distances
            .cells()
            .filter_map(|distance| *distance)
            .max()
            .unwrap_or(0);
        let steepness = rng.gen_range(config.lake.steepness_range());

        let mut depths = Grid::new(bounds.width(), bounds.height(), 0u32);
        for (point, &cell_distance) in distances.enumerate() {
            let is_filled = matches!(filled.get(point), Some(true));
            let cell_depth = match (is_filled, cell_distance) {
                (true, Some(cell_distance)) => depth::depth_at(
                    cell_distance,
                    max_distance,
                    steepness,
                    config.max_depth,
                ),
                // A filled cell the shore flood never reached only happens
                // for shoreless degenerate lakes; treat it as maximally deep
                (true, None) => config.max_depth,
                (false, _) => 0,
            };
            if cell_depth > 0 {
                if let Some(cell) = depths.get_mut(point) {
                    *cell = cell_depth;
                }
            }
        }

        Ok(Self {
            contour,
            center,
            bounds,
            depths,
        })
    }

    pub fn contour(&self) -> &[GridPoint] {
        self.contour.as_slice()
    }

    pub fn center(&self) -> GridPoint {
        self.center
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The lake's local depth map, indexed in bounding-box-local coordinates.
    pub fn depths(&self) -> &Grid<u32> {
        &self.depths
    }
}
