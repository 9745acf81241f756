//! Map generation internals. The compositor in this module drives the whole
//! pipeline: it picks non-conflicting lake centers, hands each one to the
//! lake synthesizer, and merges the results into the global depth grid.

mod contour;
mod depth;
mod distance;
mod lake;
mod raster;

use crate::{
    config::MapConfig,
    map::{
        generate::lake::Lake,
        grid::{Grid, GridPoint},
    },
};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Cap on random placement attempts per lake. A lake that can't find a valid
/// center within this many samples is dropped, not retried forever.
const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// A container for generating a new map. The generation process is
/// deterministic over the config: all randomness comes from the seeded RNG
/// held here, never from ambient global state.
pub struct MapBuilder {
    config: MapConfig,
    rng: Pcg64,
    depths: Grid<u32>,
}

impl MapBuilder {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            config: *config,
            rng: Pcg64::seed_from_u64(config.seed),
            depths: Grid::new(config.width, config.height, 0),
        }
    }

    /// Run the full generation pipeline and output the finalized depth grid.
    /// Each lake is synthesized to completion and merged before the next
    /// placement attempt begins.
    pub fn generate_map(mut self) -> anyhow::Result<Grid<u32>> {
        let mut centers: Vec<GridPoint> = Vec::new();
        for i in 0..self.config.lake_count {
            let center = match self.pick_center(&centers) {
                Some(center) => center,
                None => {
                    // Placement exhaustion is policy, not an error: the map
                    // just ends up with fewer lakes than requested
                    debug!(
                        "No valid center for lake {} after {} attempts, \
                        skipping",
                        i, MAX_PLACEMENT_ATTEMPTS
                    );
                    continue;
                }
            };
            centers.push(center);

            let lake = Lake::synthesize(center, &self.config, &mut self.rng)?;
            self.merge(&lake);
        }

        info!(
            "Placed {} of {} requested lakes",
            centers.len(),
            self.config.lake_count
        );
        Ok(self.depths)
    }

    /// Sample random centers until one is far enough away from every
    /// already-accepted lake, up to the attempt cap. Returns `None` if no
    /// valid center was found.
    fn pick_center(&mut self, accepted: &[GridPoint]) -> Option<GridPoint> {
        let min_distance = self.config.min_lake_distance;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = GridPoint::new(
                self.rng.gen_range(0..self.config.width as i32),
                self.rng.gen_range(0..self.config.height as i32),
            );
            if accepted
                .iter()
                .all(|center| center.distance_to(candidate) >= min_distance)
            {
                return Some(candidate);
            }
        }
        None
    }

    /// Copy a lake's local depth map into the global grid. Cells outside the
    /// global bounds are clipped, and a global cell already claimed by an
    /// earlier lake is never overwritten: first writer wins.
    fn merge(&mut self, lake: &Lake) {
        for (local, &cell_depth) in lake.depths().enumerate() {
            if cell_depth == 0 {
                continue;
            }
            let global = lake.bounds().to_map(local);
            if let Some(cell) = self.depths.get_mut(global) {
                if *cell == 0 {
                    *cell = cell_depth;
                }
            }
        }
    }
}
