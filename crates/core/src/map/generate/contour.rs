//! Randomized contour synthesis. A contour is the closed polygon outline of
//! a lake, built by walking evenly spaced angles around the center and
//! pushing each vertex out by a jittered radius.

use crate::{config::LakeConfig, map::grid::GridPoint};
use rand::Rng;
use std::f64;

/// Generate a closed polygon outline around `center`. The vertex count is
/// drawn from the configured range, and the lake gets two independent base
/// radii (one per axis), so the overall shape is elliptical-ish. Each vertex
/// then perturbs both radii by the configured jitter, which is what turns the
/// ellipse into an organic-looking shoreline.
///
/// Vertices near a map edge may have negative coordinates or coordinates past
/// the map's far edge; the compositor clips them away during the merge.
pub fn synthesize_contour(
    center: GridPoint,
    config: &LakeConfig,
    rng: &mut impl Rng,
) -> Vec<GridPoint> {
    let vertex_count =
        rng.gen_range(config.min_vertices..=config.max_vertices);
    let radius_x: f64 = rng.gen_range(config.radius_range());
    let radius_y: f64 = rng.gen_range(config.radius_range());
    let jitter_range = config.jitter_range();

    (0..vertex_count)
        .map(|i| {
            let angle =
                f64::consts::TAU * (i as f64) / (vertex_count as f64);
            let rx = radius_x * rng.gen_range(jitter_range);
            let ry = radius_y * rng.gen_range(jitter_range);
            GridPoint::new(
                center.x() + (angle.cos() * rx).round() as i32,
                center.y() + (angle.sin() * ry).round() as i32,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_contour_shape() {
        let config = LakeConfig::default();
        let center = GridPoint::new(10, -3);
        let mut rng = Pcg64::seed_from_u64(2);

        for _ in 0..50 {
            let contour = synthesize_contour(center, &config, &mut rng);
            let count = contour.len() as u32;
            assert!(
                count >= config.min_vertices && count <= config.max_vertices
            );

            // No vertex can stray past the jittered max radius
            let limit =
                config.max_radius * (1.0 + config.radius_jitter) + 1.0;
            for vertex in contour {
                assert!(vertex.distance_to(center) <= limit * f64::sqrt(2.0));
            }
        }
    }
}
