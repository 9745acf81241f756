//! Depth falloff curve: maps a cell's shore distance to a banded depth.

use crate::util::range::NumRange;

/// Depths are floored to the next-lower multiple of this, producing banded
/// depth contours (which downstream renderers map to distinct glyphs) rather
/// than a smooth gradient.
const DEPTH_BAND: u32 = 10;

/// Compute the depth of a cell from its shore distance. The distance is
/// normalized against the deepest distance found anywhere in the lake, run
/// through a power-law curve (`steepness` > 1 pushes depth towards the
/// center), scaled to `max_depth`, then banded.
///
/// A lake whose deepest point is the shore itself (`max_distance` of 0) comes
/// out entirely at depth 0.
pub fn depth_at(
    distance: u32,
    max_distance: u32,
    steepness: f64,
    max_depth: u32,
) -> u32 {
    let raw = NumRange::new(0.0, max_distance as f64)
        .value(distance as f64)
        .normalize()
        .apply(|ratio| ratio.powf(steepness))
        .map_to(NumRange::new(0.0, max_depth as f64))
        .clamp()
        .inner();
    (raw as u32 / DEPTH_BAND) * DEPTH_BAND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_endpoints() {
        assert_eq!(depth_at(0, 8, 2.0, 40), 0);
        assert_eq!(depth_at(8, 8, 2.0, 40), 40);
    }

    #[test]
    fn test_depth_banding_and_bounds() {
        for distance in 0..=12 {
            for max_depth in [10, 25, 40] {
                let depth = depth_at(distance, 12, 2.2, max_depth);
                assert_eq!(depth % DEPTH_BAND, 0);
                assert!(depth <= max_depth);
            }
        }
    }

    #[test]
    fn test_depth_monotonic_in_distance() {
        let mut last = 0;
        for distance in 0..=20 {
            let depth = depth_at(distance, 20, 1.8, 40);
            assert!(depth >= last);
            last = depth;
        }
    }

    #[test]
    fn test_steeper_curve_is_shallower_mid_lake() {
        // At half the max distance, a steeper exponent gives less depth
        let gentle = depth_at(10, 20, 1.0, 40);
        let steep = depth_at(10, 20, 2.5, 40);
        assert!(steep <= gentle);
    }

    #[test]
    fn test_zero_max_distance() {
        assert_eq!(depth_at(0, 0, 2.0, 40), 0);
    }
}
