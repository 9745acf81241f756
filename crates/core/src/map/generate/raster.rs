//! Scanline rasterization of lake contours. This is a pure function of its
//! inputs; nothing here touches the RNG or the global map.

use crate::map::grid::{Bounds, Grid, GridPoint};
use std::cmp;

/// Rasterize a closed polygon into the set of grid cells whose centers lie
/// inside it. The contour is implicitly closed: the last vertex connects back
/// to the first. The returned grid is sized to `bounds` and indexed in local
/// coordinates (min corner at the origin).
///
/// This is a classic scanline fill: for each integer row, find where every
/// polygon edge crosses the row, then fill between successive intersection
/// pairs. Intersection x values are rounded to the nearest cell, so cells
/// right on the outline can land on either side of it.
pub fn rasterize(contour: &[GridPoint], bounds: Bounds) -> Grid<bool> {
    let mut filled = Grid::new(bounds.width(), bounds.height(), false);

    for y in bounds.min().y()..=bounds.max().y() {
        let mut intersections: Vec<i32> = Vec::new();
        for (i, &p1) in contour.iter().enumerate() {
            let p2 = contour[(i + 1) % contour.len()];
            // The edge crosses this row iff exactly one endpoint is at or
            // above it. The endpoints can't share a y value here, so the
            // interpolation below never divides by zero.
            if (p1.y() <= y) != (p2.y() <= y) {
                let t = (y - p1.y()) as f64 / (p2.y() - p1.y()) as f64;
                let x = p1.x() as f64 + t * (p2.x() - p1.x()) as f64;
                intersections.push(x.round() as i32);
            }
        }
        intersections.sort_unstable();

        for span in pair_spans(&intersections) {
            let start = cmp::max(span.0, bounds.min().x());
            let end = cmp::min(span.1, bounds.max().x());
            for x in start..=end {
                let local = bounds.to_local(GridPoint::new(x, y));
                if let Some(cell) = filled.get_mut(local) {
                    *cell = true;
                }
            }
        }
    }

    filled
}

/// Pair up sorted scanline intersections into inclusive fill spans. A
/// dangling odd intersection (degenerate/tangent geometry) is dropped rather
/// than paired with anything, leaving that row with a slightly short fill.
fn pair_spans(intersections: &[i32]) -> impl Iterator<Item = (i32, i32)> + '_ {
    intersections
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_contour() -> Vec<GridPoint> {
        vec![
            GridPoint::new(0, 0),
            GridPoint::new(4, 0),
            GridPoint::new(4, 4),
            GridPoint::new(0, 4),
        ]
    }

    #[test]
    fn test_square_fill() {
        let contour = square_contour();
        let bounds = Bounds::of_points(&contour).unwrap();
        let filled = rasterize(&contour, bounds);

        assert_eq!(filled.width(), 5);
        assert_eq!(filled.height(), 5);

        // Every filled cell is inside the box, and the fill covers the box
        // area within a one-row/column rounding tolerance on the outline
        let count = filled.cells().filter(|&&cell| cell).count();
        assert!(
            count >= 16 && count <= 25,
            "unexpected fill count {} for a 5x5 square",
            count
        );
        // Interior cells are always filled regardless of outline rounding
        for y in 1..=3 {
            for x in 1..=3 {
                assert_eq!(
                    filled.get(GridPoint::new(x, y)),
                    Some(&true),
                    "interior cell ({}, {}) should be filled",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_concave_fill_leaves_notch_empty() {
        // A "U" shape: the notch between the two prongs must stay unfilled
        let contour = vec![
            GridPoint::new(0, 0),
            GridPoint::new(6, 0),
            GridPoint::new(6, 4),
            GridPoint::new(4, 4),
            GridPoint::new(4, 2),
            GridPoint::new(2, 2),
            GridPoint::new(2, 4),
            GridPoint::new(0, 4),
        ];
        let bounds = Bounds::of_points(&contour).unwrap();
        let filled = rasterize(&contour, bounds);

        assert_eq!(filled.get(GridPoint::new(1, 3)), Some(&true));
        assert_eq!(filled.get(GridPoint::new(5, 3)), Some(&true));
        assert_eq!(filled.get(GridPoint::new(3, 3)), Some(&false));
    }

    #[test]
    fn test_odd_intersection_dropped() {
        // For a well-formed closed contour the endpoint convention always
        // produces an even intersection count, so feed the span pairing an
        // odd row directly to pin down the policy: the trailing value is
        // dropped, not paired with the row edge
        let spans: Vec<(i32, i32)> = pair_spans(&[1, 4, 7]).collect();
        assert_eq!(spans, vec![(1, 4)]);

        let spans: Vec<(i32, i32)> = pair_spans(&[3]).collect();
        assert_eq!(spans, vec![]);
    }
}
