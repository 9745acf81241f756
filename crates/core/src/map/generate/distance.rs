//! Multi-source BFS distance transform from a lake's shoreline.

use crate::map::grid::{Grid, GridPoint};
use std::collections::VecDeque;

/// For every filled cell, compute its 4-connected graph distance to the
/// nearest shore. A shore cell is a filled cell with at least one orthogonal
/// neighbor that is unfilled or outside the grid. The BFS is seeded with all
/// shore cells at distance 0, so it yields shortest grid-step distances, not
/// Euclidean ones.
///
/// Unfilled cells stay `None`. A filled cell can only stay `None` if the lake
/// has no shore at all, which can't happen on a finite grid with at least one
/// filled cell; callers still treat a leftover `None` as "maximally deep".
pub fn shore_distances(filled: &Grid<bool>) -> Grid<Option<u32>> {
    let mut distances: Grid<Option<u32>> =
        Grid::new(filled.width(), filled.height(), None);
    let mut queue: VecDeque<(GridPoint, u32)> = VecDeque::new();

    // Seed the search with every shore cell
    for (point, &is_filled) in filled.enumerate() {
        let touches_shore = is_filled
            && point
                .adjacents()
                .any(|adjacent| !matches!(filled.get(adjacent), Some(true)));
        if touches_shore {
            if let Some(cell) = distances.get_mut(point) {
                *cell = Some(0);
            }
            queue.push_back((point, 0));
        }
    }

    // Flood inward, one ring at a time
    while let Some((point, distance)) = queue.pop_front() {
        for adjacent in point.adjacents() {
            if !matches!(filled.get(adjacent), Some(true)) {
                continue;
            }
            if let Some(cell) = distances.get_mut(adjacent) {
                if cell.is_none() {
                    *cell = Some(distance + 1);
                    queue.push_back((adjacent, distance + 1));
                }
            }
        }
    }

    distances
}
