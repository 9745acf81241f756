//! Basic types for the map's integer coordinate system. The map is a dense
//! rectangular grid addressed by `(x, y)`, with `x` growing rightward and `y`
//! growing downward. All cell access goes through [Grid], which bounds-checks
//! every lookup.

use derive_more::{Add, Display};
use serde::{Deserialize, Serialize};

/// A point on the map grid. Coordinates are signed because intermediate
/// geometry (lake contours near a map edge) can legitimately fall outside the
/// map itself; [Grid] lookups for such points simply return `None`.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Add, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct GridPoint {
    x: i32,
    y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Get an iterator of the 4 points orthogonally adjacent to this one.
    pub fn adjacents(self) -> impl Iterator<Item = GridPoint> {
        const OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        OFFSETS
            .into_iter()
            .map(move |(dx, dy)| GridPoint::new(self.x + dx, self.y + dy))
    }

    /// Calculate the Euclidean distance between two points.
    pub fn distance_to(self, other: GridPoint) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned bounding box, inclusive on all four edges.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: GridPoint,
    max: GridPoint,
}

impl Bounds {
    /// Compute the bounding box of a set of points. Returns `None` for an
    /// empty set, since there is no meaningful box.
    pub fn of_points(points: &[GridPoint]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y) = (first.x(), first.y());
        let (mut max_x, mut max_y) = (first.x(), first.y());
        for point in points {
            min_x = min_x.min(point.x());
            min_y = min_y.min(point.y());
            max_x = max_x.max(point.x());
            max_y = max_y.max(point.y());
        }
        Some(Self {
            min: GridPoint::new(min_x, min_y),
            max: GridPoint::new(max_x, max_y),
        })
    }

    pub fn min(&self) -> GridPoint {
        self.min
    }

    pub fn max(&self) -> GridPoint {
        self.max
    }

    /// Number of columns covered by this box. Bounds are inclusive, so a
    /// single-point box has width 1.
    pub fn width(&self) -> u32 {
        (self.max.x() - self.min.x() + 1) as u32
    }

    /// Number of rows covered by this box.
    pub fn height(&self) -> u32 {
        (self.max.y() - self.min.y() + 1) as u32
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.min.x() <= point.x()
            && point.x() <= self.max.x()
            && self.min.y() <= point.y()
            && point.y() <= self.max.y()
    }

    /// Translate a map-space point into this box's local coordinates, with
    /// the box's min corner at the origin.
    pub fn to_local(&self, point: GridPoint) -> GridPoint {
        GridPoint::new(point.x() - self.min.x(), point.y() - self.min.y())
    }

    /// Translate a point in this box's local coordinates back into map space.
    pub fn to_map(&self, point: GridPoint) -> GridPoint {
        self.min + point
    }
}

/// A dense rectangular grid of cells, stored row-major. All access is
/// bounds-checked: lookups outside the grid return `None` rather than
/// panicking or wrapping, which makes the geometry code immune to the usual
/// off-by-one and axis-swap mistakes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid of the given dimensions with every cell set to `fill`.
    pub fn new(width: u32, height: u32, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; (width as usize) * (height as usize)],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index_of(&self, point: GridPoint) -> Option<usize> {
        if point.x() < 0
            || point.y() < 0
            || point.x() as u32 >= self.width
            || point.y() as u32 >= self.height
        {
            None
        } else {
            Some(point.y() as usize * self.width as usize + point.x() as usize)
        }
    }

    /// Get a reference to the cell at the given point, or `None` if the point
    /// is outside the grid.
    pub fn get(&self, point: GridPoint) -> Option<&T> {
        self.index_of(point).map(|index| &self.cells[index])
    }

    /// Get a mutable reference to the cell at the given point, or `None` if
    /// the point is outside the grid.
    pub fn get_mut(&mut self, point: GridPoint) -> Option<&mut T> {
        self.index_of(point).map(move |index| &mut self.cells[index])
    }

    /// Iterate over all cell values, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Iterate over all `(position, cell)` pairs, in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (GridPoint, &T)> {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let point = GridPoint::new(
                (index % width) as i32,
                (index / width) as i32,
            );
            (point, cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_access() {
        let mut grid: Grid<u32> = Grid::new(3, 2, 0);
        assert_eq!(grid.get(GridPoint::new(0, 0)), Some(&0));
        assert_eq!(grid.get(GridPoint::new(2, 1)), Some(&0));
        assert_eq!(grid.get(GridPoint::new(3, 0)), None);
        assert_eq!(grid.get(GridPoint::new(0, 2)), None);
        assert_eq!(grid.get(GridPoint::new(-1, 0)), None);

        *grid.get_mut(GridPoint::new(2, 1)).unwrap() = 7;
        assert_eq!(grid.get(GridPoint::new(2, 1)), Some(&7));
        // Make sure the write landed on the right axis
        assert_eq!(grid.get(GridPoint::new(1, 1)), Some(&0));
    }

    #[test]
    fn test_grid_enumerate() {
        let grid: Grid<u32> = Grid::new(2, 2, 0);
        let points: Vec<GridPoint> =
            grid.enumerate().map(|(point, _)| point).collect();
        assert_eq!(
            points,
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(1, 0),
                GridPoint::new(0, 1),
                GridPoint::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_bounds_of_points() {
        let bounds = Bounds::of_points(&[
            GridPoint::new(3, -1),
            GridPoint::new(-2, 4),
            GridPoint::new(0, 0),
        ])
        .unwrap();
        assert_eq!(bounds.min(), GridPoint::new(-2, -1));
        assert_eq!(bounds.max(), GridPoint::new(3, 4));
        assert_eq!(bounds.width(), 6);
        assert_eq!(bounds.height(), 6);
        assert!(bounds.contains(GridPoint::new(0, 0)));
        assert!(!bounds.contains(GridPoint::new(4, 0)));

        assert_eq!(Bounds::of_points(&[]), None);
    }

    #[test]
    fn test_bounds_local_round_trip() {
        let bounds =
            Bounds::of_points(&[GridPoint::new(-2, 3), GridPoint::new(4, 8)])
                .unwrap();
        let point = GridPoint::new(1, 5);
        assert_eq!(bounds.to_local(point), GridPoint::new(3, 2));
        assert_eq!(bounds.to_map(bounds.to_local(point)), point);
    }

    #[test]
    fn test_adjacents() {
        let adjacents: Vec<GridPoint> =
            GridPoint::new(1, 1).adjacents().collect();
        assert_eq!(adjacents.len(), 4);
        for adjacent in adjacents {
            assert_eq!(
                (adjacent.x() - 1).abs() + (adjacent.y() - 1).abs(),
                1
            );
        }
    }
}
