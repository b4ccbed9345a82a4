//! The halite map grid.

use serde::Serialize;

use crate::game::Coord;

/// A fixed-size grid of halite values.
///
/// Allocated once at setup and never resized: per-turn updates overwrite
/// cells in place. Storage is a flat row-major vector addressed by `(x, y)`
/// index arithmetic, so downstream consumers always read and write through
/// [`Coord`] regardless of the wire's row-major transmission order.
#[derive(Debug, Clone, Serialize)]
pub struct Map {
    width: usize,
    height: usize,
    cells: Vec<usize>,
}

impl Map {
    /// Create a new map with every cell set to zero.
    ///
    /// Returns `None` if either dimension is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        Some(Self {
            width,
            height,
            cells: vec![0; width * height],
        })
    }

    /// Get the width of the map.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the map.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Check if a coordinate is within the map bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Convert a coordinate to an index into the cells vector.
    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y * self.width + coord.x)
        } else {
            None
        }
    }

    /// Get the halite value at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<usize> {
        self.coord_to_index(coord).map(|idx| self.cells[idx])
    }

    /// Overwrite the halite value at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, value: usize) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.cells[idx] = value;
            true
        } else {
            false
        }
    }

    /// Get the raw cells slice in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Iterate over all coordinates and cell values.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, usize)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &value)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (Coord::new(x, y), value)
        })
    }

    /// Sum of halite across the whole map.
    #[must_use]
    pub fn total_halite(&self) -> usize {
        self.cells.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_creation() {
        let map = Map::new(8, 4).unwrap();
        assert_eq!(map.width(), 8);
        assert_eq!(map.height(), 4);
        assert_eq!(map.cells().len(), 32);
        assert!(map.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_map_zero_size() {
        assert!(Map::new(0, 4).is_none());
        assert!(Map::new(8, 0).is_none());
    }

    #[test]
    fn test_map_get_set() {
        let mut map = Map::new(8, 4).unwrap();
        let coord = Coord::new(3, 2);

        assert_eq!(map.get(coord), Some(0));
        assert!(map.set(coord, 950));
        assert_eq!(map.get(coord), Some(950));
    }

    #[test]
    fn test_map_bounds() {
        let mut map = Map::new(8, 4).unwrap();
        assert!(map.in_bounds(Coord::new(7, 3)));
        assert!(!map.in_bounds(Coord::new(8, 0)));
        assert!(!map.in_bounds(Coord::new(0, 4)));
        assert!(!map.set(Coord::new(8, 0), 1));
        assert_eq!(map.get(Coord::new(0, 4)), None);
    }

    #[test]
    fn test_iter_yields_every_cell_once() {
        let mut map = Map::new(3, 2).unwrap();
        map.set(Coord::new(2, 1), 5);

        let cells: Vec<_> = map.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[5], (Coord::new(2, 1), 5));
        assert_eq!(map.total_halite(), 5);
    }

    #[test]
    fn test_non_square_addressing() {
        // width 3, height 2: (x, y) must map to row-major y * width + x.
        let mut map = Map::new(3, 2).unwrap();
        map.set(Coord::new(0, 1), 7);
        assert_eq!(map.cells()[3], 7);
    }
}
