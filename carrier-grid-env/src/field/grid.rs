//! Occupancy grid and its invariant checks.
use std::collections::VecDeque;
use std::fmt;

/// State of a traversable cell.
pub const CELL_FREE: i8 = 0;

/// State of a wall cell.
pub const CELL_BLOCKED: i8 = 1;

/// Row/column offsets of the four cardinal neighbors.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A rectangular occupancy grid, stored row-major.
///
/// Cells are small integers so observations can expose the raw buffer
/// directly: [`CELL_FREE`] is traversable, [`CELL_BLOCKED`] is a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i8>,
}

impl Grid {
    /// Creates a grid with all cells set to `state`.
    pub fn filled(rows: usize, cols: usize, state: i8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![state; rows * cols],
        }
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The state of the cell at `(r, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `(r, c)` is out of bounds.
    pub fn get(&self, r: usize, c: usize) -> i8 {
        assert!(r < self.rows && c < self.cols, "cell out of bounds");
        self.cells[r * self.cols + c]
    }

    /// Sets the state of the cell at `(r, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `(r, c)` is out of bounds.
    pub fn set(&mut self, r: usize, c: usize, state: i8) {
        assert!(r < self.rows && c < self.cols, "cell out of bounds");
        self.cells[r * self.cols + c] = state;
    }

    /// The number of cells with the given state.
    pub fn count(&self, state: i8) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Coordinates of all cells with the given state, in row-major order.
    pub fn cells_with(&self, state: i8) -> Vec<(usize, usize)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == state)
            .map(|(i, _)| (i / cols, i % cols))
            .collect()
    }

    /// The raw row-major cell buffer.
    pub fn as_slice(&self) -> &[i8] {
        &self.cells
    }

    /// In-bounds 4-neighbors of the cell at `(r, c)`.
    pub(crate) fn neighbors4(&self, r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (rows, cols) = (self.rows as isize, self.cols as isize);
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let (nr, nc) = (r as isize + dr, c as isize + dc);
            if nr >= 0 && nr < rows && nc >= 0 && nc < cols {
                Some((nr as usize, nc as usize))
            } else {
                None
            }
        })
    }

    /// Returns `true` if all cells with state `target` are mutually reachable
    /// via 4-adjacency.
    ///
    /// Breadth-first traversal from the first matching cell, then a full scan
    /// confirming that no matching cell was left unvisited. Vacuously `true`
    /// when no cell matches.
    pub fn is_connected(&self, target: i8) -> bool {
        let start = match self.cells.iter().position(|&s| s == target) {
            Some(i) => (i / self.cols, i % self.cols),
            None => return true,
        };

        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        visited[start.0 * self.cols + start.1] = true;
        queue.push_back(start);

        while let Some((r, c)) = queue.pop_front() {
            for (nr, nc) in self.neighbors4(r, c) {
                let i = nr * self.cols + nc;
                if self.cells[i] == target && !visited[i] {
                    visited[i] = true;
                    queue.push_back((nr, nc));
                }
            }
        }

        self.cells
            .iter()
            .zip(visited.iter())
            .all(|(&s, &v)| s != target || v)
    }

    /// Returns `true` if every blocked cell has at least one free 4-neighbor.
    ///
    /// Out-of-bounds cells do not count as neighbors, so a wall in a corner
    /// still needs an in-bounds free cell next to it.
    pub fn has_wall_access(&self) -> bool {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.get(r, c) == CELL_BLOCKED
                    && !self.neighbors4(r, c).any(|(nr, nc)| self.get(nr, nc) == CELL_FREE)
                {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = if self.get(r, c) == CELL_BLOCKED { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_rows(rows: &[&[i8]]) -> Grid {
        let mut grid = Grid::filled(rows.len(), rows[0].len(), CELL_FREE);
        for (r, row) in rows.iter().enumerate() {
            for (c, &s) in row.iter().enumerate() {
                grid.set(r, c, s);
            }
        }
        grid
    }

    #[test]
    fn test_connected_free_cells() {
        let grid = grid_from_rows(&[&[0, 0, 1], &[1, 0, 1], &[1, 0, 0]]);
        assert!(grid.is_connected(CELL_FREE));
    }

    #[test]
    fn test_disconnected_free_cells() {
        // Wall column splits the free cells in two.
        let grid = grid_from_rows(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        assert!(!grid.is_connected(CELL_FREE));
    }

    #[test]
    fn test_connectivity_is_vacuous_without_matching_cells() {
        let grid = Grid::filled(3, 3, CELL_FREE);
        assert!(grid.is_connected(CELL_BLOCKED));
    }

    #[test]
    fn test_connectivity_on_single_row() {
        let line = grid_from_rows(&[&[0, 0, 1, 0, 0]]);
        assert!(!line.is_connected(CELL_FREE));
        let line = grid_from_rows(&[&[0, 0, 0, 1, 1]]);
        assert!(line.is_connected(CELL_FREE));
    }

    #[test]
    fn test_wall_access() {
        let grid = grid_from_rows(&[&[0, 1, 0], &[0, 1, 0], &[0, 0, 0]]);
        assert!(grid.has_wall_access());

        // Center wall is enclosed by other walls on all four sides.
        let grid = grid_from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0]]);
        assert!(!grid.has_wall_access());
    }

    #[test]
    fn test_wall_access_single_cell() {
        // No in-bounds neighbor at all, so a lone wall is inaccessible.
        let grid = Grid::filled(1, 1, CELL_BLOCKED);
        assert!(!grid.has_wall_access());
        let grid = Grid::filled(1, 1, CELL_FREE);
        assert!(grid.has_wall_access());
    }

    #[test]
    fn test_checks_are_pure() {
        let grid = grid_from_rows(&[&[0, 1], &[0, 0]]);
        let before = grid.clone();
        let c1 = grid.is_connected(CELL_FREE);
        let c2 = grid.is_connected(CELL_FREE);
        let a1 = grid.has_wall_access();
        let a2 = grid.has_wall_access();
        assert_eq!(c1, c2);
        assert_eq!(a1, a2);
        assert_eq!(grid, before);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        // A column index past the row must not wrap into the next row.
        let grid = Grid::filled(3, 3, CELL_FREE);
        let _ = grid.get(0, 5);
    }

    #[test]
    fn test_cells_with() {
        let grid = grid_from_rows(&[&[1, 0], &[0, 1]]);
        assert_eq!(grid.cells_with(CELL_BLOCKED), vec![(0, 0), (1, 1)]);
        assert_eq!(grid.count(CELL_BLOCKED), 2);
    }
}
