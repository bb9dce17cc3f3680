use crate::types::Position;

pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Fixed-size row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T, const ROWS: usize, const COLS: usize> {
    cells: [[T; COLS]; ROWS],
}

impl<T: Copy + Default, const ROWS: usize, const COLS: usize> Grid<T, ROWS, COLS> {
    /// Creates a grid with every cell set to `T::default()`.
    pub fn new() -> Self {
        Self {
            cells: [[T::default(); COLS]; ROWS],
        }
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Returns the cell at `pos`. Caller contract: `pos` is in bounds.
    pub fn get(&self, pos: Position) -> T {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Position, value: T) {
        self.cells[pos.row as usize][pos.col as usize] = value;
    }

    /// Returns the previous content and leaves `T::default()` behind.
    pub fn take(&mut self, pos: Position) -> T {
        std::mem::take(&mut self.cells[pos.row as usize][pos.col as usize])
    }

    pub fn contains(&self, pos: Position) -> bool {
        (pos.row as usize) < ROWS && (pos.col as usize) < COLS
    }

    /// Orthogonally adjacent in-bounds points.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + use<T, ROWS, COLS> {
        let (row, col) = (pos.row as i32, pos.col as i32);
        ORTHOGONAL.into_iter().filter_map(move |(dr, dc)| offset(row + dr, col + dc, ROWS, COLS))
    }

    /// Every point, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T, ROWS, COLS> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Position::new(row as u8, col as u8)))
    }

    /// Copies the cells into a row-major vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.cells.iter().flatten().copied().collect()
    }
}

impl<T: Copy + Default, const ROWS: usize, const COLS: usize> Default for Grid<T, ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

fn offset(row: i32, col: i32, rows: usize, cols: usize) -> Option<Position> {
    in_bounds(row, col, rows, cols).then(|| Position::new(row as u8, col as u8))
}

fn in_bounds(row: i32, col: i32, rows: usize, cols: usize) -> bool {
    (0..rows as i32).contains(&row) && (0..cols as i32).contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_default_filled() {
        let grid: Grid<u8, 3, 4> = Grid::new();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(grid.to_vec().iter().all(|&cell| cell == 0));
    }

    #[test]
    fn corner_has_two_neighbors_and_center_has_four() {
        let grid: Grid<u8, 3, 3> = Grid::new();

        assert_eq!(grid.neighbors(Position::new(0, 0)).count(), 2);
        assert_eq!(grid.neighbors(Position::new(2, 1)).count(), 3);
        assert_eq!(grid.neighbors(Position::new(1, 1)).count(), 4);
    }

    #[test]
    fn take_leaves_default_and_returns_previous() {
        let mut grid: Grid<Option<u8>, 2, 2> = Grid::new();
        grid.set(Position::new(1, 0), Some(7));

        assert_eq!(grid.take(Position::new(1, 0)), Some(7));
        assert_eq!(grid.get(Position::new(1, 0)), None);
    }

    #[test]
    fn positions_walk_row_major() {
        let grid: Grid<u8, 2, 3> = Grid::new();
        let all: Vec<Position> = grid.positions().collect();

        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[3], Position::new(1, 0));
        assert!(!grid.contains(Position::new(2, 0)));
    }
}
