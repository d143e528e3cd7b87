use super::types::Mark;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    InvalidSize(i32),
    OutOfBounds { row: i32, col: i32, size: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidSize(size) => write!(f, "Invalid board size: {}", size),
            BoardError::OutOfBounds { row, col, size } => {
                write!(f, "Cell ({}, {}) is outside the {}x{} board", row, col, size, size)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Square grid of cell marks. Coordinates are signed at the API boundary
/// because they arrive from click mapping and config values that can be
/// negative; everything inside `[0, size)` is valid, size 0 included.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Mark>>,
}

impl Board {
    pub fn new(size: i32) -> Result<Self, BoardError> {
        if size < 0 {
            return Err(BoardError::InvalidSize(size));
        }
        let size = size as usize;
        Ok(Self {
            size,
            cells: vec![vec![Mark::Empty; size]; size],
        })
    }

    /// Clear every cell in place; the size does not change.
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            row.fill(Mark::Empty);
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Read-only grid snapshot for the win detector and the renderer.
    pub fn cells(&self) -> &[Vec<Mark>] {
        &self.cells
    }

    pub fn get(&self, row: i32, col: i32) -> Result<Mark, BoardError> {
        let (row, col) = self.index(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Overwrite a cell. No emptiness check here; the match gates that.
    pub fn set(&mut self, row: i32, col: i32, mark: Mark) -> Result<(), BoardError> {
        let (row, col) = self.index(row, col)?;
        self.cells[row][col] = mark;
        Ok(())
    }

    pub fn is_empty(&self, row: i32, col: i32) -> Result<bool, BoardError> {
        Ok(self.get(row, col)? == Mark::Empty)
    }

    /// Vacuously true for a size-0 board.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    fn index(&self, row: i32, col: i32) -> Result<(usize, usize), BoardError> {
        if row < 0 || col < 0 || row as usize >= self.size || col as usize >= self.size {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok((row as usize, col as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.size(), 3);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get(row, col).unwrap(), Mark::Empty);
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_negative_size_is_rejected() {
        assert_eq!(Board::new(-1).unwrap_err(), BoardError::InvalidSize(-1));
    }

    #[test]
    fn test_zero_size_board_has_no_cells_and_is_full() {
        let board = Board::new(0).unwrap();
        assert_eq!(board.size(), 0);
        assert!(board.cells().is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_out_of_bounds_access() {
        let board = Board::new(3).unwrap();
        assert!(matches!(
            board.get(-1, 0),
            Err(BoardError::OutOfBounds { row: -1, col: 0, size: 3 })
        ));
        assert!(board.get(0, 3).is_err());
        assert!(board.get(3, 0).is_err());
        assert!(board.is_empty(5, 5).is_err());
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut board = Board::new(3).unwrap();
        board.set(1, 2, Mark::X).unwrap();
        assert_eq!(board.get(1, 2).unwrap(), Mark::X);
        assert!(!board.is_empty(1, 2).unwrap());
        assert!(board.is_empty(0, 0).unwrap());
    }

    #[test]
    fn test_set_overwrites_without_emptiness_check() {
        let mut board = Board::new(3).unwrap();
        board.set(0, 0, Mark::X).unwrap();
        board.set(0, 0, Mark::O).unwrap();
        assert_eq!(board.get(0, 0).unwrap(), Mark::O);
    }

    #[test]
    fn test_reset_clears_all_cells_and_keeps_size() {
        let mut board = Board::new(4).unwrap();
        board.set(0, 0, Mark::X).unwrap();
        board.set(3, 3, Mark::O).unwrap();
        board.reset();
        assert_eq!(board.size(), 4);
        assert_eq!(board.get(0, 0).unwrap(), Mark::Empty);
        assert_eq!(board.get(3, 3).unwrap(), Mark::Empty);
    }

    #[test]
    fn test_is_full_after_filling_every_cell() {
        let mut board = Board::new(2).unwrap();
        for row in 0..2 {
            for col in 0..2 {
                assert!(!board.is_full());
                board.set(row, col, Mark::X).unwrap();
            }
        }
        assert!(board.is_full());
    }
}
