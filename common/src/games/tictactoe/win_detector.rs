use super::types::{GameStatus, Mark, Position, WinningLine};

/// Evaluate a board snapshot against the given win length.
///
/// Pure function of the grid and the win length. Line families are scanned
/// in a fixed order (rows, columns, then both diagonal directions), so when
/// several completed runs coexist the reported winner is deterministic.
///
/// A win length of 1 means any occupied cell wins immediately, found by the
/// row scan; a win length larger than the board (or below 1) can never win,
/// leaving only draw-or-in-progress.
pub fn check_win(board: &[Vec<Mark>], win_length: usize) -> GameStatus {
    if board.is_empty() {
        return GameStatus::InProgress;
    }

    if let Some(line) = find_winning_line(board, win_length) {
        return match line.mark {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Like [`check_win`], but reports the endpoints of the completed run.
/// Scans in the same order, so it agrees with `check_win` on which run
/// wins. `None` when nobody has won (yet).
pub fn check_win_with_line(board: &[Vec<Mark>], win_length: usize) -> Option<WinningLine> {
    find_winning_line(board, win_length)
}

fn find_winning_line(board: &[Vec<Mark>], target: usize) -> Option<WinningLine> {
    let size = board.len();
    if target < 1 || target > size {
        return None;
    }

    // Rows, top to bottom.
    for row in 0..size {
        let line: Vec<Position> = (0..size).map(|col| Position::new(row, col)).collect();
        if let Some(win) = scan_line(board, &line, target) {
            return Some(win);
        }
    }

    // Columns, left to right.
    for col in 0..size {
        let line: Vec<Position> = (0..size).map(|row| Position::new(row, col)).collect();
        if let Some(win) = scan_line(board, &line, target) {
            return Some(win);
        }
    }

    // Down-right diagonals anchored on the first column.
    for start_row in 0..=(size - target) {
        let line: Vec<Position> = (0..size - start_row)
            .map(|k| Position::new(start_row + k, k))
            .collect();
        if let Some(win) = scan_line(board, &line, target) {
            return Some(win);
        }
    }

    // Down-right diagonals anchored on the first row. Column 0 already
    // belongs to the family above.
    for start_col in 1..=(size - target) {
        let line: Vec<Position> = (0..size - start_col)
            .map(|k| Position::new(k, start_col + k))
            .collect();
        if let Some(win) = scan_line(board, &line, target) {
            return Some(win);
        }
    }

    // Down-left diagonals anchored on the last column.
    for start_row in 0..=(size - target) {
        let line: Vec<Position> = (0..size - start_row)
            .map(|k| Position::new(start_row + k, size - 1 - k))
            .collect();
        if let Some(win) = scan_line(board, &line, target) {
            return Some(win);
        }
    }

    // Remaining down-left diagonals: the upper-left triangle, anchored on
    // the first row and ending on the first column, longest first. The one
    // through the last column already belongs to the family above. Empty
    // when target == size.
    for start_col in ((target - 1)..size - 1).rev() {
        let line: Vec<Position> = (0..=start_col)
            .map(|k| Position::new(k, start_col - k))
            .collect();
        if let Some(win) = scan_line(board, &line, target) {
            return Some(win);
        }
    }

    None
}

// Slide a window of width `target` along one line, keeping a rolling sum of
// the signed cell values. With cells encoded as {+1, 0, -1} a window sums
// to +target or -target exactly when one side owns every cell in it.
fn scan_line(board: &[Vec<Mark>], line: &[Position], target: usize) -> Option<WinningLine> {
    if line.len() < target {
        return None;
    }

    let cell = |pos: Position| board[pos.row][pos.col].value();

    let mut sum: i32 = line[..target].iter().map(|&pos| cell(pos)).sum();
    let mut start = 0;
    loop {
        let mark = if sum == target as i32 {
            Some(Mark::X)
        } else if sum == -(target as i32) {
            Some(Mark::O)
        } else {
            None
        };
        if let Some(mark) = mark {
            return Some(WinningLine {
                mark,
                start: line[start],
                end: line[start + target - 1],
            });
        }

        if start + target == line.len() {
            return None;
        }
        sum -= cell(line[start]);
        sum += cell(line[start + target]);
        start += 1;
    }
}

fn is_full(board: &[Vec<Mark>]) -> bool {
    board
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rows of 'X', 'O' and '.' keep the fixtures readable.
    fn board_from(rows: &[&str]) -> Vec<Vec<Mark>> {
        rows.iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'X' => Mark::X,
                        'O' => Mark::O,
                        '.' => Mark::Empty,
                        _ => panic!("unexpected cell char: {}", c),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_empty_boards_are_in_progress() {
        for size in [1usize, 2, 3, 5, 10] {
            let board = vec![vec![Mark::Empty; size]; size];
            assert_eq!(check_win(&board, 3), GameStatus::InProgress, "size {}", size);
        }
    }

    #[test]
    fn test_zero_size_board_is_in_progress_not_draw() {
        let board: Vec<Vec<Mark>> = Vec::new();
        assert_eq!(check_win(&board, 3), GameStatus::InProgress);
        assert_eq!(check_win(&board, 0), GameStatus::InProgress);
        assert_eq!(check_win_with_line(&board, 1), None);
    }

    #[test]
    fn test_evaluation_is_pure() {
        let board = board_from(&["XO.", ".X.", "..."]);
        let first = check_win(&board, 3);
        assert_eq!(check_win(&board, 3), first);
        assert_eq!(first, GameStatus::InProgress);
    }

    #[test]
    fn test_row_win() {
        let board = board_from(&["XXX", "OO.", "..."]);
        assert_eq!(check_win(&board, 3), GameStatus::XWon);
    }

    #[test]
    fn test_column_win() {
        let board = board_from(&["OX.", "OX.", "O.X"]);
        assert_eq!(check_win(&board, 3), GameStatus::OWon);
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_from(&["X.O", ".XO", "..X"]);
        assert_eq!(check_win(&board, 3), GameStatus::XWon);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from(&["..O", "XO.", "OX."]);
        assert_eq!(check_win(&board, 3), GameStatus::OWon);
    }

    #[test]
    fn test_partial_window_win_on_longer_row() {
        // Run sits in the middle of a 5-wide row.
        let board = board_from(&[".XXX.", "OO...", ".....", ".....", "....O"]);
        assert_eq!(check_win(&board, 3), GameStatus::XWon);
    }

    #[test]
    fn test_offset_down_right_diagonal() {
        // X on (1,1)..(4,4): a down-right diagonal anchored on the first
        // row at column 1, not through the origin.
        let board = board_from(&[
            ".....",
            ".X...",
            "O.X..",
            "O..X.",
            "....X",
        ]);
        assert_eq!(check_win(&board, 4), GameStatus::XWon);
        let line = check_win_with_line(&board, 4).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Position::new(1, 1));
        assert_eq!(line.end, Position::new(4, 4));
    }

    #[test]
    fn test_offset_down_right_diagonal_below_origin() {
        // Anchored on the first column at row 1.
        let board = board_from(&[
            ".....",
            "X...O",
            ".X..O",
            "..X..",
            "...X.",
        ]);
        assert_eq!(check_win(&board, 4), GameStatus::XWon);
    }

    #[test]
    fn test_offset_anti_diagonal_last_row_family() {
        // O on (0,2), (1,1), (2,0): a down-left diagonal that ends on the
        // last row without touching the last column.
        let board = board_from(&[
            "..O..",
            ".O...",
            "OX...",
            ".X...",
            "X....",
        ]);
        assert_eq!(check_win(&board, 3), GameStatus::OWon);
        let line = check_win_with_line(&board, 3).unwrap();
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_offset_anti_diagonal_last_column_family() {
        // X on (1,4)..(4,1): anchored on the last column at row 1.
        let board = board_from(&[
            ".....",
            "O...X",
            "O..X.",
            "..X..",
            ".X...",
        ]);
        assert_eq!(check_win(&board, 4), GameStatus::XWon);
    }

    #[test]
    fn test_win_length_one_first_occupied_cell_in_row_order_wins() {
        // Both sides have marks; the row scan reaches O at (0,0) first.
        let board = board_from(&["O..", "...", "..X"]);
        assert_eq!(check_win(&board, 1), GameStatus::OWon);
        let line = check_win_with_line(&board, 1).unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 0));
    }

    #[test]
    fn test_win_length_one_on_empty_board_is_in_progress() {
        let board = board_from(&["...", "...", "..."]);
        assert_eq!(check_win(&board, 1), GameStatus::InProgress);
    }

    #[test]
    fn test_win_length_larger_than_board_never_wins() {
        let board = board_from(&["XXX", "XXX", "XXX"]);
        assert_eq!(check_win(&board, 4), GameStatus::Draw);

        let board = board_from(&["XXX", "XX.", "XXX"]);
        assert_eq!(check_win(&board, 4), GameStatus::InProgress);
    }

    #[test]
    fn test_win_length_zero_never_wins() {
        let board = board_from(&["XO", "OX"]);
        assert_eq!(check_win(&board, 0), GameStatus::Draw);

        let board = board_from(&["XO", "O."]);
        assert_eq!(check_win(&board, 0), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_run_is_a_draw() {
        let board = board_from(&["XOX", "XOX", "OXO"]);
        assert_eq!(check_win(&board, 3), GameStatus::Draw);
    }

    #[test]
    fn test_interrupted_runs_do_not_win() {
        let board = board_from(&["XXOX", "....", "....", "...."]);
        assert_eq!(check_win(&board, 3), GameStatus::InProgress);
    }

    #[test]
    fn test_short_win_length_on_large_board() {
        // 10x10 board, 4 in a row vertically far from any edge anchor.
        let mut rows = vec![String::from(".........."); 10];
        for row in 3..7 {
            rows[row].replace_range(5..6, "X");
        }
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let board = board_from(&refs);
        assert_eq!(check_win(&board, 4), GameStatus::XWon);
        assert_eq!(check_win(&board, 5), GameStatus::InProgress);
    }

    #[test]
    fn test_row_scan_reports_first_of_coexisting_wins() {
        // Both a row run (row 0) and a column run (column 0) are complete;
        // the row family is scanned first.
        let board = board_from(&["XXX", "XOO", "X.."]);
        let line = check_win_with_line(&board, 3).unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }
}
