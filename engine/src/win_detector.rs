use crate::board::{Board, LINES, is_board_full};
use crate::types::{GameOutcome, Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Scans the lines in declaration order and stops at the first complete one,
/// so at most one line is ever reported even when two complete at once.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for cells in LINES {
        let mark = board[cells[0]];
        if mark == Mark::Empty {
            continue;
        }
        if board[cells[1]] == mark && board[cells[2]] == mark {
            return Some(WinningLine { mark, cells });
        }
    }
    None
}

/// Classifies any 9-cell board, including hypothetical mid-search ones.
/// `None` means the game is still open.
pub fn evaluate(board: &Board) -> Option<GameOutcome> {
    if let Some(line) = check_win_with_line(board) {
        return Some(GameOutcome::Win(line));
    }
    if is_board_full(board) {
        return Some(GameOutcome::Draw);
    }
    None
}
