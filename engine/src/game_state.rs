use crate::board::{BOARD_CELLS, Board, EMPTY_BOARD, is_board_full};
use crate::types::{GameStatus, Mark, WinningLine};
use crate::win_detector::check_win_with_line;

/// One round of play. Cells only ever transition empty -> marked; a new
/// round starts from a fresh `GameState`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl GameState {
    pub fn new(first_mark: Mark) -> Self {
        if first_mark == Mark::Empty {
            panic!("first mover must be X or O");
        }

        Self {
            board: EMPTY_BOARD,
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if index >= BOARD_CELLS {
            return Err("Position out of bounds".to_string());
        }

        if self.board[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[index] = self.current_mark;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.winning_line = Some(line);
            self.status = match line.mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}
