use crate::board::{Board, get_available_moves};
use crate::game_state::GameState;
use crate::rng::GameRng;
use crate::types::{BotDifficulty, GameOutcome, Mark};
use crate::win_detector::{check_win, evaluate};

/// Snapshot handed to the strategies. The bot holds no state of its own;
/// every call is a pure function of this input (plus the injected RNG for
/// the randomized tiers).
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
        }
    }
}

/// Picks a cell for the bot, or `None` when no empty cell is left. Callers
/// must check the board is not already terminal before asking for a move.
pub fn calculate_move(
    difficulty: BotDifficulty,
    input: BotInput,
    rng: &mut GameRng,
) -> Option<usize> {
    match difficulty {
        BotDifficulty::Easy => calculate_random_move(&input, rng),
        BotDifficulty::Hard => calculate_heuristic_move(&input, rng),
        BotDifficulty::Advanced => calculate_minimax_move(&input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut GameRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Single-ply policy, first satisfied rule wins: complete an own line, block
/// the opponent's, take the center, take a random open corner, otherwise a
/// random open cell. Threat scans run in ascending index order.
pub fn calculate_heuristic_move(input: &BotInput, rng: &mut GameRng) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;

    if let Some(index) = find_winning_move(&mut board, bot_mark, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&mut board, opponent_mark, &available_moves) {
        return Some(index);
    }

    const CENTER: usize = 4;
    if board[CENTER] == Mark::Empty {
        return Some(CENTER);
    }

    const CORNERS: [usize; 4] = [0, 2, 6, 8];
    let open_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&corner| board[corner] == Mark::Empty)
        .collect();
    if !open_corners.is_empty() {
        return Some(open_corners[rng.random_range(0..open_corners.len())]);
    }

    Some(available_moves[rng.random_range(0..available_moves.len())])
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board[index] = mark;
        let winner = check_win(board);
        board[index] = Mark::Empty;

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

/// Full-tree minimax over the 9-cell board. Optimal by exhaustion; the state
/// space is small enough that no pruning is needed. Ties at the root keep the
/// lowest-index cell, since the incumbent is only replaced on strict
/// improvement.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for &index in &available_moves {
        board[index] = bot_mark;
        let score = minimax(&mut board, 0, false, bot_mark, opponent_mark);
        board[index] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Scores from the bot's perspective: a bot win is `10 - depth`, an opponent
/// win `depth - 10`, a draw 0. `depth` counts plies after the root move, so
/// the bot prefers the fastest forced win and the longest-delayed loss.
fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    match evaluate(board) {
        Some(GameOutcome::Win(line)) => {
            return if line.mark == bot_mark {
                10 - depth
            } else {
                depth - 10
            };
        }
        Some(GameOutcome::Draw) => return 0,
        None => {}
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for index in 0..board.len() {
            if board[index] != Mark::Empty {
                continue;
            }
            board[index] = bot_mark;
            let score = minimax(board, depth + 1, false, bot_mark, opponent_mark);
            board[index] = Mark::Empty;
            best_score = best_score.max(score);
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for index in 0..board.len() {
            if board[index] != Mark::Empty {
                continue;
            }
            board[index] = opponent_mark;
            let score = minimax(board, depth + 1, true, bot_mark, opponent_mark);
            board[index] = Mark::Empty;
            best_score = best_score.min(score);
        }
        best_score
    }
}
