use crate::bot_controller::{BotInput, calculate_move};
use crate::game_state::GameState;
use crate::log;
use crate::rng::GameRng;
use crate::settings::MatchSettings;
use crate::types::{BotDifficulty, FirstMover, GameMode, GameStatus, Mark};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    MenuSelect,
    InProgress,
    Terminal,
}

/// Cumulative results across rounds of one match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Match-level state machine owned by the caller side of the engine. The
/// engine functions it drives stay pure; all mutable state lives here. Bot
/// moves are applied synchronously — any "thinking" pause is presentation
/// pacing and belongs to the UI.
pub struct MatchSession {
    settings: MatchSettings,
    phase: MatchPhase,
    game: GameState,
    scores: ScoreBoard,
    rng: GameRng,
}

impl MatchSession {
    pub fn new(settings: MatchSettings, rng: GameRng) -> Self {
        Self {
            settings,
            phase: MatchPhase::MenuSelect,
            game: GameState::new(Mark::X),
            scores: ScoreBoard::default(),
            rng,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Leaves the menu with the selected mode, keeping accumulated scores.
    pub fn start_match(&mut self, mode: GameMode, difficulty: BotDifficulty) {
        self.settings.mode = mode;
        self.settings.difficulty = difficulty;
        self.new_round();
    }

    pub fn new_round(&mut self) {
        let first_mark = match self.settings.first_mover {
            FirstMover::X => Mark::X,
            FirstMover::O => Mark::O,
            FirstMover::Random => {
                if self.rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        };

        self.game = GameState::new(first_mark);
        self.phase = MatchPhase::InProgress;

        if self.is_bot_turn() {
            self.play_bot_turn();
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        self.phase == MatchPhase::InProgress
            && self.settings.mode == GameMode::VersusBot
            && self.game.current_mark == self.settings.bot_mark
    }

    /// A human move. Rejected outside an active round and while it is the
    /// bot's turn; cell-level validation is `GameState::place_mark`'s job.
    pub fn handle_cell_click(&mut self, index: usize) -> Result<(), String> {
        if self.phase != MatchPhase::InProgress {
            return Err("No round in progress".to_string());
        }

        if self.is_bot_turn() {
            return Err("Not your turn".to_string());
        }

        self.game.place_mark(index)?;
        self.finish_round_if_over();

        if self.is_bot_turn() {
            self.play_bot_turn();
        }

        Ok(())
    }

    fn play_bot_turn(&mut self) {
        let input = BotInput::from_game_state(&self.game);
        let Some(index) = calculate_move(self.settings.difficulty, input, &mut self.rng) else {
            log!("Bot found no legal move");
            return;
        };

        if let Err(e) = self.game.place_mark(index) {
            log!("Bot failed to place mark at {}: {}", index, e);
            return;
        }

        self.finish_round_if_over();
    }

    fn finish_round_if_over(&mut self) {
        if self.game.status != GameStatus::InProgress {
            self.scores.record(self.game.status);
            self.phase = MatchPhase::Terminal;
        }
    }

    pub fn reset_scores(&mut self) {
        self.scores = ScoreBoard::default();
    }

    pub fn back_to_menu(&mut self) {
        self.phase = MatchPhase::MenuSelect;
        self.game = GameState::new(Mark::X);
    }
}
