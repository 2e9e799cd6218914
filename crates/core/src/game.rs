//! Game session - a board plus the spawn RNG and turn bookkeeping
//!
//! This is the loop a front-end would otherwise write itself: move, and if the
//! move changed anything, spawn one tile and count the turn. A move that changes
//! nothing spawns nothing and is not counted.

use arrayvec::ArrayVec;
use log::debug;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::BoardError;
use crate::rng::SimpleRng;
use crate::types::{Change, Direction, GameAction, Level, Position};

/// Result of one played move
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Cells that moved or merged; empty when the move was rejected.
    pub changes: Vec<Change>,
    /// Where the follow-up tile landed, if one was spawned.
    pub spawned: Option<Position>,
}

impl MoveOutcome {
    /// True if the move changed the board.
    pub fn moved(&self) -> bool {
        !self.changes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rng: SimpleRng,
    seed: u32,
    spawn_level: Level,
    turns: u32,
}

impl Game {
    /// Create a session with an empty board. Call [`Game::start`] to place the
    /// opening tiles.
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let board = Board::new(config.size, config.max_level)?;
        Ok(Self::with_board(board, config))
    }

    /// Resume a session on an existing board (e.g. one restored from a snapshot).
    pub fn from_board(board: Board, config: &GameConfig) -> Result<Self, BoardError> {
        if config.spawn_level >= board.max_level() {
            return Err(BoardError::LevelTooHigh {
                level: config.spawn_level,
                max_level: board.max_level(),
            });
        }
        Ok(Self::with_board(board, config))
    }

    fn with_board(board: Board, config: &GameConfig) -> Self {
        Self {
            board,
            rng: SimpleRng::new(config.seed),
            seed: config.seed,
            spawn_level: config.spawn_level,
            turns: 0,
        }
    }

    /// Clear the board and spawn the two opening tiles.
    pub fn start(&mut self) -> Result<ArrayVec<Position, 2>, BoardError> {
        self.board.clear();
        self.turns = 0;

        let mut opening = ArrayVec::new();
        for _ in 0..2 {
            if let Some(pos) = self.board.spawn(self.spawn_level, &mut self.rng)? {
                opening.push(pos);
            }
        }
        debug!("game started with seed {}", self.seed);
        Ok(opening)
    }

    /// Start over with a fresh RNG from the original seed.
    pub fn restart(&mut self) -> Result<ArrayVec<Position, 2>, BoardError> {
        self.rng = SimpleRng::new(self.seed);
        self.start()
    }

    /// Play one move. Spawns a tile only if the move changed the board.
    pub fn play(&mut self, direction: Direction) -> Result<MoveOutcome, BoardError> {
        let changes = self.board.apply(direction);
        if changes.is_empty() {
            return Ok(MoveOutcome::default());
        }

        let spawned = self.board.spawn(self.spawn_level, &mut self.rng)?;
        self.turns += 1;
        Ok(MoveOutcome { changes, spawned })
    }

    /// Apply an action from a front-end.
    ///
    /// Returns the move outcome for moves, `None` for restarts.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Option<MoveOutcome>, BoardError> {
        match action {
            GameAction::Move(direction) => self.play(direction).map(Some),
            GameAction::Restart => self.restart().map(|_| None),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of accepted moves since the last start
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}
