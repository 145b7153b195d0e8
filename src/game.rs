//! One terminal game session.
//!
//! Ties the cursor to the board: cursor actions move the selection, a
//! completed selection becomes a move, and `NewBoard` deals a fresh board
//! from the next seed. Board events are forwarded to the optional event-log
//! channel.

use std::sync::mpsc::Sender;

use anyhow::{bail, Result};
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::core::{channel_listener, Board, RandomTiles};
use crate::input::Cursor;
use crate::term::Hud;
use crate::types::{BoardEvent, CursorAction, Gem, MoveOutcome};

pub type GemBoard = Board<Gem, RandomTiles<Gem>>;

pub struct Game {
    config: GameConfig,
    board: GemBoard,
    cursor: Cursor,
    hud: Hud,
    deals: u32,
    event_tx: Option<Sender<BoardEvent<Gem>>>,
}

impl Game {
    pub fn new(config: GameConfig, event_tx: Option<Sender<BoardEvent<Gem>>>) -> Result<Self> {
        let board = deal(&config, config.seed)?;
        let mut game = Self {
            cursor: Cursor::new(config.width, config.height),
            config,
            board,
            hud: Hud::new(),
            deals: 0,
            event_tx,
        };
        game.attach_listener();
        Ok(game)
    }

    /// Replace the board with a fresh, settled one from the next seed.
    pub fn new_board(&mut self) -> Result<()> {
        self.deals = self.deals.wrapping_add(1);
        let seed = self.config.seed.wrapping_add(self.deals);
        self.board = deal(&self.config, seed)?;
        self.attach_listener();
        self.cursor = Cursor::new(self.config.width, self.config.height);
        self.hud = Hud::new();
        info!(seed, deals = self.deals, "new board");
        Ok(())
    }

    fn attach_listener(&mut self) {
        if let Some(tx) = &self.event_tx {
            self.board.add_listener(channel_listener(tx.clone()));
        }
    }

    /// Apply one cursor action. Returns the move outcome when a swap was attempted.
    pub fn apply(&mut self, action: CursorAction) -> Result<Option<MoveOutcome>> {
        if action == CursorAction::NewBoard {
            self.cursor.apply(action);
            self.new_board()?;
            return Ok(None);
        }

        let Some(swap) = self.cursor.apply(action) else {
            return Ok(None);
        };

        let outcome = self.board.move_tiles(swap.first, swap.second);
        if let MoveOutcome::Resolved(report) = outcome {
            self.hud.moves += 1;
            self.hud.runs += report.runs;
        }
        self.hud.last = Some(outcome);
        Ok(Some(outcome))
    }

    pub fn board(&self) -> &GemBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut GemBoard {
        &mut self.board
    }

    pub fn deals(&self) -> u32 {
        self.deals
    }

    /// HUD state with the current cursor and selection.
    pub fn hud(&self) -> Hud {
        Hud {
            cursor: self.cursor.position(),
            selected: self.cursor.selected(),
            ..self.hud
        }
    }
}

/// Seeds tried by [`deal`] before giving up.
pub const DEAL_ATTEMPTS: u32 = 8;

/// Fill a board from `seed` and clear any runs the fill produced.
///
/// If the cascade limit stops the settle with runs still on the board, the
/// next seed is tried, up to [`DEAL_ATTEMPTS`] seeds in total. The settle runs
/// before a listener is attached, so the opening board emits no events.
pub fn deal(config: &GameConfig, seed: u32) -> Result<GemBoard> {
    for attempt in 0..DEAL_ATTEMPTS {
        let seed = seed.wrapping_add(attempt);
        let generator = RandomTiles::new(config.palette(), seed)?;
        let mut board = Board::new(generator, config.width, config.height)?
            .with_cascade_limit(config.cascade_limit);
        let report = board.settle();
        if report.stable {
            info!(seed, passes = report.passes, "board dealt");
            return Ok(board);
        }
        warn!(
            seed,
            passes = report.passes,
            "opening board did not settle, trying next seed"
        );
    }
    bail!(
        "no stable {}x{} board within a cascade limit of {} (tried {} seeds from {})",
        config.width,
        config.height,
        config.cascade_limit,
        DEAL_ATTEMPTS,
        seed
    )
}
