//! Terminal match-3 runner (default binary).
//!
//! Move the cursor with arrows, hjkl or wasd. Select two cells in the same
//! row or column to swap them. `n` deals a new board, `q` quits.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use match3::config::GameConfig;
use match3::event_log::EventLog;
use match3::game::{self, Game};
use match3::input::{handle_key_event, should_quit};
use match3::term::{render_text, BoardView, TerminalRenderer, Viewport};
use match3::types::Gem;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = GameConfig::from_env()?.with_args(&args)?;
    match3::logging::init_logging(&config)?;

    if config.print_only {
        let board = game::deal(&config, config.seed)?;
        print!("{}", render_text(&board, Gem::as_char));
        return Ok(());
    }

    let event_log = config
        .event_log
        .as_deref()
        .map(EventLog::create)
        .transpose()?;
    let game = Game::new(config, event_log.as_ref().map(EventLog::sender))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(log) = event_log {
        let written = log.finish()?;
        info!(written, "event log closed");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut game: Game) -> Result<()> {
    let view = BoardView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(game.board(), &game.hud(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Turn-based: block until the next key.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }
        if let Some(action) = handle_key_event(key) {
            if let Some(outcome) = game.apply(action)? {
                info!(action = action.as_str(), outcome = outcome.as_str(), "move");
            }
        }
    }
}
