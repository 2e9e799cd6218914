//! Terminal tile-merge runner (default binary).
//!
//! Interactive play uses crossterm for input and the `term` crate for drawing.
//! With `--moves` it runs headless and prints the board dump instead.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::Env;
use log::info;

use tile_merge::args::Args;
use tile_merge::core::{Game, GameConfig, MoveOutcome};
use tile_merge::input::{handle_key_event, should_quit};
use tile_merge::store;
use tile_merge::term::{BoardView, TerminalRenderer};
use tile_merge::types::Direction;

fn main() -> Result<()> {
    // Quiet by default so log lines do not tear the terminal frame.
    env_logger::Builder::from_env(Env::new().filter_or("TILE_MERGE_LOG", "warn")).init();

    let args = Args::parse();
    let config = args.config();
    config.validate().context("invalid game configuration")?;

    let mut game = new_game(&args, &config)?;

    if let Some(moves) = &args.moves {
        run_headless(&mut game, moves)?;
        print!("{}", game.board());
    } else {
        let mut term = TerminalRenderer::new();
        term.enter()?;

        let result = run(&mut term, &mut game);

        // Always try to restore terminal state.
        let _ = term.exit();
        result?;
    }

    if let Some(path) = &args.save {
        store::save(path, game.board())
            .with_context(|| format!("saving board to {}", path.display()))?;
        info!("board saved to {}", path.display());
    }
    Ok(())
}

fn new_game(args: &Args, config: &GameConfig) -> Result<Game> {
    match &args.load {
        Some(path) => {
            let board = store::load(path)
                .with_context(|| format!("loading board from {}", path.display()))?;
            info!("resuming {}x{} board", board.size(), board.size());
            Ok(Game::from_board(board, config)?)
        }
        None => {
            let mut game = Game::new(config)?;
            game.start()?;
            Ok(game)
        }
    }
}

fn run_headless(game: &mut Game, moves: &[Direction]) -> Result<()> {
    for &dir in moves {
        let outcome = game.play(dir)?;
        info!("{}: {} changes", dir.as_str(), outcome.changes.len());
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = BoardView::for_board(game.board());
    let mut last: Option<MoveOutcome> = None;

    loop {
        let status = status_lines(game, last.as_ref());
        term.draw(&view.render(game.board(), &status))?;

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
            last = game.apply_action(action)?;
        }
    }
}

fn status_lines(game: &Game, last: Option<&MoveOutcome>) -> Vec<String> {
    let mut lines = vec![format!("turn {}   seed {}", game.turns(), game.seed())];
    match last {
        Some(outcome) if outcome.moved() => {
            let merges = outcome.changes.iter().filter(|c| c.is_merge()).count();
            lines.push(format!(
                "{} tiles moved, {} merges",
                outcome.changes.len(),
                merges
            ));
        }
        Some(_) => lines.push("nothing moved".to_string()),
        None => lines.push(String::new()),
    }
    lines.push("arrows/hjkl/wasd move  r restart  q quit".to_string());
    lines
}
