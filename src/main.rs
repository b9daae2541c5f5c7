use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use game_2048::game::{Command, Game, GameConfig, Step};
use log::warn;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal, one command per line")]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=16))]
    size: u16,

    /// Tiles placed at the start of each game
    #[arg(long, value_name = "N", default_value_t = 2)]
    initial_tiles: usize,

    /// Seed for tile spawning (random if omitted)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

const HELP: &str = "commands: up/down/left/right (or n/s/e/w, wasd), new, quit";

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = GameConfig {
        size: usize::from(args.size),
        initial_tiles: args.initial_tiles,
        seed: args.seed,
    };
    let mut game = Game::from_config(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP}")?;
    writeln!(out, "{}", game.model())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(c) => c,
            Err(e) => {
                warn!("{e}");
                writeln!(out, "{e}; {HELP}")?;
                continue;
            }
        };
        match game.apply(command) {
            Step::Quit => break,
            Step::Ignored => {
                writeln!(out, "Game over. Type `new` to play again or `quit`.")?;
                continue;
            }
            Step::Unchanged => writeln!(out, "Nothing moved.")?,
            Step::Moved | Step::Started => {}
        }
        writeln!(out, "{}", game.model())?;
        if game.model().game_over() {
            writeln!(
                out,
                "Game over with score {} (best {}).",
                game.model().score(),
                game.model().max_score()
            )?;
        }
    }
    Ok(())
}
