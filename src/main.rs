use args::MinesweeperArgs;
use clap::Parser;
use color_eyre::Result;
use game::{Console, Game};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io;

mod args;
mod cell;
mod cell_content;
mod command;
mod error;
mod field;
mod flag;
mod game;
mod point;
mod render;
mod visibility;
mod win_state;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = MinesweeperArgs::parse().clamped();

    // stdout belongs to the game, so logs only ever go to a file
    if let Some(path) = &args.log {
        WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
    }

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    Game::start(&args, console)?.run()?;
    Ok(())
}
