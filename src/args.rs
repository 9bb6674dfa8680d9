use clap::Parser;
use std::path::PathBuf;

/// Text minesweeper: type `<col> <row> free` to open a cell, `<col> <row> mine` to mark one
#[derive(Parser, Clone, Default, Debug)]
#[command(version, about, long_about = None)]
pub struct MinesweeperArgs {
    /// side length of the square field
    #[arg(short, long, default_value_t = 9)]
    pub size: usize,
    /// amount of mines, asked for when left out
    #[arg(short, long)]
    pub mines: Option<u32>,
    /// seed for a reproducible mine layout
    #[arg(long)]
    pub seed: Option<u64>,
    /// write a debug log to this file
    #[arg(long)]
    pub log: Option<PathBuf>,
    /// print the field without colors
    #[arg(long)]
    pub no_color: bool,
}

impl MinesweeperArgs {
    pub fn clamped(mut self) -> Self {
        self.size = self.size.clamp(1, 99);
        self
    }
}
