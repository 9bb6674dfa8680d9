use crate::args::MinesweeperArgs;
use crate::command::Action::*;
use crate::command::{Command, parse_mine_count, validate_mine_count};
use crate::field::Field;
use crate::render::Board;
use crate::win_state::WinState;
use crate::win_state::WinState::*;
use color_eyre::eyre::{Result, bail};
use log::{debug, info};
use rand::Rng;
use std::fmt::Display;
use std::io::{BufRead, Write};

const MINES_PROMPT: &str = "How many mines do you want on the field? ";
const MOVE_PROMPT: &str = "Set/unset mines marks or claim a cell as free: ";
const WON: &str = "Congratulations! You found all the mines!";
const LOST: &str = "You stepped on a mine and failed!";

/// Line based terminal: prompts go out, answers come in.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before the game ended");
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, msg: impl Display) -> Result<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    fn ask_mine_count(&mut self, size: usize) -> Result<usize> {
        loop {
            let line = self.prompt(MINES_PROMPT)?;
            match parse_mine_count(&line, size) {
                Ok(mines) => return Ok(mines),
                Err(e) => self.say(e)?,
            }
        }
    }
}

pub struct Game<R, W> {
    console: Console<R, W>,
    field: Field,
    color: bool,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(console: Console<R, W>, field: Field, color: bool) -> Self {
        Self {
            console,
            field,
            color,
        }
    }

    /// Settles the mine count (from the args or by asking) and lays out the field.
    pub fn start(args: &MinesweeperArgs, mut console: Console<R, W>) -> Result<Self> {
        let size = args.size;
        let mines = match args.mines.map(|m| validate_mine_count(m.into(), size)) {
            Some(Ok(mines)) => mines,
            Some(Err(e)) => {
                console.say(e)?;
                console.ask_mine_count(size)?
            }
            None => console.ask_mine_count(size)?,
        };
        let seed = args.seed.unwrap_or_else(|| rand::rng().random());
        info!("starting game, size {size}, {mines} mines, seed {seed}");

        let field = Field::new(size, mines, seed)?;
        Ok(Self::new(console, field, !args.no_color))
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Plays turns until the field is won or lost.
    pub fn run(&mut self) -> Result<WinState> {
        while !self.field.win_state().is_over() {
            self.print_field()?;
            self.make_move()?;
        }
        self.print_field()?;

        let state = self.field.win_state();
        let msg = match state {
            Won => WON,
            Lost => LOST,
            Untouched | Ongoing => unreachable!("game loop ended while {state:?}"),
        };
        info!("game over: {state:?}");
        self.console.say(msg)?;
        Ok(state)
    }

    fn print_field(&mut self) -> Result<()> {
        let board = Board::new(&self.field, self.color);
        self.console.say(board)
    }

    /// Prompts until one command is accepted by the field.
    fn make_move(&mut self) -> Result<()> {
        loop {
            let line = self.console.prompt(MOVE_PROMPT)?;
            let command = match Command::parse(&line, self.field.size()) {
                Ok(command) => command,
                Err(e) => {
                    self.console.say(e)?;
                    continue;
                }
            };

            let Command { point, action } = command;
            let result = match action {
                Free => self
                    .field
                    .reveal(point)
                    .map(|outcome| debug!("free {point}: {outcome:?}")),
                Mine => self.field.toggle_mark(point),
            };
            match result {
                Ok(()) => return Ok(()),
                Err(e) => self.console.say(e)?,
            }
        }
    }
}
