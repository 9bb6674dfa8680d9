use crate::cell_content::CellContent;
use crate::cell_content::CellContent::*;
use crate::error::GameError;
use crate::flag::Flag::*;
use crate::visibility::Visibility;
use crate::visibility::Visibility::*;
use std::fmt;
use std::fmt::{Display, Formatter, Write};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub visibility: Visibility,
    pub content: CellContent,
}

impl Cell {
    pub const MINE: Cell = Cell {
        visibility: Hidden(Clear),
        content: Mine,
    };

    pub fn is_mine(&self) -> bool {
        matches!(self.content, Mine)
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.visibility, Shown)
    }

    pub fn is_marked(&self) -> bool {
        matches!(self.visibility, Hidden(Marked))
    }

    /// `None` for mines.
    pub fn mines_around(&self) -> Option<u8> {
        match self.content {
            Empty(n) => Some(n),
            Mine => None,
        }
    }

    /// Flips the mark of a hidden cell. Revealed cells refuse.
    pub fn toggle_mark(&mut self) -> Result<(), GameError> {
        match self.visibility {
            Hidden(flag) => {
                self.visibility = Hidden(flag.toggled());
                Ok(())
            }
            Shown => match self.content {
                Empty(1..) => Err(GameError::CannotMarkNumber),
                _ => Err(GameError::AlreadyRevealed),
            },
        }
    }

    /// Returns whether the cell was hidden before.
    pub fn reveal(&mut self) -> bool {
        let was_hidden = !self.is_revealed();
        self.visibility = Shown;
        was_hidden
    }

    pub fn glyph(&self) -> char {
        match self.visibility {
            Hidden(Marked) => '*',
            Hidden(Clear) => '.',
            Shown => match self.content {
                Mine => 'X',
                Empty(0) => '/',
                Empty(n) => std::char::from_digit(n as u32, 10).unwrap_or('?'),
            },
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.glyph())
    }
}
