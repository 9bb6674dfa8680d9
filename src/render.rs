use crate::field::Field;
use crossterm::style::Color::*;
use crossterm::style::{StyledContent, Stylize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// The field framed with column headers and row numbers, one glyph per cell.
pub struct Board<'a> {
    pub field: &'a Field,
    pub color: bool,
}

impl<'a> Board<'a> {
    pub fn new(field: &'a Field, color: bool) -> Self {
        Self { field, color }
    }
}

fn styled(glyph: char) -> StyledContent<char> {
    match glyph {
        '.' => glyph.with(DarkGrey),
        '*' => glyph.with(Yellow).bold(),
        'X' => glyph.with(Red).bold(),
        '1' => glyph.with(Blue),
        '2' => glyph.with(Green),
        '3' => glyph.with(Red),
        '4' => glyph.with(DarkBlue),
        '5' => glyph.with(DarkRed),
        '6' => glyph.with(Cyan),
        '7' => glyph.with(Magenta),
        '8' => glyph.with(Grey),
        _ => glyph.stylize(),
    }
}

impl Display for Board<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.field.size();
        let label = size.to_string().len();
        let separator = format!("{:-<label$}|{:-<size$}|", "", "");

        // one header line per digit place, most significant first
        for place in (0..label as u32).rev().map(|e| 10usize.pow(e)) {
            write!(f, "{:label$}|", "")?;
            for col in 1..=size {
                if col >= place {
                    write!(f, "{}", (col / place) % 10)?;
                } else {
                    write!(f, " ")?;
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{separator}")?;

        for (row, cells) in self.field.rows().enumerate() {
            write!(f, "{:>label$}|", row + 1)?;
            for cell in cells {
                if self.color {
                    write!(f, "{}", styled(cell.glyph()))?;
                } else {
                    write!(f, "{cell}")?;
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{separator}")
    }
}
