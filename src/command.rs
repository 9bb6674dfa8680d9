use crate::error::InputError;
use crate::point::Point;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Claim the cell is free and open it.
    Free,
    /// Set or clear a mine mark.
    Mine,
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "mine" => Ok(Self::Mine),
            _ => Err(InputError::UnknownCommand(s.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub point: Point,
    pub action: Action,
}

impl Command {
    /// Parses `<col> <row> <free|mine>`, 1-indexed. The column comes first.
    pub fn parse(line: &str, size: usize) -> Result<Self, InputError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(InputError::Empty);
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [col, row, action] = tokens[..] else {
            return Err(InputError::WrongArgumentCount(line.to_string()));
        };

        let parse = |t: &str| {
            t.parse::<i64>()
                .map_err(|e| InputError::NotANumber(format!("{t}: {e}")))
        };
        let (col, row) = (parse(col)?, parse(row)?);

        let in_range = |v: i64| (1..=size as i64).contains(&v);
        if !in_range(col) || !in_range(row) {
            return Err(InputError::OutOfField { col, row });
        }

        Ok(Self {
            point: Point::new(row as usize - 1, col as usize - 1),
            action: action.parse()?,
        })
    }
}

/// Parses the mine count for a `size`×`size` field: `0..=size²-1`.
pub fn parse_mine_count(line: &str, size: usize) -> Result<usize, InputError> {
    let mines: i64 = line
        .trim()
        .parse()
        .map_err(|_| InputError::MineCountNotANumber)?;
    validate_mine_count(mines, size)
}

pub fn validate_mine_count(mines: i64, size: usize) -> Result<usize, InputError> {
    if mines < 0 {
        return Err(InputError::MineCountNotANumber);
    }
    if mines as u64 >= (size * size) as u64 {
        return Err(InputError::MineCountTooLarge);
    }
    Ok(mines as usize)
}
