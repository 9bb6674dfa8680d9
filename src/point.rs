use std::fmt;
use std::fmt::{Display, Formatter};

pub const DIRS_8: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// A 0-indexed grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbours inside a `size`×`size` grid. Edges are clamped, never wrapped.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Point> {
        DIRS_8.iter().filter_map(move |&(dr, dc)| {
            let row = self.row.checked_add_signed(dr as isize)?;
            let col = self.col.checked_add_signed(dc as isize)?;
            (row < size && col < size).then_some(Point { row, col })
        })
    }
}

impl Display for Point {
    // 1-indexed, column first, the way moves are typed
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.col + 1, self.row + 1)
    }
}
