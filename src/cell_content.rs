/// What a cell holds. Safe cells carry their count of neighbouring mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    Empty(u8),
    Mine,
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty(0)
    }
}
