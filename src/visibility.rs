use crate::flag::Flag;

/// Only hidden cells can carry a flag, so revealing drops any mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden(Flag),
    Shown,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden(Flag::Clear)
    }
}
