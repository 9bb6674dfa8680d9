#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Flag {
    #[default]
    Clear,
    Marked,
}

impl Flag {
    pub fn toggled(self) -> Self {
        match self {
            Self::Clear => Self::Marked,
            Self::Marked => Self::Clear,
        }
    }
}
