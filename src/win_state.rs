/// `Untouched` until the first successful reveal; the first-move guarantee
/// only applies while in it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WinState {
    #[default]
    Untouched,
    Ongoing,
    Lost,
    Won,
}

impl WinState {
    pub fn is_over(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}
