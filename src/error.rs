#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("invalid time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("unknown word: {0}")]
    UnknownWord(String),

    #[error("invalid hour {0}, expected 1-12")]
    InvalidHour(u32),

    /// A word's span does not spell the word on the grid.
    #[error("grid mismatch for {word}: expected {expected:?}, found {found:?}")]
    GridMismatch {
        word: &'static str,
        expected: String,
        found: String,
    },

    #[error("invalid color: {0}")]
    InvalidColor(String),
}
