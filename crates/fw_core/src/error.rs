use thiserror::Error;

/// Errors raised at the caller-facing boundaries of the engine.
///
/// The fight and contract algorithms themselves are total; these variants
/// cover precondition checks (card composition, fighter identity, roles)
/// and the data/config plumbing around them.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("No fighters selected for the card")]
    NoFightersSelected,

    #[error("Fighter not found in roster: {name}")]
    FighterNotFound { name: String },

    #[error("Invalid fighter: {0}")]
    InvalidFighter(String),

    #[error("Fighter not signed for week {week}: {name}")]
    UnsignedFighter { name: String, week: u32 },

    #[error("Fighter cannot face themselves: {name}")]
    SelfFight { name: String },

    #[error("Invalid role: {0} (expected undercard, co-main or main-event)")]
    InvalidRole(String),

    #[error("Invalid week: {week} (weeks start at 1)")]
    InvalidWeek { week: u32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaMismatch { found: u8, expected: u8 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Whether the caller can fix the input and retry.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CoreError::NoFightersSelected
                | CoreError::FighterNotFound { .. }
                | CoreError::UnsignedFighter { .. }
                | CoreError::InvalidFighter(_)
                | CoreError::SelfFight { .. }
                | CoreError::InvalidRole(_)
                | CoreError::InvalidWeek { .. }
                | CoreError::Deserialization(_)
        )
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CoreError::Deserialization(err.to_string())
        } else {
            CoreError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
