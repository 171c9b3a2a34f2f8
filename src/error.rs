use thiserror::Error;

/// Which half of a pitching staff a rotation lookup refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rotation {
    Starters,
    Relievers,
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rotation::Starters => f.write_str("starters"),
            Rotation::Relievers => f.write_str("relievers"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("{team}: expected {expected} {group}, found {found}")]
    RosterIncomplete {
        team: String,
        group: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{team}: no {rotation} available for inning {inning}")]
    EmptyRotation {
        team: String,
        rotation: Rotation,
        inning: u32,
    },

    #[error("{team}: unknown player {name}")]
    UnknownPlayer { team: String, name: String },

    #[error("{team}: {name} selected more than once")]
    DuplicatePlayer { team: String, name: String },

    #[error("{team}: {name} cannot fill a {slot} slot")]
    PositionMismatch {
        team: String,
        name: String,
        slot: &'static str,
    },

    #[error("unknown team {0}")]
    UnknownTeam(String),

    #[error("unknown outcome category {0}")]
    UnknownOutcome(String),

    #[error("unknown position label {0}")]
    UnknownPosition(String),

    #[error("unknown weather label {0}")]
    UnknownWeather(String),
}

impl SimError {
    /// Configuration problems are detected from roster data; everything else
    /// is a caller contract violation.
    pub fn is_configuration(&self) -> bool {
        match self {
            SimError::RosterIncomplete { .. }
            | SimError::EmptyRotation { .. }
            | SimError::UnknownPlayer { .. }
            | SimError::DuplicatePlayer { .. }
            | SimError::PositionMismatch { .. }
            | SimError::UnknownTeam(_)
            | SimError::UnknownPosition(_)
            | SimError::UnknownWeather(_) => true,
            SimError::UnknownOutcome(_) => false,
        }
    }
}
