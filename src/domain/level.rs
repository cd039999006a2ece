// src/domain/level.rs
use crate::domain::DomainError;
use std::fmt;
use std::str::FromStr;

/// CEFR proficiency tier used to bucket the local word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    A1,
    A2,
    B1,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::A1, Level::A2, Level::B1];

    /// Lower-case stem of the word list file for this level (`a1` -> `a1.json`)
    pub fn file_stem(&self) -> &'static str {
        match self {
            Level::A1 => "a1",
            Level::A2 => "a2",
            Level::B1 => "b1",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a1" => Ok(Level::A1),
            "a2" => Ok(Level::A2),
            "b1" => Ok(Level::B1),
            _ => Err(DomainError::UnknownLevel(s.to_string())),
        }
    }
}
