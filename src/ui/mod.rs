use std::{fmt, io};

use crate::service::{lookup::IdNotFoundError, randomizer::RollError};

pub mod repl;
pub mod report;

#[derive(Debug)]
pub enum ReplError {
    Roll(RollError),
    UnknownPlayer(usize),
    Lookup(IdNotFoundError),
    Console(io::Error),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReplError::Roll(err) => write!(f, "Roll error: {}", err),
            ReplError::UnknownPlayer(player) => write!(f, "There is no player {}", player),
            ReplError::Lookup(err) => write!(f, "Lookup error: {}", err),
            ReplError::Console(err) => write!(f, "Console error: {}", err),
        }
    }
}

impl std::error::Error for ReplError {}

impl From<RollError> for ReplError {
    fn from(error: RollError) -> Self {
        ReplError::Roll(error)
    }
}

impl From<IdNotFoundError> for ReplError {
    fn from(error: IdNotFoundError) -> Self {
        ReplError::Lookup(error)
    }
}

impl From<io::Error> for ReplError {
    fn from(error: io::Error) -> Self {
        ReplError::Console(error)
    }
}
