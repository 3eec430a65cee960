use std::fmt;

use seabed_core::catalogue::{CatalogueError, FishId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// A record referenced a fish absent from the game-start catalogue.
    UnknownFish(FishId),
    Catalogue(CatalogueError),
    InvalidConfig(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFish(id) => write!(f, "fish {id} is not in the catalogue"),
            Self::Catalogue(err) => write!(f, "invalid catalogue: {err}"),
            Self::InvalidConfig(reason) => write!(f, "invalid agent config: {reason}"),
        }
    }
}

impl std::error::Error for AgentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalogue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CatalogueError> for AgentError {
    fn from(err: CatalogueError) -> Self {
        Self::Catalogue(err)
    }
}
