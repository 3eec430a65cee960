//! Static fish catalogue, supplied once before the first turn.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique fish identifier.
pub type FishId = u32;

/// Unique drone identifier.
pub type DroneId = u32;

/// Color and type of a fish. Assigned at game start, never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FishDetail {
    pub color: i32,
    #[serde(rename = "type")]
    pub fish_type: i32,
}

impl FishDetail {
    pub fn new(color: i32, fish_type: i32) -> Self {
        Self { color, fish_type }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    DuplicateFish(FishId),
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFish(id) => write!(f, "fish {id} listed twice in catalogue"),
        }
    }
}

impl std::error::Error for CatalogueError {}

/// Fish id -> detail lookup. Ordered so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishCatalogue {
    details: BTreeMap<FishId, FishDetail>,
}

impl FishCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalogue from `(id, color, type)` entries.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (FishId, i32, i32)>,
    ) -> Result<Self, CatalogueError> {
        let mut catalogue = Self::new();
        for (id, color, fish_type) in entries {
            catalogue.insert(id, FishDetail::new(color, fish_type))?;
        }
        Ok(catalogue)
    }

    pub fn insert(&mut self, id: FishId, detail: FishDetail) -> Result<(), CatalogueError> {
        if self.details.contains_key(&id) {
            return Err(CatalogueError::DuplicateFish(id));
        }
        self.details.insert(id, detail);
        Ok(())
    }

    pub fn detail(&self, id: FishId) -> Option<FishDetail> {
        self.details.get(&id).copied()
    }

    pub fn contains(&self, id: FishId) -> bool {
        self.details.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FishId, FishDetail)> + '_ {
        self.details.iter().map(|(id, detail)| (*id, *detail))
    }
}
