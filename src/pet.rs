//! Pet records supplied by the host page.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::constants::MAX_FEATURED_PETS;
use crate::error::{LoadError, LoadResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetSummary {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub breed: String,
    #[serde(default)]
    pub species: Option<String>,
    /// Adoption status, absent means available
    #[serde(default)]
    pub status: Option<String>,
}

impl PetSummary {
    pub fn new(id: u32, name: impl Into<String>, age: u32, breed: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            breed: breed.into(),
            species: None,
            status: None,
        }
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn is_available(&self) -> bool {
        self.status
            .as_deref()
            .is_none_or(|status| status.eq_ignore_ascii_case("available"))
    }
}

/// Reads a JSON array of pets.
pub fn load_pets(path: &Path) -> LoadResult<Vec<PetSummary>> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let pets: Vec<PetSummary> = serde_json::from_str(&text).map_err(|e| LoadError::json(path, e))?;
    debug!(count = pets.len(), path = %path.display(), "loaded pets");
    Ok(pets)
}

/// Number of pets still waiting for a home.
pub fn available_count(pets: &[PetSummary]) -> usize {
    pets.iter().filter(|p| p.is_available()).count()
}

/// Keeps the available pets, in order, up to the hero carousel's capacity.
pub fn featured(pets: Vec<PetSummary>) -> Vec<PetSummary> {
    let total = pets.len();
    let featured: Vec<PetSummary> = pets
        .into_iter()
        .filter(PetSummary::is_available)
        .take(MAX_FEATURED_PETS)
        .collect();
    if featured.is_empty() && total > 0 {
        warn!(total, "no available pets to feature");
    }
    featured
}

/// Pets shown when no data file is given.
pub fn sample_pets() -> Vec<PetSummary> {
    vec![
        PetSummary::new(1, "Jarvis", 3, "German Shepherd").with_species("Dog"),
        PetSummary::new(2, "Aria", 2, "Siamese").with_species("Cat"),
        PetSummary::new(3, "Thor", 4, "Golden Retriever").with_species("Dog"),
        PetSummary::new(4, "Luna", 1, "Russian Blue").with_species("Cat"),
        PetSummary::new(5, "Atlas", 5, "Husky").with_species("Dog"),
        PetSummary::new(6, "Nova", 3, "Maine Coon").with_species("Cat"),
    ]
}
