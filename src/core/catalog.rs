use crate::core::{filters::filter_pets, search::search_pets};
use crate::models::{FilterCriteria, Pet, PetType};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Catalog bundled with the binary
const SAMPLE_CATALOG: &str = include_str!("../../data/pets.json");

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Duplicate pet id: {0}")]
    DuplicateId(String),
}

/// Read-only, ordered collection of adoptable pets
///
/// Loaded once at startup and never mutated afterwards. All query methods
/// borrow from the catalog and return pets in their original order unless
/// stated otherwise.
#[derive(Debug, Clone)]
pub struct Catalog {
    pets: Vec<Pet>,
}

impl Catalog {
    pub fn new(pets: Vec<Pet>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(pets.len());
        for pet in &pets {
            if !seen.insert(pet.id.as_str()) {
                return Err(CatalogError::DuplicateId(pet.id.clone()));
            }
        }

        Ok(Self { pets })
    }

    /// The twelve-pet catalog shipped with the service
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let pets: Vec<Pet> = serde_json::from_str(json)?;
        Self::new(pets)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Load from a configured file, or fall back to the bundled sample
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path);
                Self::from_path(path)
            }
            None => Self::sample(),
        }
    }

    pub fn all(&self) -> &[Pet] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Lookup by id; `None` when no pet has that id
    pub fn get(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    pub fn by_type(&self, pet_type: PetType) -> Vec<&Pet> {
        self.pets
            .iter()
            .filter(|pet| pet.pet_type == pet_type)
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<&Pet> {
        search_pets(&self.pets, query)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Pet> {
        filter_pets(&self.pets, criteria)
    }

    /// Most recently listed pets, newest first
    pub fn recent(&self, limit: usize) -> Vec<&Pet> {
        let mut pets: Vec<&Pet> = self.pets.iter().collect();
        // Stable sort keeps catalog order between equal timestamps
        pets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        pets.truncate(limit);
        pets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.all()[0].name, "Max");
    }

    #[test]
    fn test_get_missing_is_none() {
        let catalog = Catalog::sample().unwrap();
        assert!(catalog.get("999").is_none());
        assert!(catalog.get("").is_none());
        assert_eq!(catalog.get("3").map(|p| p.name.as_str()), Some("Charlie"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = Catalog::sample().unwrap();
        let mut pets = catalog.all().to_vec();
        pets.push(pets[0].clone());

        assert!(matches!(Catalog::new(pets), Err(CatalogError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Catalog::from_json(r#"[{"id": "1"}]"#),
            Err(CatalogError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_recent_newest_first() {
        let catalog = Catalog::sample().unwrap();
        let names: Vec<&str> = catalog.recent(3).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Oliver", "Charlie", "Molly"]);
        assert_eq!(catalog.recent(100).len(), 12);
        assert!(catalog.recent(0).is_empty());
    }
}
