use crate::core::{catalog::Catalog, filters::matches_criteria, search::matches_text};
use crate::models::{FilterCriteria, Pet};
use serde::{Deserialize, Serialize};

/// How free-text search and structured filters combine when both are active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CombineMode {
    /// A pet must pass both the search and the filter
    #[default]
    Intersect,
    /// Any set filter key replaces the search result with the filter result
    /// over the whole catalog. Kept for clients built against the old
    /// browsing page.
    FilterOverridesSearch,
}

/// Result of a browse request
#[derive(Debug)]
pub struct BrowseResult<'a> {
    pub pets: Vec<&'a Pet>,
    pub total_pets: usize,
    pub search_applied: bool,
    pub filter_applied: bool,
}

/// Combines search and filtering over a catalog
///
/// # Stages
/// 1. Free-text search, skipped when the query is blank
/// 2. Structured filter, skipped when no criteria are set
/// 3. Combination according to [`CombineMode`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Browser {
    mode: CombineMode,
}

impl Browser {
    pub fn new(mode: CombineMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CombineMode {
        self.mode
    }

    /// Derive the visible subset of the catalog for a query and criteria
    pub fn browse<'a>(
        &self,
        catalog: &'a Catalog,
        query: &str,
        criteria: &FilterCriteria,
    ) -> BrowseResult<'a> {
        let total_pets = catalog.len();
        let query = query.trim();
        let search_active = !query.is_empty();
        let filter_active = !criteria.is_empty();

        let (pets, search_applied) = match self.mode {
            CombineMode::Intersect => {
                let lowercase_query = query.to_lowercase();
                let pets: Vec<&Pet> = catalog
                    .all()
                    .iter()
                    .filter(|pet| !search_active || matches_text(pet, &lowercase_query))
                    .filter(|pet| !filter_active || matches_criteria(pet, criteria))
                    .collect();
                (pets, search_active)
            }
            CombineMode::FilterOverridesSearch => {
                if filter_active {
                    if search_active {
                        tracing::debug!("Filter active, discarding search for {:?}", query);
                    }
                    (catalog.filter(criteria), false)
                } else if search_active {
                    (catalog.search(query), true)
                } else {
                    (catalog.all().iter().collect(), false)
                }
            }
        };

        BrowseResult {
            pets,
            total_pets,
            search_applied,
            filter_applied: filter_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PetType;

    fn names<'a>(result: &BrowseResult<'a>) -> Vec<&'a str> {
        result.pets.iter().map(|p| p.name.as_str()).collect()
    }

    fn cats() -> FilterCriteria {
        FilterCriteria {
            pet_type: Some(PetType::Cat),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_query_is_unfiltered() {
        let catalog = Catalog::sample().unwrap();
        let browser = Browser::default();

        let result = browser.browse(&catalog, "   ", &FilterCriteria::default());
        assert_eq!(result.pets.len(), 12);
        assert!(!result.search_applied);
        assert!(!result.filter_applied);
    }

    #[test]
    fn test_intersect_requires_both() {
        let catalog = Catalog::sample().unwrap();
        let browser = Browser::new(CombineMode::Intersect);

        let result = browser.browse(&catalog, "golden", &cats());
        assert!(result.pets.is_empty());

        let result = browser.browse(&catalog, "litter", &cats());
        assert_eq!(names(&result), vec!["Luna", "Oliver", "Whiskers"]);
        assert!(result.search_applied && result.filter_applied);
    }

    #[test]
    fn test_filter_overrides_search() {
        let catalog = Catalog::sample().unwrap();
        let browser = Browser::new(CombineMode::FilterOverridesSearch);

        let result = browser.browse(&catalog, "golden", &cats());
        assert_eq!(names(&result), vec!["Luna", "Bella", "Oliver", "Whiskers"]);
        assert!(!result.search_applied);
        assert!(result.filter_applied);

        let result = browser.browse(&catalog, "golden", &FilterCriteria::default());
        assert_eq!(names(&result), vec!["Max"]);
    }

    #[test]
    fn test_combine_mode_deserialize() {
        let mode: CombineMode = serde_json::from_str(r#""filter-overrides-search""#).unwrap();
        assert_eq!(mode, CombineMode::FilterOverridesSearch);
        assert_eq!(CombineMode::default(), CombineMode::Intersect);
    }
}
