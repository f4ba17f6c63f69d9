use crate::models::Pet;

/// Check whether an already lower-cased query occurs in any searchable
/// text field of the pet
#[inline]
pub fn matches_text(pet: &Pet, lowercase_query: &str) -> bool {
    [&pet.name, &pet.breed, &pet.location, &pet.description]
        .iter()
        .any(|field| field.to_lowercase().contains(lowercase_query))
}

/// Free-text search over name, breed, location and description
///
/// Matching is a case-insensitive substring test. Results keep the catalog
/// order; nothing is re-ranked. The query is used as given, so callers that
/// want "blank means everything" must check for that before calling.
pub fn search_pets<'a>(pets: &'a [Pet], query: &str) -> Vec<&'a Pet> {
    let lowercase_query = query.to_lowercase();

    pets.iter()
        .filter(|pet| matches_text(pet, &lowercase_query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, PetType, Size};
    use chrono::Utc;

    fn create_test_pet(id: &str, name: &str, breed: &str, location: &str) -> Pet {
        Pet {
            id: id.to_string(),
            name: name.to_string(),
            pet_type: PetType::Dog,
            breed: breed.to_string(),
            age: 2,
            gender: Gender::Male,
            size: Size::Medium,
            description: "Loves long walks".to_string(),
            image: String::new(),
            location: location.to_string(),
            vaccinated: true,
            neutered: false,
            adoption_fee: 100.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let pets = vec![
            create_test_pet("1", "Rex", "Beagle", "Pune"),
            create_test_pet("2", "Tom", "Poodle", "Goa"),
        ];

        let result = search_pets(&pets, "bEaGlE");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_search_matches_description_and_location() {
        let pets = vec![
            create_test_pet("1", "Rex", "Beagle", "Pune"),
            create_test_pet("2", "Tom", "Poodle", "Goa"),
        ];

        assert_eq!(search_pets(&pets, "goa").len(), 1);
        assert_eq!(search_pets(&pets, "long walks").len(), 2);
    }

    #[test]
    fn test_search_keeps_order() {
        let pets = vec![
            create_test_pet("1", "Zed", "Mix", "A"),
            create_test_pet("2", "Amy", "Mix", "B"),
            create_test_pet("3", "Bob", "Mix", "C"),
        ];

        let ids: Vec<&str> = search_pets(&pets, "mix").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let pets = vec![create_test_pet("1", "Rex", "Beagle", "Pune")];
        assert!(search_pets(&pets, "hamster").is_empty());
    }
}
