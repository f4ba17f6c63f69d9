// Query layer tests over the bundled catalog

use pet_adoption::core::{filter_pets, search_pets, Catalog};
use pet_adoption::models::{AgeRange, FilterCriteria, Gender, PetType, Size};

fn names<'a>(pets: &[&'a pet_adoption::Pet]) -> Vec<&'a str> {
    pets.iter().map(|p| p.name.as_str()).collect()
}

fn is_subsequence(sub: &[&pet_adoption::Pet], all: &[pet_adoption::Pet]) -> bool {
    let mut ids = all.iter().map(|p| p.id.as_str());
    sub.iter().all(|pet| ids.any(|id| id == pet.id))
}

#[test]
fn test_filter_dogs_in_catalog_order() {
    let catalog = Catalog::sample().unwrap();
    let criteria = FilterCriteria {
        pet_type: Some(PetType::Dog),
        ..Default::default()
    };

    let result = catalog.filter(&criteria);
    assert_eq!(names(&result), vec!["Max", "Charlie", "Buddy", "Daisy", "Molly"]);
}

#[test]
fn test_filter_age_range_inclusive() {
    let catalog = Catalog::sample().unwrap();
    let criteria = FilterCriteria {
        age: Some(AgeRange { min: Some(2), max: Some(3) }),
        ..Default::default()
    };

    let result = catalog.filter(&criteria);
    assert_eq!(names(&result), vec!["Max", "Luna", "Coco", "Spike", "Molly"]);
    assert!(result.iter().all(|p| p.age == 2 || p.age == 3));
}

#[test]
fn test_filter_open_ended_age() {
    let catalog = Catalog::sample().unwrap();

    let seniors = catalog.filter(&FilterCriteria {
        age: Some(AgeRange { min: Some(6), max: None }),
        ..Default::default()
    });
    assert_eq!(names(&seniors), vec!["Daisy", "Whiskers"]);

    let youngest = catalog.filter(&FilterCriteria {
        age: Some(AgeRange { min: None, max: Some(1) }),
        ..Default::default()
    });
    assert_eq!(names(&youngest), vec!["Charlie", "Oliver", "Rocky"]);
}

#[test]
fn test_filter_combines_with_and() {
    let catalog = Catalog::sample().unwrap();
    let criteria = FilterCriteria {
        pet_type: Some(PetType::Dog),
        gender: Some(Gender::Female),
        size: Some(Size::Medium),
        ..Default::default()
    };

    assert_eq!(names(&catalog.filter(&criteria)), vec!["Molly"]);
}

#[test]
fn test_filter_booleans() {
    let catalog = Catalog::sample().unwrap();

    let unvaccinated = catalog.filter(&FilterCriteria {
        vaccinated: Some(false),
        ..Default::default()
    });
    assert_eq!(names(&unvaccinated), vec!["Spike"]);

    let not_neutered = catalog.filter(&FilterCriteria {
        neutered: Some(false),
        ..Default::default()
    });
    assert_eq!(names(&not_neutered), vec!["Charlie", "Coco", "Oliver", "Rocky", "Spike"]);
}

#[test]
fn test_filter_location_case_insensitive() {
    let catalog = Catalog::sample().unwrap();
    let criteria = FilterCriteria {
        location: Some("KERELA".to_string()),
        ..Default::default()
    };

    assert_eq!(names(&catalog.filter(&criteria)), vec!["Rocky"]);
}

#[test]
fn test_empty_criteria_return_everything() {
    let catalog = Catalog::sample().unwrap();
    assert_eq!(catalog.filter(&FilterCriteria::default()).len(), catalog.len());
}

#[test]
fn test_search_beagle_any_case() {
    let catalog = Catalog::sample().unwrap();

    for query in ["beagle", "BEAGLE", "BeAgLe"] {
        assert_eq!(names(&catalog.search(query)), vec!["Charlie"]);
    }
}

#[test]
fn test_search_results_are_subsequences() {
    let catalog = Catalog::sample().unwrap();

    for query in ["a", "the", "trained", "cat", "x", "litter", "zzz"] {
        let result = search_pets(catalog.all(), query);
        assert!(is_subsequence(&result, catalog.all()), "query {:?}", query);
    }
}

#[test]
fn test_filter_results_are_subsequences() {
    let catalog = Catalog::sample().unwrap();

    for pet_type in PetType::ALL {
        let criteria = FilterCriteria {
            pet_type: Some(pet_type),
            ..Default::default()
        };
        let result = filter_pets(catalog.all(), &criteria);
        assert!(is_subsequence(&result, catalog.all()));
        assert_eq!(result, catalog.by_type(pet_type));
    }
}

#[test]
fn test_lookup_by_type() {
    let catalog = Catalog::sample().unwrap();

    assert_eq!(names(&catalog.by_type(PetType::Bird)), vec!["Coco"]);
    assert_eq!(names(&catalog.by_type(PetType::SmallAnimal)), vec!["Rocky"]);
    assert_eq!(names(&catalog.by_type(PetType::Cat)), vec!["Luna", "Bella", "Oliver", "Whiskers"]);
}

#[test]
fn test_lookup_missing_id() {
    let catalog = Catalog::sample().unwrap();
    assert!(catalog.get("does-not-exist").is_none());
    assert_eq!(catalog.get("12").map(|p| p.name.as_str()), Some("Whiskers"));
}
