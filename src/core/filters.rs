use crate::models::{FilterCriteria, Pet};

/// Check if a pet satisfies every constraint present in the criteria
///
/// Fields left unset in the criteria never exclude a pet. An empty location
/// string is treated the same as an unset one.
#[inline]
pub fn matches_criteria(pet: &Pet, criteria: &FilterCriteria) -> bool {
    if let Some(pet_type) = criteria.pet_type {
        if pet.pet_type != pet_type {
            return false;
        }
    }

    if let Some(gender) = criteria.gender {
        if pet.gender != gender {
            return false;
        }
    }

    if let Some(size) = criteria.size {
        if pet.size != size {
            return false;
        }
    }

    // Both bounds inclusive
    if let Some(age) = &criteria.age {
        if !age.contains(pet.age) {
            return false;
        }
    }

    if let Some(location) = criteria.location.as_deref().filter(|l| !l.is_empty()) {
        if !pet.location.to_lowercase().contains(&location.to_lowercase()) {
            return false;
        }
    }

    if let Some(vaccinated) = criteria.vaccinated {
        if pet.vaccinated != vaccinated {
            return false;
        }
    }

    if let Some(neutered) = criteria.neutered {
        if pet.neutered != neutered {
            return false;
        }
    }

    true
}

/// Structured filtering: the ordered subsequence of pets matching the criteria
pub fn filter_pets<'a>(pets: &'a [Pet], criteria: &FilterCriteria) -> Vec<&'a Pet> {
    pets.iter()
        .filter(|pet| matches_criteria(pet, criteria))
        .collect()
}
