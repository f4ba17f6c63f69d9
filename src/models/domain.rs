use serde::{Deserialize, Serialize};
use std::fmt;

/// Adoptable pet record as listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub breed: String,
    pub age: u32,
    pub gender: Gender,
    pub size: Size,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub location: String,
    pub vaccinated: bool,
    pub neutered: bool,
    #[serde(rename = "adoptionFee")]
    pub adoption_fee: f64,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    SmallAnimal,
    Reptile,
}

impl PetType {
    pub const ALL: [PetType; 5] = [
        PetType::Dog,
        PetType::Cat,
        PetType::Bird,
        PetType::SmallAnimal,
        PetType::Reptile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Bird => "bird",
            PetType::SmallAnimal => "small-animal",
            PetType::Reptile => "reptile",
        }
    }

    /// Parse a path or query value, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// Inclusive age bounds in years; either side may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl AgeRange {
    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        self.min.map_or(true, |min| age >= min) && self.max.map_or(true, |max| age <= max)
    }
}

/// Structured filter over catalog fields
///
/// Every field is optional. An unset field places no constraint on the
/// corresponding pet attribute; in particular `vaccinated: None` is not the
/// same as `vaccinated: Some(false)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub pet_type: Option<PetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccinated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutered: Option<bool>,
}

impl FilterCriteria {
    /// True when no filter key is set at all
    pub fn is_empty(&self) -> bool {
        self.pet_type.is_none()
            && self.gender.is_none()
            && self.size.is_none()
            && self.age.is_none()
            && self.location.is_none()
            && self.vaccinated.is_none()
            && self.neutered.is_none()
    }
}

/// Mock account created on login or registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Submitted adoption application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adoption {
    pub id: String,
    #[serde(rename = "petId")]
    pub pet_id: String,
    #[serde(rename = "petName")]
    pub pet_name: String,
    pub status: AdoptionStatus,
    pub date: chrono::DateTime<chrono::Utc>,
    pub reason: String,
    pub experience: String,
    pub housing: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    Pending,
    Approved,
    Rejected,
}

/// Acknowledgement returned for a contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: String,
    pub subject: String,
    #[serde(rename = "receivedAt")]
    pub received_at: chrono::DateTime<chrono::Utc>,
}
