use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::OnceLock;
use validator::{Validate, ValidationError};
use crate::models::domain::{AgeRange, FilterCriteria, Gender, PetType, Size};

/// Query string accepted by `GET /pets`
///
/// Flat on purpose: query strings cannot carry the nested `age` object, so
/// the bounds arrive as `minAge`/`maxAge` and are folded back in
/// [`BrowseParams::criteria`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(rename = "type", default)]
    pub pet_type: Option<PetType>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(rename = "minAge", alias = "min_age", default)]
    pub min_age: Option<u32>,
    #[serde(rename = "maxAge", alias = "max_age", default)]
    pub max_age: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub vaccinated: Option<bool>,
    #[serde(default)]
    pub neutered: Option<bool>,
}

impl BrowseParams {
    pub fn criteria(&self) -> FilterCriteria {
        let age = match (self.min_age, self.max_age) {
            (None, None) => None,
            (min, max) => Some(AgeRange { min, max }),
        };

        FilterCriteria {
            pet_type: self.pet_type,
            gender: self.gender,
            size: self.size,
            age,
            location: self.location.clone(),
            vaccinated: self.vaccinated,
            neutered: self.neutered,
        }
    }

    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

/// Query string accepted by `GET /pets/recent`
#[derive(Debug, Clone, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}

/// Request to create a mock account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    pub password: String,
}

/// Request to start a session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    pub password: String,
}

pub const EXPERIENCE_OPTIONS: &[&str] = &["first-time", "previous", "current", "expert"];
pub const HOUSING_OPTIONS: &[&str] = &["house", "house-no-yard", "apartment", "condo", "other"];
pub const CONTACT_SUBJECTS: &[&str] = &["adoption", "volunteer", "donate", "support", "other"];

/// Adoption application form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdoptionRequest {
    #[validate(custom(function = "not_blank"))]
    pub reason: String,
    #[validate(custom(function = "experience_option"))]
    pub experience: String,
    #[validate(custom(function = "housing_option"))]
    pub housing: String,
}

/// Contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "email_shape"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(custom(function = "contact_subject"))]
    pub subject: String,
    #[validate(custom(function = "contact_message"))]
    pub message: String,
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "must not be blank"));
    }
    Ok(())
}

fn one_of(value: &str, options: &[&str]) -> bool {
    options.contains(&value)
}

fn experience_option(value: &str) -> Result<(), ValidationError> {
    if !one_of(value, EXPERIENCE_OPTIONS) {
        return Err(invalid("experience", "please select your pet experience"));
    }
    Ok(())
}

fn housing_option(value: &str) -> Result<(), ValidationError> {
    if !one_of(value, HOUSING_OPTIONS) {
        return Err(invalid("housing", "please select your housing situation"));
    }
    Ok(())
}

fn contact_subject(value: &str) -> Result<(), ValidationError> {
    if !one_of(value, CONTACT_SUBJECTS) {
        return Err(invalid("subject", "please select a subject"));
    }
    Ok(())
}

/// Unanchored: the value only has to contain an `x@y.z` run of
/// non-whitespace characters somewhere.
fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

fn email_shape(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "email is required"));
    }
    if !email_regex().is_match(value) {
        return Err(invalid("email", "email is invalid"));
    }
    Ok(())
}

fn contact_message(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("required", "message is required"));
    }
    if trimmed.chars().count() < 10 {
        return Err(invalid("length", "message must be at least 10 characters"));
    }
    Ok(())
}
