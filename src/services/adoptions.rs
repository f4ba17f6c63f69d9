use crate::models::{Adoption, AdoptionRequest, AdoptionStatus, Pet};
use crate::services::storage::{Storage, StorageError, StorageKey};
use std::time::Duration;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Errors that can occur when submitting an adoption application
#[derive(Debug, Error)]
pub enum AdoptionError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Records adoption applications per user
///
/// There is no review workflow: every application is stored as pending after
/// a simulated processing delay.
#[derive(Clone)]
pub struct AdoptionService {
    storage: Storage,
    latency: Duration,
}

impl AdoptionService {
    pub fn new(storage: Storage, latency: Duration) -> Self {
        Self { storage, latency }
    }

    pub async fn submit(
        &self,
        user_id: &str,
        pet: &Pet,
        application: &AdoptionRequest,
    ) -> Result<Adoption, AdoptionError> {
        application.validate()?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let adoption = Adoption {
            id: uuid::Uuid::new_v4().to_string(),
            pet_id: pet.id.clone(),
            pet_name: pet.name.clone(),
            status: AdoptionStatus::Pending,
            date: chrono::Utc::now(),
            reason: application.reason.trim().to_string(),
            experience: application.experience.clone(),
            housing: application.housing.clone(),
        };

        let key = StorageKey::adoptions(user_id);
        let mut adoptions = self.list(user_id).await?;
        adoptions.push(adoption.clone());
        self.storage.set(&key, &adoptions).await?;

        tracing::info!(
            "Adoption application {} for pet {} by user {}",
            adoption.id,
            pet.id,
            user_id
        );
        Ok(adoption)
    }

    /// Applications in submission order
    pub async fn list(&self, user_id: &str) -> Result<Vec<Adoption>, StorageError> {
        Ok(self
            .storage
            .get::<Vec<Adoption>>(&StorageKey::adoptions(user_id))
            .await?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;

    fn application() -> AdoptionRequest {
        AdoptionRequest {
            reason: "  We have a big garden  ".to_string(),
            experience: "first-time".to_string(),
            housing: "house".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_appends_pending() {
        let catalog = Catalog::sample().unwrap();
        let service = AdoptionService::new(Storage::memory(), Duration::ZERO);
        let luna = catalog.get("2").unwrap();
        let coco = catalog.get("6").unwrap();

        let first = service.submit("u1", luna, &application()).await.unwrap();
        service.submit("u1", coco, &application()).await.unwrap();

        assert_eq!(first.status, AdoptionStatus::Pending);
        assert_eq!(first.pet_name, "Luna");
        assert_eq!(first.reason, "We have a big garden");

        let names: Vec<String> = service
            .list("u1")
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.pet_name)
            .collect();
        assert_eq!(names, vec!["Luna", "Coco"]);
    }

    #[tokio::test]
    async fn test_invalid_application_not_stored() {
        let catalog = Catalog::sample().unwrap();
        let service = AdoptionService::new(Storage::memory(), Duration::ZERO);
        let bad = AdoptionRequest {
            experience: String::new(),
            ..application()
        };

        let result = service.submit("u1", catalog.get("1").unwrap(), &bad).await;
        assert!(matches!(result, Err(AdoptionError::Validation(_))));
        assert!(service.list("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_waits_for_latency() {
        let catalog = Catalog::sample().unwrap();
        let service = AdoptionService::new(Storage::memory(), Duration::from_millis(30));

        let started = std::time::Instant::now();
        service
            .submit("u1", catalog.get("1").unwrap(), &application())
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
