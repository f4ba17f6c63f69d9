use crate::models::{ContactReceipt, ContactRequest};
use std::time::Duration;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Accepts contact form messages. Nothing is persisted; the message is logged
/// and acknowledged after a simulated delay.
#[derive(Clone)]
pub struct ContactService {
    latency: Duration,
}

impl ContactService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub async fn submit(&self, request: &ContactRequest) -> Result<ContactReceipt, ContactError> {
        request.validate()?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let receipt = ContactReceipt {
            id: uuid::Uuid::new_v4().to_string(),
            subject: request.subject.clone(),
            received_at: chrono::Utc::now(),
        };

        tracing::info!(
            "Contact message {} from {} <{}> about {}",
            receipt.id,
            request.name.trim(),
            request.email.trim(),
            request.subject
        );
        Ok(receipt)
    }
}
