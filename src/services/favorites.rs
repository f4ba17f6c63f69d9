use crate::core::Catalog;
use crate::models::Pet;
use crate::services::storage::{Storage, StorageError, StorageKey};

/// Per-user list of favorite pet ids, kept in insertion order
#[derive(Clone)]
pub struct FavoritesService {
    storage: Storage,
}

impl FavoritesService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<String>, StorageError> {
        Ok(self
            .storage
            .get::<Vec<String>>(&StorageKey::favorites(user_id))
            .await?
            .unwrap_or_default())
    }

    /// Add the pet if absent, remove it if present
    ///
    /// Returns whether the pet is a favorite afterwards.
    pub async fn toggle(&self, user_id: &str, pet_id: &str) -> Result<bool, StorageError> {
        let mut favorites = self.list(user_id).await?;

        let favorited = match favorites.iter().position(|id| id == pet_id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(pet_id.to_string());
                true
            }
        };

        self.storage
            .set(&StorageKey::favorites(user_id), &favorites)
            .await?;
        tracing::debug!("User {} favorite {} -> {}", user_id, pet_id, favorited);
        Ok(favorited)
    }

    pub async fn remove(&self, user_id: &str, pet_id: &str) -> Result<(), StorageError> {
        let mut favorites = self.list(user_id).await?;
        let before = favorites.len();
        favorites.retain(|id| id != pet_id);

        if favorites.len() != before {
            self.storage
                .set(&StorageKey::favorites(user_id), &favorites)
                .await?;
        }
        Ok(())
    }
}

/// Resolve favorite ids through the catalog, skipping ids that no longer exist
pub fn resolve_favorites<'a>(catalog: &'a Catalog, pet_ids: &[String]) -> Vec<&'a Pet> {
    pet_ids.iter().filter_map(|id| catalog.get(id)).collect()
}
