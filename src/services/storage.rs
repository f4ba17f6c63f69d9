use redis::aio::ConnectionManager;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

/// Errors that can occur with storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.map_or(false, |at| at <= now)
    }
}

/// Process-local key-value store
///
/// Expired entries are dropped when read and swept on every expiring write,
/// so abandoned sessions do not accumulate.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, MemoryEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().await;
        if entries.get(key).map_or(false, |entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        None
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        if ttl.is_some() {
            entries.retain(|_, entry| !entry.is_expired(now));
        }
        entries.insert(
            key.to_string(),
            MemoryEntry {
                value,
                expires_at: ttl.and_then(|ttl| now.checked_add(ttl)),
            },
        );
    }

    async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Redis-backed key-value store, shared across service instances
#[derive(Clone)]
pub struct RedisStore {
    // ConnectionManager needs &mut for queries
    conn: Arc<Mutex<ConnectionManager>>,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn.lock().await;
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut *conn)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<(), StorageError> {
        let mut conn = self.conn.lock().await;
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(ttl) = ttl {
            // PX rejects zero
            cmd.arg("PX").arg(ttl.as_millis().max(1) as u64);
        }
        let _: () = cmd.query_async(&mut *conn).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.conn.lock().await;
        let _: () = redis::cmd("DEL")
            .arg(key)
            .query_async(&mut *conn)
            .await?;
        Ok(())
    }
}

/// Key-value repository injected into the account services
///
/// Values are stored as JSON strings. Load-on-read, save-on-mutation; there
/// is no transaction across a read and the following write.
#[derive(Clone)]
pub enum Storage {
    Memory(MemoryStore),
    Redis(RedisStore),
}

impl Storage {
    pub fn memory() -> Self {
        Storage::Memory(MemoryStore::new())
    }

    pub async fn redis(redis_url: &str) -> Result<Self, StorageError> {
        Ok(Storage::Redis(RedisStore::connect(redis_url).await?))
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Storage::Memory(_) => "memory",
            Storage::Redis(_) => "redis",
        }
    }

    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Storage::Memory(store) => Ok(store.get(key).await),
            Storage::Redis(store) => store.get(key).await,
        }
    }

    pub async fn set_raw(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.write_raw(key, value, None).await
    }

    async fn write_raw(
        &self,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> Result<(), StorageError> {
        match self {
            Storage::Memory(store) => {
                store.set(key, value, ttl).await;
                Ok(())
            }
            Storage::Redis(store) => store.set(key, value, ttl).await,
        }
    }

    /// Load and decode a JSON value; `None` when the key is absent
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        T: DeserializeOwned,
    {
        match self.get_raw(key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => {
                tracing::trace!("Storage miss: {}", key);
                Ok(None)
            }
        }
    }

    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(value)?;
        self.write_raw(key, json, None).await?;
        tracing::trace!("Storage set: {}", key);
        Ok(())
    }

    /// Store a JSON value that disappears after `ttl`
    pub async fn set_with_ttl<T>(&self, key: &str, value: &T, ttl: Duration) -> Result<(), StorageError>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(value)?;
        self.write_raw(key, json, Some(ttl)).await?;
        tracing::trace!("Storage set: {} (ttl {:?})", key, ttl);
        Ok(())
    }

    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Storage::Memory(store) => {
                store.remove(key).await;
                Ok(())
            }
            Storage::Redis(store) => store.remove(key).await,
        }
    }
}

/// Storage key builder
pub struct StorageKey;

impl StorageKey {
    /// Build a storage key for a login session
    pub fn session(session_id: &str) -> String {
        format!("session:{}", session_id)
    }

    /// Build a storage key for the account registered under an email
    pub fn account(email: &str) -> String {
        format!("account:{}", email)
    }

    /// Build a storage key for a user's favorite pet ids
    pub fn favorites(user_id: &str) -> String {
        format!("favorites:{}", user_id)
    }

    /// Build a storage key for a user's adoption applications
    pub fn adoptions(user_id: &str) -> String {
        format!("adoptions:{}", user_id)
    }
}
