use async_trait::async_trait;
use log::{debug, info};

use bodytracker_model::{history::History, measurement::BodyFatResult, profile::UserProfile};

use crate::kv::{self, KeyValueStore};

pub const PROFILE_KEY: &str = "userData";
pub const HISTORY_KEY: &str = "bodyFatResults";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("storage backend failed")]
    Storage(#[from] kv::Error),
    #[error("stored record is not valid JSON")]
    Encoding(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Persistence operations for the profile record and the body-fat history.
///
/// Every failure, including read failures of the backing store, surfaces
/// to the caller; nothing is logged and swallowed.
#[mockall::automock]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn load_profile(&self) -> Result<Option<UserProfile>>;
    async fn save_profile(&self, profile: &UserProfile) -> Result<()>;
    async fn load_history(&self) -> Result<History>;
    /// Appends a reading, evicting the oldest beyond capacity, persists the
    /// sequence, and returns it.
    async fn append_history(&self, result: BodyFatResult) -> Result<History>;
}

pub struct ProfileRepositoryImpl {
    store: Box<dyn KeyValueStore>,
}

impl ProfileRepositoryImpl {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

pub fn create(store: Box<dyn KeyValueStore>) -> impl ProfileRepository {
    ProfileRepositoryImpl::new(store)
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn load_profile(&self) -> Result<Option<UserProfile>> {
        let Some(raw) = self.store.get(PROFILE_KEY).await? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.store
            .set(PROFILE_KEY, serde_json::to_string(profile)?)
            .await?;
        info!("Profile record saved");
        Ok(())
    }

    async fn load_history(&self) -> Result<History> {
        let Some(raw) = self.store.get(HISTORY_KEY).await? else {
            return Ok(History::new());
        };
        Ok(serde_json::from_str(&raw)?)
    }

    async fn append_history(&self, result: BodyFatResult) -> Result<History> {
        let mut history = self.load_history().await?;
        history.push(result);
        self.store
            .set(HISTORY_KEY, serde_json::to_string(&history)?)
            .await?;
        debug!("History now holds {} readings", history.len());
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use chrono::NaiveDate;
    use mockall::predicate::eq;

    use crate::kv::MockKeyValueStore;

    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "34".to_string(),
            "Polish".to_string(),
            "61.5".to_string(),
            "168".to_string(),
            "12 Main St".to_string(),
        )
    }

    fn reading(day: u32, percentage: f64) -> BodyFatResult {
        BodyFatResult::new(
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            percentage,
        )
    }

    #[tokio::test]
    async fn load_profile_returns_none_when_record_absent() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .with(eq(PROFILE_KEY))
            .returning(|_| Ok(None));

        let repository = ProfileRepositoryImpl::new(Box::new(store));
        assert_eq!(repository.load_profile().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_profile_writes_wire_compatible_record() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .withf(|key, value| {
                let parsed: serde_json::Value = serde_json::from_str(value).unwrap();
                key == PROFILE_KEY
                    && parsed["name"] == "Jane"
                    && parsed["email"] == "jane@example.com"
                    && parsed["weight"] == "61.5"
            })
            .returning(|_, _| Ok(()));

        let repository = ProfileRepositoryImpl::new(Box::new(store));
        repository.save_profile(&profile()).await.unwrap();
    }

    #[tokio::test]
    async fn profile_round_trips_through_stored_json() {
        let raw = serde_json::to_string(&profile()).unwrap();
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .with(eq(PROFILE_KEY))
            .returning(move |_| Ok(Some(raw.clone())));

        let repository = ProfileRepositoryImpl::new(Box::new(store));
        assert_eq!(repository.load_profile().await.unwrap(), Some(profile()));
    }

    #[tokio::test]
    async fn append_history_drops_oldest_beyond_capacity() {
        let stored: Vec<_> = (1..=8).map(|day| reading(day, day as f64)).collect();
        let raw = serde_json::to_string(&stored).unwrap();

        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .with(eq(HISTORY_KEY))
            .returning(move |_| Ok(Some(raw.clone())));
        store
            .expect_set()
            .withf(|key, value| {
                let entries: Vec<BodyFatResult> = serde_json::from_str(value).unwrap();
                key == HISTORY_KEY
                    && entries.len() == 8
                    && entries.first() == Some(&reading(2, 2.0))
                    && entries.last() == Some(&reading(9, 9.0))
            })
            .returning(|_, _| Ok(()));

        let repository = ProfileRepositoryImpl::new(Box::new(store));
        let history = repository.append_history(reading(9, 9.0)).await.unwrap();

        assert_eq!(history.len(), 8);
        assert_eq!(history.entries().first(), Some(&reading(2, 2.0)));
        assert_eq!(history.latest(), Some(&reading(9, 9.0)));
    }

    #[tokio::test]
    async fn history_serializes_with_original_field_names() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .with(eq(HISTORY_KEY))
            .returning(|_| Ok(None));
        store
            .expect_set()
            .withf(|_, value| {
                let parsed: serde_json::Value = serde_json::from_str(value).unwrap();
                parsed[0]["date"] == "2024-05-03" && parsed[0]["bodyFatPercentage"] == 21.5
            })
            .returning(|_, _| Ok(()));

        let repository = ProfileRepositoryImpl::new(Box::new(store));
        repository.append_history(reading(3, 21.5)).await.unwrap();
    }

    #[tokio::test]
    async fn read_failure_is_not_swallowed() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| {
            Err(kv::Error::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "device unavailable",
            )))
        });

        let repository = ProfileRepositoryImpl::new(Box::new(store));
        assert!(matches!(
            repository.load_history().await,
            Err(Error::Storage(_))
        ));
    }
}
