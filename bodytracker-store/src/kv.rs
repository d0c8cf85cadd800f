use std::{env, io, path::PathBuf};

use async_trait::async_trait;
use dotenv::dotenv;
use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("BODYTRACKER_DATA_DIR must be set")]
    Configuration(#[from] env::VarError),
    #[error("storage I/O failed")]
    Io(#[from] io::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Opaque persistent key-value boundary. Values are whole JSON documents;
/// writes replace the stored document for the key.
#[mockall::automock]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
}

/// File-backed store keeping one `<key>.json` document per key under a
/// single data directory.
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Opens the store at the directory named by `BODYTRACKER_DATA_DIR`.
    pub fn establish() -> Result<Self> {
        dotenv().ok();
        let directory = env::var("BODYTRACKER_DATA_DIR")?;
        Ok(Self::at(directory))
    }

    pub fn at(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No record stored under {}", key);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        tokio::fs::create_dir_all(&self.directory).await?;
        tokio::fs::write(self.path_for(key), value).await?;
        debug!("Stored record under {}", key);
        Ok(())
    }
}
