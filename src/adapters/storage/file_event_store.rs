//! File-based Event Store Adapter
//!
//! Stores each event as a YAML document on disk, named after its id.
//! Writes go to a temporary file first and are renamed into place so a
//! crash never leaves a half-written record behind.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, ErrorCode, EventId};
use crate::ports::EventStore;

const RECORD_EXTENSION: &str = "yaml";

/// Errors raised by the file store before they reach the port boundary
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize event {0}: {1}")]
    Serialization(EventId, String),

    #[error("Failed to deserialize {path}: {reason}")]
    Deserialization { path: PathBuf, reason: String },
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        let path = match &err {
            StoreError::Io { path, .. } | StoreError::Deserialization { path, .. } => {
                Some(path.display().to_string())
            }
            StoreError::Serialization(..) => None,
        };
        let domain = DomainError::new(ErrorCode::DatabaseError, err.to_string());
        match path {
            Some(path) => domain.with_detail("path", path),
            None => domain,
        }
    }
}

/// File-based storage for events
#[derive(Debug, Clone)]
pub struct FileEventStore {
    base_path: PathBuf,
}

impl FileEventStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created lazily on first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileEventStore::new("./data/events");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Root directory of the store
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the record path for an event
    fn record_path(&self, id: &EventId) -> PathBuf {
        self.base_path.join(format!("{}.{}", id, RECORD_EXTENSION))
    }

    fn temp_path(&self, id: &EventId) -> PathBuf {
        self.base_path.join(format!(".{}.{}.tmp", id, RECORD_EXTENSION))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.base_path.clone(),
                source,
            })
    }

    async fn read_record(path: &Path) -> Result<Event, StoreError> {
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_record(path, &yaml)
    }

    fn parse_record(path: &Path, yaml: &str) -> Result<Event, StoreError> {
        serde_yaml::from_str(yaml).map_err(|e| StoreError::Deserialization {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    async fn write_record(&self, id: &EventId, event: &Event) -> Result<(), StoreError> {
        self.ensure_dir().await?;

        let yaml = serde_yaml::to_string(event)
            .map_err(|e| StoreError::Serialization(*id, e.to_string()))?;

        let temp = self.temp_path(id);
        fs::write(&temp, yaml)
            .await
            .map_err(|source| StoreError::Io {
                path: temp.clone(),
                source,
            })?;

        let target = self.record_path(id);
        fs::rename(&temp, &target)
            .await
            .map_err(|source| StoreError::Io {
                path: target,
                source,
            })
    }
}

#[async_trait]
impl EventStore for FileEventStore {
    async fn find(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let path = self.record_path(id);
        // Only a missing record means "absent"; any other failure is surfaced
        let yaml = match fs::read_to_string(&path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }.into()),
        };
        Ok(Some(Self::parse_record(&path, &yaml)?))
    }

    async fn replace(&self, id: &EventId, event: &Event) -> Result<(), DomainError> {
        self.write_record(id, event).await?;
        tracing::debug!(event_id = %id, path = %self.record_path(id).display(), "Event record written");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.base_path.clone(),
            source,
        };
        if !fs::try_exists(&self.base_path).await.map_err(io_err)? {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path).await.map_err(io_err)?;

        let mut events = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let path = entry.path();
            let is_record = path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXTENSION)
                && !path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map_or(true, |n| n.starts_with('.'));
            if is_record {
                events.push(Self::read_record(&path).await?);
            }
        }

        events.sort_by(|a, b| a.created_at().cmp(b.created_at()));
        Ok(events)
    }

    async fn remove(&self, id: &EventId) -> Result<bool, DomainError> {
        let path = self.record_path(id);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io { path, source }.into()),
        }
    }
}
