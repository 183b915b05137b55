use std::collections::HashMap;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error_classifier::DomainError;
use crate::sequence_generator::Sequence;

/// Named text resources. No locking between writers: last write wins.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Create or overwrite `name` with `text`.
    async fn write(&self, name: &str, text: &str) -> io::Result<()>;

    /// Read `name`; a missing resource is `ErrorKind::NotFound`.
    async fn read(&self, name: &str) -> io::Result<String>;
}

/// Stores each resource as a file under `root`.
#[derive(Debug, Clone)]
pub struct FileGateway {
    root: PathBuf,
}

impl FileGateway {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileGateway { root: root.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[async_trait]
impl PersistenceGateway for FileGateway {
    async fn write(&self, name: &str, text: &str) -> io::Result<()> {
        let path = self.path_for(name);
        tokio::fs::write(&path, text).await?;
        debug!(path = %path.display(), bytes = text.len(), "resource written");
        Ok(())
    }

    async fn read(&self, name: &str) -> io::Result<String> {
        let contents = tokio::fs::read_to_string(self.path_for(name)).await?;
        // lines are concatenated without a separator
        Ok(contents.lines().collect())
    }
}

/// Keeps resources in memory; used where no filesystem is wanted.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    resources: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn write(&self, name: &str, text: &str) -> io::Result<()> {
        self.resources.lock().await.insert(name.to_string(), text.to_string());
        Ok(())
    }

    async fn read(&self, name: &str) -> io::Result<String> {
        self.resources
            .lock()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "No such file or directory"))
    }
}

/// Write the text form of `sequence` to `name` and return the name.
pub async fn store_sequence(
    gateway: &dyn PersistenceGateway,
    name: &str,
    sequence: &Sequence,
) -> io::Result<String> {
    gateway.write(name, &sequence.to_string()).await?;
    info!(name, length = sequence.len(), "sequence stored");
    Ok(name.to_string())
}

/// Read back a stored resource, classifying a miss as `NotFound`.
pub async fn load_sequence(gateway: &dyn PersistenceGateway, name: &str) -> Result<String, DomainError> {
    gateway.read(name).await.map_err(|source| match source.kind() {
        // anything that stops the resource being opened counts as absent
        ErrorKind::NotFound
        | ErrorKind::PermissionDenied
        | ErrorKind::IsADirectory
        | ErrorKind::NotADirectory => DomainError::NotFound {
            name: name.to_string(),
            source,
        },
        _ => DomainError::Uncategorized(anyhow::Error::new(source).context(format!("reading {}", name))),
    })
}
