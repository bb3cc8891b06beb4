use std::{io::ErrorKind, path::PathBuf};

use crate::{
    errors::StoreError,
    types::{ExtremeTracksResponse, FeatureExtremes},
};

/// Feature name to highest/lowest track lookup, kept as one JSON document.
///
/// The store is opened once at process start and handed to whoever needs it;
/// changes reach the disk on [`ExtremesStore::persist`] or
/// [`ExtremesStore::close`]. A store opened with
/// [`ExtremesStore::open_read_only`] never writes, so a long-lived reader
/// cannot overwrite what another process stored in the meantime.
#[derive(Debug, Clone)]
pub struct ExtremesStore {
    path: PathBuf,
    extremes: ExtremeTracksResponse,
    read_only: bool,
}

impl ExtremesStore {
    /// Opens the document at `path`. A missing file yields an empty store.
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        Self::load(path, false).await
    }

    /// Opens the document for lookups only; `persist` and `close` do not write.
    pub async fn open_read_only(path: PathBuf) -> Result<Self, StoreError> {
        Self::load(path, true).await
    }

    async fn load(path: PathBuf, read_only: bool) -> Result<Self, StoreError> {
        let extremes = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => ExtremeTracksResponse::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        log::debug!(
            "Opened extremes store {} with {} features",
            path.display(),
            extremes.len()
        );
        Ok(Self {
            path,
            extremes,
            read_only,
        })
    }

    pub fn get(&self, feature: &str) -> Option<&FeatureExtremes> {
        self.extremes.get(feature)
    }

    pub fn set(&mut self, feature: impl Into<String>, extremes: FeatureExtremes) {
        self.extremes.insert(feature.into(), extremes);
    }

    pub fn remove(&mut self, feature: &str) -> Option<FeatureExtremes> {
        self.extremes.remove(feature)
    }

    pub fn features(&self) -> impl Iterator<Item = (&String, &FeatureExtremes)> {
        self.extremes.iter()
    }

    pub fn len(&self) -> usize {
        self.extremes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extremes.is_empty()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        if self.read_only {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.extremes)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Writes the document back and releases the store.
    pub async fn close(self) -> Result<(), StoreError> {
        self.persist().await
    }
}
