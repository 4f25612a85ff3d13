//! File-backed submission store
//!
//! The whole mapping lives in memory and is rewritten to disk on every
//! append. Appends hold the write lock across the full
//! insert-serialize-write cycle, so concurrent callers are applied one at a
//! time and none of them can overwrite another's record in the file.

use crate::error::StoreError;
use indexmap::IndexMap;
use questionnaire_model::{AnswerPair, Submission, SubmissionId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

type Records = IndexMap<SubmissionId, Submission>;

/// Store handle shared between request handlers
pub type SharedStore = Arc<SubmissionStore>;

/// Submission store with serialized writes
#[derive(Debug)]
pub struct SubmissionStore {
    /// Data file
    path: PathBuf,
    /// Records in insertion order
    records: RwLock<Records>,
}

impl SubmissionStore {
    /// Open store backed by `path`
    ///
    /// A missing file yields an empty store. Parent directories are created
    /// when absent so the first append can write.
    ///
    /// # Errors
    /// - `StoreError::Io` if the file exists but cannot be read
    /// - `StoreError::Corrupt` if the file does not parse
    /// - `StoreError::InconsistentRecord` if a key disagrees with its record
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io_error(parent, e))?;
        }

        let records = match tokio::fs::read_to_string(&path).await {
            Ok(content) => Self::parse(&path, &content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no data file, starting empty");
                Records::new()
            }
            Err(e) => return Err(StoreError::io_error(&path, e)),
        };

        debug!(path = %path.display(), count = records.len(), "submission store opened");

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    fn parse(path: &Path, content: &str) -> Result<Records, StoreError> {
        let records: Records =
            serde_json::from_str(content).map_err(|source| StoreError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some((key, record)) = records.iter().find(|(key, record)| **key != record.id) {
            return Err(StoreError::InconsistentRecord {
                key: key.to_string(),
                id: record.id.to_string(),
            });
        }

        Ok(records)
    }

    /// Open store and wrap it for sharing
    ///
    /// # Errors
    /// Same as [`SubmissionStore::open`]
    pub async fn open_shared(path: impl AsRef<Path>) -> Result<SharedStore, StoreError> {
        Self::open(path).await.map(Arc::new)
    }

    /// Data file path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All submissions in insertion order
    pub async fn list(&self) -> Vec<Submission> {
        self.records.read().await.values().cloned().collect()
    }

    /// Submission by identity
    pub async fn get(&self, id: &str) -> Option<Submission> {
        self.records.read().await.get(id).cloned()
    }

    /// Number of stored submissions
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether nothing has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Record a new submission and rewrite the data file
    ///
    /// # Arguments
    /// * `answers` - Pairs exactly as received from the client
    ///
    /// # Returns
    /// Identity of the new submission
    ///
    /// # Errors
    /// - `StoreError::Serialize` / `StoreError::Io` if the file cannot be
    ///   rewritten; the record is then removed from memory again
    pub async fn append(&self, answers: Vec<AnswerPair>) -> Result<SubmissionId, StoreError> {
        let mut records = self.records.write().await;

        let id = loop {
            let candidate = SubmissionId::generate();
            if !records.contains_key(&candidate) {
                break candidate;
            }
        };

        records.insert(id.clone(), Submission::new(id.clone(), answers));

        if let Err(err) = self.persist(&records).await {
            records.shift_remove(&id);
            error!(path = %self.path.display(), error = %err, "failed to persist submission");
            return Err(err);
        }

        info!(id = %id, total = records.len(), "submission stored");
        Ok(id)
    }

    /// Write the full mapping to a sibling file, then rename it over the target
    async fn persist(&self, records: &Records) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records).map_err(StoreError::Serialize)?;
        let staging = self.staging_path();

        tokio::fs::write(&staging, &bytes)
            .await
            .map_err(|e| StoreError::io_error(&staging, e))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| StoreError::io_error(&self.path, e))
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair(id: &str, value: &str) -> AnswerPair {
        AnswerPair::new(id, Some(value.to_string()))
    }

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SubmissionStore::open(dir.path().join("data.json")).await.unwrap();
        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("data.json");
        let store = SubmissionStore::open(&path).await.unwrap();
        store.append(vec![pair("1", "\"x\"")]).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn append_writes_pretty_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = SubmissionStore::open(&path).await.unwrap();
        assert_eq!(store.path(), path.as_path());

        let id = store.append(vec![pair("1", "\"John\"")]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains('\n'), "data file should be pretty-printed");

        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &json[id.as_str()];
        assert_eq!(record["id"], id.as_str());
        assert_eq!(record["answers"][0]["questionId"], "1");
        assert_eq!(record["answers"][0]["value"], "\"John\"");
        assert!(record["createdAt"].as_str().unwrap().ends_with('Z'));
        assert!(!dir.path().join("data.json.tmp").exists());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = SubmissionStore::open(dir.path().join("data.json")).await.unwrap();

        let first = store.append(vec![pair("1", "\"a\"")]).await.unwrap();
        let second = store.append(vec![pair("1", "\"b\"")]).await.unwrap();

        let ids: Vec<_> = store.list().await.into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn failed_write_rolls_back_memory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let store = SubmissionStore::open(sub.join("data.json")).await.unwrap();
        std::fs::remove_dir_all(&sub).unwrap();

        let result = store.append(vec![pair("1", "\"x\"")]).await;

        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SubmissionStore::open(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(err.is_startup_data_error());
    }

    #[tokio::test]
    async fn mismatched_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{ "a": { "id": "b", "createdAt": "2024-01-01T00:00:00.000Z", "answers": [] } }"#,
        )
        .unwrap();

        let err = SubmissionStore::open(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::InconsistentRecord { .. }));
    }

    #[test]
    fn staging_path_is_sibling() {
        let store = SubmissionStore {
            path: PathBuf::from("/srv/data/questionnaire-data.json"),
            records: RwLock::new(Records::new()),
        };
        assert_eq!(
            store.staging_path(),
            PathBuf::from("/srv/data/questionnaire-data.json.tmp")
        );
    }
}
