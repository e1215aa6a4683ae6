//! Record store for documentation entries.
//!
//! Keeps records in memory behind a read-write lock and persists each one as
//! a JSON file under the data directory, named by its surrogate id. The
//! natural-key upsert in [`DocStore::save`] happens entirely under the write
//! lock, so concurrent saves for the same (project, endpoint) pair cannot
//! create duplicate records.

mod record;

pub use record::DocumentationRecord;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::DocError;

/// Persistent store of documentation records
pub struct DocStore {
    data_dir: PathBuf,
    records: RwLock<HashMap<Uuid, DocumentationRecord>>,
}

impl DocStore {
    /// Open a store rooted at `data_dir`, loading any persisted records.
    ///
    /// Files that fail to parse are logged and skipped rather than aborting
    /// startup.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, DocError> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir).await?;

        let mut records = HashMap::new();
        let mut entries = tokio::fs::read_dir(&data_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::load_record(&path).await {
                Ok(record) => {
                    if let Some(id) = record.id {
                        records.insert(id, record);
                    } else {
                        tracing::warn!(path = %path.display(), "skipping record without id");
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable record");
                }
            }
        }

        tracing::debug!(count = records.len(), dir = %data_dir.display(), "record store loaded");

        Ok(Self {
            data_dir,
            records: RwLock::new(records),
        })
    }

    async fn load_record(path: &Path) -> Result<DocumentationRecord, DocError> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.data_dir.join(format!("{id}.json"))
    }

    /// Upsert a record and return it with its identifier populated.
    ///
    /// A record without an id is first matched against the natural key; an
    /// existing record's id is reused so the one-record-per-pair invariant
    /// holds. Otherwise a fresh id is assigned.
    pub async fn save(
        &self,
        mut record: DocumentationRecord,
    ) -> Result<DocumentationRecord, DocError> {
        let mut records = self.records.write().await;

        let id = match record.id {
            Some(id) => id,
            None => records
                .values()
                .find(|r| r.matches_key(&record.project_name, &record.api_endpoint))
                .and_then(|r| r.id)
                .unwrap_or_else(Uuid::new_v4),
        };
        record.id = Some(id);

        let json = serde_json::to_string_pretty(&record)?;
        tokio::fs::write(self.record_path(id), json).await?;

        records.insert(id, record.clone());
        Ok(record)
    }

    /// Exact-match lookup by the natural key
    pub async fn find_by_project_and_endpoint(
        &self,
        project_name: &str,
        api_endpoint: &str,
    ) -> Option<DocumentationRecord> {
        let records = self.records.read().await;
        records
            .values()
            .find(|r| r.matches_key(project_name, api_endpoint))
            .cloned()
    }

    /// All records, order unspecified
    pub async fn find_all(&self) -> Vec<DocumentationRecord> {
        let records = self.records.read().await;
        records.values().cloned().collect()
    }

    /// All records belonging to one project
    pub async fn find_by_project(&self, project_name: &str) -> Vec<DocumentationRecord> {
        let records = self.records.read().await;
        records
            .values()
            .filter(|r| r.project_name == project_name)
            .cloned()
            .collect()
    }

    /// Lookup by surrogate id
    pub async fn find_by_id(&self, id: Uuid) -> Option<DocumentationRecord> {
        let records = self.records.read().await;
        records.get(&id).cloned()
    }

    /// Delete a record by id, failing with `NotFound` when absent
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), DocError> {
        let mut records = self.records.write().await;
        if records.remove(&id).is_none() {
            return Err(DocError::NotFound(id));
        }

        let path = self.record_path(id);
        if path.exists() {
            tokio::fs::remove_file(&path).await?;
        }

        Ok(())
    }

    /// Distinct project names, sorted, each exactly once
    pub async fn project_names(&self) -> Vec<String> {
        let records = self.records.read().await;
        let mut names: Vec<String> = records.values().map(|r| r.project_name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}
