use crate::error::{Result, SnapfeedError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const ID_LENGTH: usize = 20;

/// A named collection of JSON documents, one file per document.
///
/// Scans return documents in filename order, which stands in for the
/// store-default ordering of the backing database.
pub struct Collection<T> {
    path: PathBuf,
    _doc: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _doc: PhantomData,
        }
    }

    fn doc_path(&self, doc_id: &str) -> PathBuf {
        self.path.join(format!("{}.json", doc_id))
    }

    fn generate_doc_id(&self) -> String {
        nanoid::format(nanoid::rngs::default, &ID_ALPHABET, ID_LENGTH)
    }

    /// Insert a document under a freshly generated id.
    pub fn add(&self, doc: &T) -> Result<String> {
        std::fs::create_dir_all(&self.path)?;

        let doc_id = self.generate_doc_id();
        let file_path = self.doc_path(&doc_id);

        if file_path.exists() {
            return Err(SnapfeedError::Store(format!(
                "Document id collision: {}",
                file_path.display()
            )));
        }

        let content = serde_json::to_string_pretty(doc)?;
        self.atomic_write(&file_path, &content)?;

        Ok(doc_id)
    }

    /// Replace an existing document in place.
    pub fn replace(&self, doc_id: &str, doc: &T) -> Result<()> {
        let file_path = self.doc_path(doc_id);

        if !file_path.exists() {
            return Err(SnapfeedError::Store(format!(
                "No such document: {}",
                file_path.display()
            )));
        }

        let content = serde_json::to_string_pretty(doc)?;
        self.atomic_write(&file_path, &content)
    }

    /// Read every document in the collection, with its document id.
    ///
    /// A missing collection directory reads as empty.
    pub fn scan(&self) -> Result<Vec<(String, T)>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.path)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
                paths.push(path);
            }
        }
        // Filename order keeps scans deterministic
        paths.sort();

        let mut docs = Vec::new();
        for path in paths {
            let Some(stem) = path.file_stem() else {
                continue;
            };
            let doc_id = stem.to_string_lossy().to_string();
            let content = std::fs::read_to_string(&path)?;
            let doc: T = serde_json::from_str(&content).map_err(|e| {
                SnapfeedError::Store(format!("Corrupt document {}: {}", path.display(), e))
            })?;
            docs.push((doc_id, doc));
        }

        Ok(docs)
    }

    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        let target_dir = target_path
            .parent()
            .ok_or_else(|| SnapfeedError::Store("Target path has no parent directory".to_string()))?;

        // Temp file must live in the target directory for the rename to be atomic
        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| SnapfeedError::Store(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| SnapfeedError::Store(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| SnapfeedError::Store(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(target_path)
            .map_err(|e| SnapfeedError::Store(format!("Failed to persist document: {}", e)))?;

        Ok(())
    }
}
