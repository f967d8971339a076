use super::{check_key, BlobStore};
use crate::error::{Result, TownhallError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const BLOB_EXT: &str = "json";

/// Reserved for the config file, which lives in the same directory.
const RESERVED_KEYS: &[&str] = &["config"];

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn blob_path(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        if RESERVED_KEYS.contains(&key) {
            return Err(TownhallError::Store(format!("Store key '{}' is reserved", key)));
        }
        Ok(self.root.join(format!("{}.{}", key, BLOB_EXT)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TownhallError::Io)?;
        }
        Ok(())
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        log::debug!("reading {}", path.display());
        let content = fs::read_to_string(&path).map_err(TownhallError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        self.ensure_dir()?;

        // Write to a sibling temp file then rename, so readers never see half a blob
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(TownhallError::Io)?;
        fs::rename(&tmp, &path).map_err(TownhallError::Io)?;
        log::debug!("wrote {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        if path.exists() {
            fs::remove_file(&path).map_err(TownhallError::Io)?;
            log::debug!("removed {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_then_get() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("data"));

        assert_eq!(store.get("inquiries").unwrap(), None);
        store.set("inquiries", "[]").unwrap();
        assert_eq!(store.get("inquiries").unwrap().as_deref(), Some("[]"));
        assert!(temp.path().join("data").join("inquiries.json").exists());
    }

    #[test]
    fn set_overwrites_and_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("contact_draft", "{\"a\":1}").unwrap();
        store.set("contact_draft", "{\"a\":2}").unwrap();

        assert_eq!(
            store.get("contact_draft").unwrap().as_deref(),
            Some("{\"a\":2}")
        );
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("subscriptions", "[]").unwrap();
        store.remove("subscriptions").unwrap();
        store.remove("subscriptions").unwrap();
        assert_eq!(store.get("subscriptions").unwrap(), None);
    }

    #[test]
    fn rejects_reserved_and_unsafe_keys() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        assert!(store.set("config", "{}").is_err());
        assert!(store.set("../escape", "{}").is_err());
    }
}
