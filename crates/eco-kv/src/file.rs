//! File-backed store: one file per key under a data directory.

use crate::{KeyValueStore, KvError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A store that keeps each key in its own file.
///
/// Keys are sanitized to file names, so the store never escapes its data
/// directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, KvError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| KvError::Open(format!("{}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
                _ => '_',
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KvError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KvError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("data");
        FileStore::open(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        store.set("carrinho", r#"[{"id":1}]"#).unwrap();
        assert_eq!(
            store.get("carrinho").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn test_get_missing_returns_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert!(store.get("carrinho").unwrap().is_none());
    }

    #[test]
    fn test_delete_removes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        store.set("carrinho", "[]").unwrap();
        store.delete("carrinho").unwrap();
        assert!(store.get("carrinho").unwrap().is_none());

        // Absent key: still ok.
        store.delete("carrinho").unwrap();
    }

    #[test]
    fn test_key_sanitization() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        store.set("../escape", "v").unwrap();
        assert_eq!(store.get("../escape").unwrap().as_deref(), Some("v"));
        // The file stayed inside the data directory.
        assert!(tmp.path().join("___escape.json").is_file());
    }

    #[test]
    fn test_values_survive_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(tmp.path()).unwrap();
            store.set("carrinho", "[]").unwrap();
        }
        let store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(store.get("carrinho").unwrap().as_deref(), Some("[]"));
    }
}
