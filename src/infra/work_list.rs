use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::infra::{contracts::WorkListStore, error::AppError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct WorkListFile {
    users: Vec<String>,
}

/// Work list persisted as `{"users": [...]}`, rewritten in full on every
/// mutation.
#[derive(Debug)]
pub struct JsonWorkListStore {
    path: PathBuf,
    state: WorkListFile,
}

impl JsonWorkListStore {
    /// Opens the store at `path`. A missing or corrupt file is replaced by an
    /// empty list; only failing to write that default is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();

        match read_state(&path) {
            Some(state) => Ok(Self { path, state }),
            None => {
                let mut store = Self {
                    path,
                    state: WorkListFile::default(),
                };
                store.persist()?;
                Ok(store)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&mut self) -> Result<(), AppError> {
        let write_err = |source| AppError::WorkListWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let payload = serde_json::to_vec_pretty(&self.state).map_err(|source| {
            write_err(std::io::Error::new(std::io::ErrorKind::InvalidData, source))
        })?;

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, payload).map_err(write_err)?;
        fs::rename(&staging, &self.path).map_err(write_err)?;

        Ok(())
    }
}

impl WorkListStore for JsonWorkListStore {
    fn users(&self) -> &[String] {
        &self.state.users
    }

    fn set(&mut self, usernames: Vec<String>) -> Result<(), AppError> {
        self.state.users = usernames;
        self.persist()
    }

    fn remove(&mut self, username: &str) -> Result<(), AppError> {
        self.state.users.retain(|user| user != username);
        self.persist()
    }
}

fn read_state(path: &Path) -> Option<WorkListFile> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "work list file absent, starting empty");
            return None;
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "work list unreadable, resetting");
            return None;
        }
    };

    match serde_json::from_str::<WorkListFile>(&raw) {
        Ok(state) => Some(state),
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "work list malformed, resetting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn persisted_users(path: &Path) -> Vec<String> {
        let raw = fs::read_to_string(path).expect("work list should be on disk");
        let state: WorkListFile = serde_json::from_str(&raw).expect("work list should be valid");
        state.users
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn missing_file_loads_empty_and_persists_default() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("work_list.json");

        let store = JsonWorkListStore::load(&path).expect("load should succeed");

        assert!(store.users().is_empty());
        assert!(persisted_users(&path).is_empty());
    }

    #[test]
    fn malformed_files_load_empty_and_are_repaired() {
        let fixtures = [
            "",
            "{ not json",
            "[1, 2, 3]",
            r#"{"other": ["alice"]}"#,
            r#"{"users": "alice"}"#,
            r#"{"users": [1, 2]}"#,
        ];

        for fixture in fixtures {
            let dir = TempDir::new().expect("temp dir");
            let path = dir.path().join("work_list.json");
            fs::write(&path, fixture).expect("fixture should be writable");

            let store = JsonWorkListStore::load(&path).expect("load should succeed");

            assert!(store.users().is_empty(), "fixture {fixture:?}");
            assert!(persisted_users(&path).is_empty(), "fixture {fixture:?}");
        }
    }

    #[test]
    fn existing_list_is_loaded_as_is() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("work_list.json");
        fs::write(&path, r#"{"users": ["alice", "bob"]}"#).expect("fixture should be writable");

        let store = JsonWorkListStore::load(&path).expect("load should succeed");

        assert_eq!(store.users(), names(&["alice", "bob"]).as_slice());
    }

    #[test]
    fn set_replaces_list_and_persists() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("work_list.json");
        let mut store = JsonWorkListStore::load(&path).expect("load should succeed");

        store
            .set(names(&["alice", "bob", "carol"]))
            .expect("set should persist");

        assert_eq!(persisted_users(&path), names(&["alice", "bob", "carol"]));
        let reloaded = JsonWorkListStore::load(&path).expect("reload should succeed");
        assert_eq!(reloaded.users(), store.users());
    }

    #[test]
    fn remove_drops_every_occurrence() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("work_list.json");
        let mut store = JsonWorkListStore::load(&path).expect("load should succeed");
        store
            .set(names(&["alice", "bob", "alice", "carol"]))
            .expect("set should persist");

        store.remove("alice").expect("remove should persist");

        assert_eq!(store.users(), names(&["bob", "carol"]).as_slice());
        assert_eq!(persisted_users(&path), names(&["bob", "carol"]));
    }

    #[test]
    fn remove_of_absent_user_is_noop() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("work_list.json");
        let mut store = JsonWorkListStore::load(&path).expect("load should succeed");
        store.set(names(&["alice", "bob"])).expect("set should persist");

        store.remove("mallory").expect("remove should persist");

        assert_eq!(store.users(), names(&["alice", "bob"]).as_slice());
        assert_eq!(persisted_users(&path), names(&["alice", "bob"]));
    }

    #[test]
    fn staging_file_does_not_linger_after_write() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("work_list.json");
        let mut store = JsonWorkListStore::load(&path).expect("load should succeed");

        store.set(names(&["alice"])).expect("set should persist");

        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(store.path(), path.as_path());
    }
}
