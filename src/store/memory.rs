#![allow(clippy::cast_possible_truncation, clippy::missing_panics_doc)]

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Mutex,
};

use crate::store::FileStore;

/// Virtual mount point reported by `absolute_path`
const VIRTUAL_ROOT: &str = "/vault";

/// In-memory vault, used as the test double and by hosts that virtualize
/// their file access
#[derive(Debug, Default, uniffi::Object)]
pub struct MemoryFileStore {
    inner: Mutex<Entries>,
}

#[derive(Debug, Default)]
struct Entries {
    files: BTreeMap<String, Vec<u8>>,
    folders: BTreeSet<String>,
}

impl Entries {
    fn occupied(&self, path: &str) -> bool {
        self.files.contains_key(path) || self.folders.contains(path)
    }
}

#[uniffi::export]
impl MemoryFileStore {
    #[uniffi::constructor]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, overwriting any previous entry. Intended for preparing
    /// fixtures such as the bundled template asset.
    pub fn seed_file(&self, path: &str, data: &[u8]) {
        self.inner
            .lock()
            .unwrap()
            .files
            .insert(path.to_string(), data.to_vec());
    }

    /// Number of file entries currently stored
    pub fn file_count(&self) -> u64 {
        self.inner.lock().unwrap().files.len() as u64
    }

    /// Whether a folder entry exists at `path`
    pub fn has_folder(&self, path: &str) -> bool {
        self.inner.lock().unwrap().folders.contains(path)
    }
}

impl FileStore for MemoryFileStore {
    fn exists(&self, path: &str) -> bool {
        self.inner.lock().unwrap().occupied(path)
    }

    fn create_folder(&self, path: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.occupied(path) {
            return false;
        }
        inner.folders.insert(path.to_string())
    }

    fn create_text(&self, path: &str, content: &str) -> bool {
        self.create_binary(path, content.as_bytes())
    }

    fn create_binary(&self, path: &str, data: &[u8]) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.occupied(path) {
            return false;
        }
        inner.files.insert(path.to_string(), data.to_vec());
        true
    }

    fn read_binary(&self, path: &str) -> Option<Vec<u8>> {
        self.inner.lock().unwrap().files.get(path).cloned()
    }

    fn absolute_path(&self, path: &str) -> String {
        format!("{VIRTUAL_ROOT}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_basic_operations() {
        let store = MemoryFileStore::new();

        assert!(store.create_text("notes/a.md", "# A"));
        assert_eq!(store.read_binary("notes/a.md").unwrap(), b"# A");
        assert_eq!(store.file_count(), 1);

        assert!(store.create_binary("notes/b.bin", &[0, 1, 2]));
        assert_eq!(store.read_binary("notes/b.bin").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn memory_store_rejects_colliding_entries() {
        let store = MemoryFileStore::new();

        assert!(store.create_folder("attachments"));
        assert!(!store.create_text("attachments", "not a file"));
        assert!(!store.create_folder("attachments"));

        assert!(store.create_text("diagram.svg", "<svg/>"));
        assert!(!store.create_folder("diagram.svg"));
    }

    #[test]
    fn memory_store_absolute_paths_are_rooted() {
        let store = MemoryFileStore::new();
        assert_eq!(
            store.absolute_path("notes/attachments/diagram.svg"),
            "/vault/notes/attachments/diagram.svg"
        );
    }

    #[test]
    fn memory_store_seed_overwrites() {
        let store = MemoryFileStore::new();
        store.seed_file("template/template.xmind", b"v1");
        store.seed_file("template/template.xmind", b"v2");
        assert_eq!(store.read_binary("template/template.xmind").unwrap(), b"v2");
    }
}
