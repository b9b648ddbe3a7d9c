use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::store::FileStore;

/// Vault access backed by the local filesystem, rooted at the vault directory
#[derive(Debug, uniffi::Object)]
pub struct DiskFileStore {
    root: PathBuf,
}

#[uniffi::export]
impl DiskFileStore {
    #[uniffi::constructor]
    #[must_use]
    pub fn new(root: String) -> Self {
        Self {
            root: PathBuf::from(root),
        }
    }
}

impl DiskFileStore {
    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    fn create_new(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
        file.write_all(data)
    }
}

impl FileStore for DiskFileStore {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn create_folder(&self, path: &str) -> bool {
        let target = self.resolve(path);
        match fs::create_dir(&target) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("could not create folder {}: {err}", target.display());
                false
            }
        }
    }

    fn create_text(&self, path: &str, content: &str) -> bool {
        self.create_binary(path, content.as_bytes())
    }

    fn create_binary(&self, path: &str, data: &[u8]) -> bool {
        let target = self.resolve(path);
        match Self::create_new(&target, data) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("could not create file {}: {err}", target.display());
                false
            }
        }
    }

    fn read_binary(&self, path: &str) -> Option<Vec<u8>> {
        fs::read(self.resolve(path)).ok()
    }

    fn absolute_path(&self, path: &str) -> String {
        self.resolve(path).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempVault {
        root: PathBuf,
    }

    impl TempVault {
        fn new(name: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "quickinsert-store-{}-{name}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(&root).unwrap();
            Self { root }
        }

        fn store(&self) -> DiskFileStore {
            DiskFileStore::new(self.root.to_string_lossy().into_owned())
        }
    }

    impl Drop for TempVault {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn disk_store_creates_folder_once() {
        let vault = TempVault::new("folder-once");
        let store = vault.store();

        assert!(!store.exists("attachments"));
        assert!(store.create_folder("attachments"));
        assert!(store.exists("attachments"));
        assert!(!store.create_folder("attachments"));
    }

    #[test]
    fn disk_store_never_clobbers_existing_files() {
        let vault = TempVault::new("no-clobber");
        let store = vault.store();

        assert!(store.create_text("diagram.svg", "first"));
        assert!(!store.create_text("diagram.svg", "second"));
        assert!(!store.create_binary("diagram.svg", b"second"));
        assert_eq!(store.read_binary("diagram.svg").unwrap(), b"first");
    }

    #[test]
    fn disk_store_binary_round_trip() {
        let vault = TempVault::new("binary");
        let store = vault.store();

        let bytes = [0_u8, 159, 146, 150];
        assert!(store.create_binary("map.xmind", &bytes));
        assert_eq!(store.read_binary("map.xmind").unwrap(), bytes);
    }

    #[test]
    fn disk_store_absolute_path_is_rooted() {
        let vault = TempVault::new("abs");
        let store = vault.store();

        let absolute = store.absolute_path("notes/diagram.svg");
        assert!(absolute.ends_with("notes/diagram.svg"));
        assert!(PathBuf::from(absolute).is_absolute());
    }
}
