use std::fmt::Debug;

pub mod disk;
pub mod memory;

/// Vault file access as the host application exposes it to the plugin.
///
/// All paths are vault-relative. The trait returns primitives; the layers
/// above map a `false`/`None` into the insertion error taxonomy.
#[uniffi::export(with_foreign)]
pub trait FileStore: Send + Sync + Debug {
    /// Check whether any entry (file or folder) exists at a path
    fn exists(&self, path: &str) -> bool;

    /// Create a single folder. The parent is assumed to exist already;
    /// this never creates intermediate folders.
    fn create_folder(&self, path: &str) -> bool;

    /// Create a text file. Must fail if an entry already exists at `path`.
    fn create_text(&self, path: &str, content: &str) -> bool;

    /// Create a binary file. Must fail if an entry already exists at `path`.
    fn create_binary(&self, path: &str, data: &[u8]) -> bool;

    /// Read the raw bytes of a file, if present
    fn read_binary(&self, path: &str) -> Option<Vec<u8>>;

    /// Resolve a vault-relative path to an absolute filesystem path
    fn absolute_path(&self, path: &str) -> String;
}
