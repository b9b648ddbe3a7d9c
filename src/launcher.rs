use std::fmt::Debug;

pub mod shell;

/// Fire-and-forget "open with application" capability.
///
/// `open` must return as soon as the request is issued; the workflow never
/// waits on the external application and treats a failed launch as non-fatal.
#[uniffi::export(with_foreign)]
pub trait Launcher: Send + Sync + Debug {
    /// Ask the OS to open `path` with the named application. Returns whether
    /// the request could be issued, not whether the application started.
    fn open(&self, path: &str, app_id: &str) -> bool;
}
