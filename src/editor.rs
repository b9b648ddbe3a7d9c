use std::fmt::Debug;

use crate::models::CursorPosition;

/// The host's editor for the currently active note.
///
/// `insert` writes at the live cursor; callers that need the invocation-time
/// position must capture it with `cursor` and restore it with `set_cursor`
/// before inserting.
#[uniffi::export(with_foreign)]
pub trait DocumentEditor: Send + Sync + Debug {
    /// Current cursor position
    fn cursor(&self) -> CursorPosition;

    /// Move the cursor to a position
    fn set_cursor(&self, position: CursorPosition);

    /// Insert text at the current cursor position
    fn insert(&self, text: &str);
}
