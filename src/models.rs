use serde::{Deserialize, Serialize};

/// The kind of diagram file a command inserts
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, uniffi::Enum)]
pub enum DiagramKind {
    DrawIo,
    XMind,
}

impl DiagramKind {
    /// File extension appended to the user-entered base name, dot included
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::DrawIo => ".svg",
            Self::XMind => ".xmind",
        }
    }

    /// Identifier of the desktop application that edits this kind
    #[must_use]
    pub const fn default_app_id(self) -> &'static str {
        match self {
            Self::DrawIo => "draw.io.app",
            Self::XMind => "Xmind.app",
        }
    }
}

/// A position in the editor, line and character
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct CursorPosition {
    pub line: u32,
    pub ch: u32,
}

impl CursorPosition {
    #[must_use]
    pub const fn new(line: u32, ch: u32) -> Self {
        Self { line, ch }
    }
}

/// Everything one insert invocation needs, built once and consumed once.
/// The cursor is the position frozen when the command was invoked, not the
/// live cursor at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionRequest {
    pub kind: DiagramKind,
    pub note_folder: String,
    pub file_name: String,
    pub cursor: CursorPosition,
}

/// What a completed insert invocation reports back to the host
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum InsertOutcome {
    /// The prompt was dismissed; nothing was written
    Cancelled,
    /// The file was created and the link inserted. `launched` records whether
    /// the external open request could be issued; a false value never rolls
    /// back the note edit.
    Inserted {
        path: String,
        link: String,
        launched: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagram_kind_extensions() {
        assert_eq!(DiagramKind::DrawIo.extension(), ".svg");
        assert_eq!(DiagramKind::XMind.extension(), ".xmind");
    }

    #[test]
    fn diagram_kind_app_ids() {
        assert_eq!(DiagramKind::DrawIo.default_app_id(), "draw.io.app");
        assert_eq!(DiagramKind::XMind.default_app_id(), "Xmind.app");
    }
}
