//! Error types for the quickinsert plugin
//!
//! This module provides centralized error handling using `thiserror` across all components

use thiserror::Error;

/// Errors raised while placing a diagram file into the vault
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum InsertError {
    /// The attachments folder could not be created
    #[error("Could not create folder {path}: {reason}")]
    FolderCreationFailed { path: String, reason: String },

    /// An entry already exists at the destination path
    #[error("File already exists: {0}")]
    FileAlreadyExists(String),

    /// The destination file could not be written
    #[error("Could not create file {path}: {reason}")]
    FileCreationFailed { path: String, reason: String },

    /// The bundled template asset could not be read
    #[error("Template asset missing: {0}")]
    TemplateMissing(String),

    /// Other insertion errors
    #[error("Insert error: {0}")]
    Other(String),
}

impl InsertError {
    /// Create a folder creation error
    pub fn folder_creation_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FolderCreationFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an already-exists error
    pub fn file_already_exists(path: impl Into<String>) -> Self {
        Self::FileAlreadyExists(path.into())
    }

    /// Create a file creation error
    pub fn file_creation_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FileCreationFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing template error
    pub fn template_missing(path: impl Into<String>) -> Self {
        Self::TemplateMissing(path.into())
    }

    /// Create a generic insertion error
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other(reason.into())
    }
}

/// Result type for insertion operations
pub type InsertResult<T> = Result<T, InsertError>;

/// Errors raised while launching the external editor application
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum LaunchError {
    /// The platform open command could not be spawned
    #[error("Could not open {path} with {app}: {reason}")]
    SpawnFailed {
        app: String,
        path: String,
        reason: String,
    },
}

impl LaunchError {
    /// Create a spawn failure error
    pub fn spawn_failed(
        app: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::SpawnFailed {
            app: app.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for launch operations
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Main unified error type that can represent any quickinsert error
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum QuickInsertError {
    /// Insertion error
    #[error(transparent)]
    Insert(#[from] InsertError),

    /// Launch error
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// A command id the plugin does not contribute
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

impl QuickInsertError {
    /// Create an unknown command error
    pub fn unknown_command(id: impl Into<String>) -> Self {
        Self::UnknownCommand(id.into())
    }

    /// Create a generic error
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other(reason.into())
    }
}

/// Result type for quickinsert operations
pub type QuickInsertResult<T> = Result<T, QuickInsertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_error_folder_creation() {
        let err = InsertError::folder_creation_failed("notes/attachments", "permission denied");
        assert!(err.to_string().contains("notes/attachments"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_insert_error_already_exists() {
        let err = InsertError::file_already_exists("notes/attachments/diagram.svg");
        assert!(err.to_string().contains("diagram.svg"));
    }

    #[test]
    fn test_launch_error_spawn_failed() {
        let err = LaunchError::spawn_failed("draw.io.app", "/vault/x.svg", "not found");
        assert!(err.to_string().contains("draw.io.app"));
        assert!(err.to_string().contains("/vault/x.svg"));
    }

    #[test]
    fn test_quick_insert_error_from_insert_error() {
        let err = InsertError::template_missing("template/template.xmind");
        let top: QuickInsertError = err.into();
        assert!(top.to_string().contains("template/template.xmind"));
    }

    #[test]
    fn test_quick_insert_error_unknown_command() {
        let err = QuickInsertError::unknown_command("insert-uml");
        assert!(err.to_string().contains("insert-uml"));
    }
}
