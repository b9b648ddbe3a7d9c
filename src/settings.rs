use serde::{Deserialize, Serialize};

use crate::{
    error::{QuickInsertError, QuickInsertResult},
    models::DiagramKind,
};

/// Plugin settings the host persists as JSON. Missing fields fall back to
/// the defaults, so older settings blobs keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
#[serde(default)]
pub struct Settings {
    /// Name of the shared attachments folder colocated with each note
    pub attachments_folder: String,
    /// Application identifier used to open `.svg` diagram stubs
    pub drawio_app: String,
    /// Application identifier used to open `.xmind` files
    pub xmind_app: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            attachments_folder: "attachments".to_string(),
            drawio_app: DiagramKind::DrawIo.default_app_id().to_string(),
            xmind_app: DiagramKind::XMind.default_app_id().to_string(),
        }
    }
}

impl Settings {
    /// Application identifier configured for a diagram kind
    #[must_use]
    pub fn app_id(&self, kind: DiagramKind) -> &str {
        match kind {
            DiagramKind::DrawIo => &self.drawio_app,
            DiagramKind::XMind => &self.xmind_app,
        }
    }

    /// Restore settings from the host's persisted JSON blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob is not valid settings JSON.
    pub fn from_json(raw: &str) -> QuickInsertResult<Self> {
        serde_json::from_str(raw)
            .map_err(|err| QuickInsertError::other(format!("invalid settings: {err}")))
    }

    /// Serialize settings for the host to persist.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> QuickInsertResult<String> {
        serde_json::to_string(self)
            .map_err(|err| QuickInsertError::other(format!("could not serialize settings: {err}")))
    }
}
