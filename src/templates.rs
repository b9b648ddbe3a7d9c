//! Seed content for freshly inserted diagram files

use crate::{
    error::{InsertError, InsertResult},
    models::DiagramKind,
    store::FileStore,
};

/// Bootstrap SVG the draw.io desktop application recognizes as a valid empty
/// canvas: a single-pixel document whose `content` attribute embeds the
/// escaped empty graph model. The editor depends on these exact bytes; do not
/// reformat.
pub const EMPTY_DIAGRAM_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"
     version="1.1" width="1px" height="1px" viewBox="-0.5 -0.5 1 1"
     content="&lt;mxGraphModel&gt;&lt;root&gt;&lt;mxCell id=&quot;0&quot;/&gt;&lt;mxCell id=&quot;1&quot; parent=&quot;0&quot;/&gt;&lt;/root&gt;&lt;/mxGraphModel&gt;">
</svg>"#;

/// Bundled empty mind-map archive, shipped with the plugin and copied verbatim
pub const XMIND_TEMPLATE_PATH: &str = "template/template.xmind";

/// Where the seed bytes for a diagram kind come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    /// Fixed text written as-is
    Inline(&'static str),
    /// Opaque bytes of a bundled asset, copied without transformation
    BundledAsset(&'static str),
}

impl TemplateSource {
    #[must_use]
    pub const fn for_kind(kind: DiagramKind) -> Self {
        match kind {
            DiagramKind::DrawIo => Self::Inline(EMPTY_DIAGRAM_SVG),
            DiagramKind::XMind => Self::BundledAsset(XMIND_TEMPLATE_PATH),
        }
    }
}

/// Write the seed content for `kind` at `path`.
///
/// # Errors
///
/// Returns `FileAlreadyExists` if an entry occupies `path` (existing user
/// content is never overwritten), `TemplateMissing` if the bundled asset
/// cannot be read, and `FileCreationFailed` if the store rejects the write.
pub fn materialize(kind: DiagramKind, store: &dyn FileStore, path: &str) -> InsertResult<()> {
    if store.exists(path) {
        return Err(InsertError::file_already_exists(path));
    }

    match TemplateSource::for_kind(kind) {
        TemplateSource::Inline(text) => {
            if store.create_text(path, text) {
                Ok(())
            } else {
                Err(InsertError::file_creation_failed(
                    path,
                    "store rejected the write",
                ))
            }
        }
        TemplateSource::BundledAsset(asset) => {
            let bytes = store
                .read_binary(asset)
                .ok_or_else(|| InsertError::template_missing(asset))?;
            if store.create_binary(path, &bytes) {
                Ok(())
            } else {
                Err(InsertError::file_creation_failed(
                    path,
                    "store rejected the write",
                ))
            }
        }
    }
}
