use crate::{
    error::{InsertError, InsertResult},
    store::FileStore,
};

/// Destination of an attachment colocated with a note: the attachments
/// folder, the file path inside it, and the target the embed link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPlacement {
    /// Vault-relative attachments folder
    pub folder: String,
    /// Vault-relative destination file path
    pub file_path: String,
    /// Target used in the emitted embed link (`<folder name>/<file name>`)
    pub link_target: String,
}

impl AttachmentPlacement {
    /// Compute the destination for `file_name` next to a note living in
    /// `note_folder`, using `folder_name` as the shared attachments folder.
    #[must_use]
    pub fn resolve(note_folder: &str, folder_name: &str, file_name: &str) -> Self {
        let folder = join(note_folder, folder_name);
        let file_path = join(&folder, file_name);
        Self {
            folder,
            file_path,
            link_target: format!("{folder_name}/{file_name}"),
        }
    }

    /// Create the attachments folder unless an entry already exists at its
    /// path. An existing entry counts as success; creation is one level deep,
    /// the note's own folder is assumed to exist.
    ///
    /// # Errors
    ///
    /// Returns `FolderCreationFailed` if the store rejects the creation.
    pub fn ensure_folder(&self, store: &dyn FileStore) -> InsertResult<()> {
        if store.exists(&self.folder) {
            return Ok(());
        }
        if store.create_folder(&self.folder) {
            Ok(())
        } else {
            Err(InsertError::folder_creation_failed(
                &self.folder,
                "store rejected the folder creation",
            ))
        }
    }

    /// The embed link inserted into the note
    #[must_use]
    pub fn embed_link(&self) -> String {
        format!("![[{}]]", self.link_target)
    }
}

/// Join vault-relative segments. The vault root is written as `""` or `"/"`
/// by hosts; both collapse to the bare name.
fn join(base: &str, name: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryFileStore;

    #[test]
    fn resolves_paths_next_to_the_note() {
        let placement = AttachmentPlacement::resolve("notes/daily", "attachments", "diagram.svg");

        assert_eq!(placement.folder, "notes/daily/attachments");
        assert_eq!(placement.file_path, "notes/daily/attachments/diagram.svg");
        assert_eq!(placement.link_target, "attachments/diagram.svg");
    }

    #[test]
    fn resolves_paths_for_notes_at_the_vault_root() {
        for root in ["", "/"] {
            let placement = AttachmentPlacement::resolve(root, "attachments", "diagram.svg");
            assert_eq!(placement.folder, "attachments");
            assert_eq!(placement.file_path, "attachments/diagram.svg");
        }
    }

    #[test]
    fn embed_link_uses_the_folder_relative_target() {
        let placement = AttachmentPlacement::resolve("notes", "attachments", "mymap.xmind");
        assert_eq!(placement.embed_link(), "![[attachments/mymap.xmind]]");
    }

    #[test]
    fn ensure_folder_creates_once_and_tolerates_existing() {
        let store = MemoryFileStore::new();
        let placement = AttachmentPlacement::resolve("notes", "attachments", "diagram.svg");

        placement.ensure_folder(&store).unwrap();
        assert!(store.has_folder("notes/attachments"));

        // second invocation sees the folder and succeeds without touching it
        placement.ensure_folder(&store).unwrap();
        assert!(store.has_folder("notes/attachments"));
    }

    #[test]
    fn ensure_folder_surfaces_store_rejection() {
        #[derive(Debug, Default)]
        struct ReadOnlyStore(MemoryFileStore);

        impl FileStore for ReadOnlyStore {
            fn exists(&self, path: &str) -> bool {
                self.0.exists(path)
            }
            fn create_folder(&self, _path: &str) -> bool {
                false
            }
            fn create_text(&self, _path: &str, _content: &str) -> bool {
                false
            }
            fn create_binary(&self, _path: &str, _data: &[u8]) -> bool {
                false
            }
            fn read_binary(&self, path: &str) -> Option<Vec<u8>> {
                self.0.read_binary(path)
            }
            fn absolute_path(&self, path: &str) -> String {
                self.0.absolute_path(path)
            }
        }

        let store = ReadOnlyStore::default();
        let placement = AttachmentPlacement::resolve("notes", "attachments", "diagram.svg");

        let err = placement.ensure_folder(&store).unwrap_err();
        assert!(matches!(err, InsertError::FolderCreationFailed { .. }));
    }
}
