use std::sync::Arc;

use crate::{
    editor::DocumentEditor,
    error::InsertResult,
    launcher::Launcher,
    models::{DiagramKind, InsertOutcome, InsertionRequest},
    placement::AttachmentPlacement,
    prompt::{FileNamePrompt, PromptUi},
    settings::Settings,
    store::FileStore,
    templates,
};

/// Runs the prompt → placement → template write → link insertion → external
/// launch sequence for one command invocation.
///
/// The editor cursor is frozen before the prompt opens and restored before
/// the link is written, so the link always lands where the command was
/// invoked, not wherever the cursor sits once the user finishes typing.
pub struct InsertionWorkflow {
    store: Arc<dyn FileStore>,
    editor: Arc<dyn DocumentEditor>,
    prompt: Arc<dyn PromptUi>,
    launcher: Arc<dyn Launcher>,
    settings: Settings,
}

impl InsertionWorkflow {
    #[must_use]
    pub fn new(
        store: Arc<dyn FileStore>,
        editor: Arc<dyn DocumentEditor>,
        prompt: Arc<dyn PromptUi>,
        launcher: Arc<dyn Launcher>,
    ) -> Self {
        Self::with_settings(store, editor, prompt, launcher, Settings::default())
    }

    #[must_use]
    pub fn with_settings(
        store: Arc<dyn FileStore>,
        editor: Arc<dyn DocumentEditor>,
        prompt: Arc<dyn PromptUi>,
        launcher: Arc<dyn Launcher>,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            editor,
            prompt,
            launcher,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Insert a diagram of `kind` next to the note living in `note_folder`.
    ///
    /// A dismissed prompt ends the invocation with `Cancelled` and zero side
    /// effects. A failed external launch is logged and reported through the
    /// outcome's `launched` flag; the file and link stay committed.
    ///
    /// # Errors
    ///
    /// Returns an `InsertError` when the attachments folder or the diagram
    /// file cannot be created; no link is inserted on any error path.
    pub fn insert(&self, kind: DiagramKind, note_folder: &str) -> InsertResult<InsertOutcome> {
        let cursor = self.editor.cursor();

        let Some(file_name) = FileNamePrompt::new(kind.extension()).ask(self.prompt.as_ref())
        else {
            log::debug!("file name prompt dismissed, nothing inserted");
            return Ok(InsertOutcome::Cancelled);
        };

        let request = InsertionRequest {
            kind,
            note_folder: note_folder.to_string(),
            file_name,
            cursor,
        };

        let result = self.materialize_and_link(&request);
        if let Err(err) = &result {
            log::error!("insert of {} failed: {err}", request.file_name);
        }
        result
    }

    fn materialize_and_link(&self, request: &InsertionRequest) -> InsertResult<InsertOutcome> {
        let placement = AttachmentPlacement::resolve(
            &request.note_folder,
            &self.settings.attachments_folder,
            &request.file_name,
        );

        placement.ensure_folder(self.store.as_ref())?;
        templates::materialize(request.kind, self.store.as_ref(), &placement.file_path)?;

        // the live cursor may have moved while the prompt was open
        self.editor.set_cursor(request.cursor);
        let link = placement.embed_link();
        self.editor.insert(&link);

        let absolute = self.store.absolute_path(&placement.file_path);
        let app_id = self.settings.app_id(request.kind);
        log::debug!("opening {absolute} with {app_id}");
        let launched = self.launcher.open(&absolute, app_id);
        if !launched {
            log::error!(
                "external launch of {app_id} failed for {absolute}; file and link remain in place"
            );
        }

        Ok(InsertOutcome::Inserted {
            path: placement.file_path,
            link,
            launched,
        })
    }
}
