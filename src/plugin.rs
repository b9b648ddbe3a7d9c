//! `UniFFI` surface the host application binds against
//!
//! The host constructs the plugin with its capability implementations and
//! registers the returned palette commands; invocations come back through
//! `run_command` with the active note's parent folder.

use std::sync::Arc;

use crate::{
    commands::{Command, CommandRegistry},
    editor::DocumentEditor,
    error::{QuickInsertError, QuickInsertResult},
    launcher::Launcher,
    models::{DiagramKind, InsertOutcome},
    prompt::PromptUi,
    settings::Settings,
    store::FileStore,
    workflow::InsertionWorkflow,
};

/// The diagram quick-insert plugin
#[derive(uniffi::Object)]
pub struct QuickInsertPlugin {
    registry: CommandRegistry,
    workflow: InsertionWorkflow,
}

#[uniffi::export]
impl QuickInsertPlugin {
    /// Create the plugin with default settings
    #[uniffi::constructor]
    #[must_use]
    pub fn new(
        store: Arc<dyn FileStore>,
        editor: Arc<dyn DocumentEditor>,
        prompt: Arc<dyn PromptUi>,
        launcher: Arc<dyn Launcher>,
    ) -> Self {
        Self {
            registry: CommandRegistry::builtin(),
            workflow: InsertionWorkflow::new(store, editor, prompt, launcher),
        }
    }

    /// Create the plugin with settings restored from the host's JSON blob
    ///
    /// # Errors
    ///
    /// Returns an error if the blob is not valid settings JSON.
    #[uniffi::constructor]
    pub fn with_settings_json(
        store: Arc<dyn FileStore>,
        editor: Arc<dyn DocumentEditor>,
        prompt: Arc<dyn PromptUi>,
        launcher: Arc<dyn Launcher>,
        raw: &str,
    ) -> QuickInsertResult<Self> {
        let settings = Settings::from_json(raw)?;
        Ok(Self {
            registry: CommandRegistry::builtin(),
            workflow: InsertionWorkflow::with_settings(store, editor, prompt, launcher, settings),
        })
    }

    /// Command palette entries to register with the host
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        self.registry.commands().to_vec()
    }

    /// Dispatch a palette command against the note living in `note_folder`
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` for ids this plugin does not contribute, and
    /// any insertion failure from the underlying workflow.
    pub fn run_command(&self, id: &str, note_folder: &str) -> QuickInsertResult<InsertOutcome> {
        let command = self
            .registry
            .get(id)
            .ok_or_else(|| QuickInsertError::unknown_command(id))?;
        Ok(self.workflow.insert(command.kind, note_folder)?)
    }

    /// Insert a draw.io stub next to the note in `note_folder`
    ///
    /// # Errors
    ///
    /// Returns any insertion failure from the underlying workflow.
    pub fn insert_draw_io(&self, note_folder: &str) -> QuickInsertResult<InsertOutcome> {
        Ok(self.workflow.insert(DiagramKind::DrawIo, note_folder)?)
    }

    /// Insert an xmind template copy next to the note in `note_folder`
    ///
    /// # Errors
    ///
    /// Returns any insertion failure from the underlying workflow.
    pub fn insert_xmind(&self, note_folder: &str) -> QuickInsertResult<InsertOutcome> {
        Ok(self.workflow.insert(DiagramKind::XMind, note_folder)?)
    }

    /// The settings the plugin is running with, for the host's settings UI
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.workflow.settings().clone()
    }
}
