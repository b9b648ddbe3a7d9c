use std::fmt::Debug;

/// Modal title shown by the host
pub const PROMPT_TITLE: &str = "Enter File Name";
/// Placeholder text for the input field
pub const PROMPT_PLACEHOLDER: &str = "Filename (e.g., diagram.svg)";

/// What the host's single-field modal yielded
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum PromptOutcome {
    /// The user accepted the field content (may be empty)
    Submitted(String),
    /// The modal was dismissed without submitting
    Cancelled,
}

/// Single-field modal prompt as the host exposes it to the plugin
#[uniffi::export(with_foreign)]
pub trait PromptUi: Send + Sync + Debug {
    /// Show the modal and block until the user submits or dismisses it
    fn show(&self, title: &str, placeholder: &str) -> PromptOutcome;
}

/// Collects a file name for a fixed extension through the host's modal.
///
/// An accepted empty field is a no-op: the prompt is shown again, matching a
/// modal that simply stays open. The accepted text is passed through
/// verbatim, with no character validation; illegal names surface later as
/// placement failures.
#[derive(Debug, Clone)]
pub struct FileNamePrompt {
    extension: String,
}

impl FileNamePrompt {
    #[must_use]
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Ask for a base name and return `<name><extension>`, or `None` when the
    /// user dismissed the modal.
    #[must_use]
    pub fn ask(&self, ui: &dyn PromptUi) -> Option<String> {
        loop {
            match ui.show(PROMPT_TITLE, PROMPT_PLACEHOLDER) {
                PromptOutcome::Submitted(value) if value.is_empty() => {}
                PromptOutcome::Submitted(value) => {
                    return Some(format!("{value}{}", self.extension));
                }
                PromptOutcome::Cancelled => return None,
            }
        }
    }
}
