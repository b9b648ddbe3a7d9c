use crate::models::DiagramKind;

/// Palette id of the draw.io insertion command
pub const INSERT_DRAW_IO: &str = "insert-draw-io";
/// Palette id of the xmind insertion command
pub const INSERT_XMIND: &str = "insert-xmind";

/// A command palette entry the plugin contributes to the host
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct Command {
    pub id: String,
    pub name: String,
    pub kind: DiagramKind,
}

/// Registry of the commands this plugin contributes
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// The built-in palette entries
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            commands: vec![
                Command {
                    id: INSERT_DRAW_IO.to_string(),
                    name: "Insert draw.io".to_string(),
                    kind: DiagramKind::DrawIo,
                },
                Command {
                    id: INSERT_XMIND.to_string(),
                    name: "Insert xmind".to_string(),
                    kind: DiagramKind::XMind,
                },
            ],
        }
    }

    /// Look up a command by its palette id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.id == id)
    }

    /// All registered palette ids
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.commands.iter().map(|c| c.id.clone()).collect()
    }

    /// All registered commands
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
