//! # Command Pattern Implementation
//!
//! Commands map key presses to [`Message`]s. They never change state
//! themselves; the controller feeds their messages to `state::update`.
//! This keeps commands small and the transition logic in one place.

use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod app;
pub mod context;
pub mod detail;
pub mod navigation;
pub mod posts;
pub mod search;

pub use app::{AppTerminateCommand, QuitCommand};
pub use context::{BoardSnapshot, CommandContext};
pub use detail::{GoBackCommand, ScrollDetailCommand};
pub use navigation::{JumpToPageCommand, MoveCursorCommand, StepPageCommand};
pub use posts::{DeletePostCommand, ViewPostCommand};
pub use search::{ClearSearchCommand, EditSearchCommand, EnterSearchCommand, ExitSearchCommand};

use crate::board::events::Message;

/// A key binding
pub trait Command: Send + Sync {
    /// Check if command is relevant for current state and event
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the messages for this key press
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<Message>>;

    /// Get command name for debugging
    fn name(&self) -> &'static str;
}

/// Type alias for command collection to reduce complexity
pub type CommandCollection = Vec<Box<dyn Command>>;

/// Registry that holds all available commands
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create new command registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register_default_commands();
        registry
    }

    /// Register all default commands
    ///
    /// Order matters: the first relevant command wins, so the search
    /// commands come before anything that binds printable keys.
    fn register_default_commands(&mut self) {
        self.add_command(Box::new(AppTerminateCommand));

        // Search mode
        self.add_command(Box::new(ExitSearchCommand));
        self.add_command(Box::new(ClearSearchCommand));
        self.add_command(Box::new(EditSearchCommand));

        // Detail screen
        self.add_command(Box::new(GoBackCommand));
        self.add_command(Box::new(ScrollDetailCommand));

        // List screen
        self.add_command(Box::new(QuitCommand));
        self.add_command(Box::new(EnterSearchCommand));
        self.add_command(Box::new(MoveCursorCommand));
        self.add_command(Box::new(StepPageCommand));
        self.add_command(Box::new(JumpToPageCommand));
        self.add_command(Box::new(ViewPostCommand));
        self.add_command(Box::new(DeletePostCommand));
    }

    /// Add a command to the registry
    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Run the first relevant command; no match yields no messages
    pub fn process_event(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<Message>> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                return command.execute(event, context);
            }
        }
        tracing::debug!("No command bound to key {:?}", event.code);
        Ok(Vec::new())
    }

    /// Get all commands (for testing/debugging)
    pub fn commands(&self) -> &CommandCollection {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
