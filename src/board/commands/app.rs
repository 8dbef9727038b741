//! # Application Control Commands
//!
//! Commands for controlling the application lifecycle such as quit/terminate operations.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext};
use crate::board::events::Message;

/// Terminate application (Ctrl+C), on any screen
pub struct AppTerminateCommand;

impl Command for AppTerminateCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('c')) && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<Message>> {
        Ok(vec![Message::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "AppTerminate"
    }
}

/// Quit from the list screen (q)
pub struct QuitCommand;

impl Command for QuitCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_browsing_list()
            && event.code == KeyCode::Char('q')
            && event.modifiers.is_empty()
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<Message>> {
        Ok(vec![Message::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}
