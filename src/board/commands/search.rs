//! # Search Commands
//!
//! Entering, editing and leaving the search term on the list screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext};
use crate::board::events::Message;

/// Start editing the search term (/)
pub struct EnterSearchCommand;

impl Command for EnterSearchCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_browsing_list() && event.code == KeyCode::Char('/')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<Message>> {
        Ok(vec![Message::SearchModeEntered])
    }

    fn name(&self) -> &'static str {
        "EnterSearch"
    }
}

/// Leave search mode, keeping the term (Enter or Esc)
pub struct ExitSearchCommand;

impl Command for ExitSearchCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_searching() && matches!(event.code, KeyCode::Enter | KeyCode::Esc)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<Message>> {
        Ok(vec![Message::SearchModeExited])
    }

    fn name(&self) -> &'static str {
        "ExitSearch"
    }
}

/// Clear the whole search term (Ctrl+U)
pub struct ClearSearchCommand;

impl Command for ClearSearchCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_searching()
            && event.code == KeyCode::Char('u')
            && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<Message>> {
        Ok(vec![Message::SearchCleared])
    }

    fn name(&self) -> &'static str {
        "ClearSearch"
    }
}

/// Type into or erase from the search term
pub struct EditSearchCommand;

impl Command for EditSearchCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        if !context.state.is_searching() {
            return false;
        }
        match event.code {
            KeyCode::Backspace => true,
            // Uppercase letters arrive with SHIFT
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT).is_empty(),
            _ => false,
        }
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<Message>> {
        match event.code {
            KeyCode::Backspace => Ok(vec![Message::SearchBackspace]),
            KeyCode::Char(ch) => Ok(vec![Message::SearchInput(ch)]),
            _ => Ok(vec![]),
        }
    }

    fn name(&self) -> &'static str {
        "EditSearch"
    }
}
