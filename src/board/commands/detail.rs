//! # Detail Screen Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext};
use crate::board::events::{Direction, Message, Screen};

/// Return to the list (Esc, Backspace, b or q)
pub struct GoBackCommand;

impl Command for GoBackCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.screen == Screen::Detail
            && event.modifiers.is_empty()
            && matches!(
                event.code,
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('q')
            )
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<Message>> {
        Ok(vec![Message::GoBack])
    }

    fn name(&self) -> &'static str {
        "GoBack"
    }
}

/// Scroll the detail view (j/k or arrow keys)
pub struct ScrollDetailCommand;

impl ScrollDetailCommand {
    fn direction(event: &KeyEvent) -> Option<Direction> {
        if !event.modifiers.is_empty() {
            return None;
        }
        match event.code {
            KeyCode::Char('k') | KeyCode::Up => Some(Direction::Up),
            KeyCode::Char('j') | KeyCode::Down => Some(Direction::Down),
            _ => None,
        }
    }
}

impl Command for ScrollDetailCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.screen == Screen::Detail && Self::direction(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<Message>> {
        Ok(Self::direction(&event)
            .map(Message::DetailScrolled)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "ScrollDetail"
    }
}
