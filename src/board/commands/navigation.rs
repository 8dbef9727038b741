//! # Navigation Commands
//!
//! Moving the highlight and switching pages on the list screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext};
use crate::board::events::{Direction, Message};

/// Move the highlight (j/k or arrow keys)
pub struct MoveCursorCommand;

impl MoveCursorCommand {
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

impl Command for MoveCursorCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_browsing_list() && Self::direction(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<Message>> {
        Ok(Self::direction(&event)
            .map(Message::CursorMoved)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "MoveCursor"
    }
}

/// Step to the next or previous page (l/h, n/p or arrow keys)
pub struct StepPageCommand;

impl StepPageCommand {
    fn message(event: &KeyEvent) -> Option<Message> {
        if !event.modifiers.is_empty() {
            return None;
        }
        match event.code {
            KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => Some(Message::NextPage),
            KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left => {
                Some(Message::PreviousPage)
            }
            _ => None,
        }
    }
}

impl Command for StepPageCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_browsing_list() && Self::message(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<Message>> {
        Ok(Self::message(&event).into_iter().collect())
    }

    fn name(&self) -> &'static str {
        "StepPage"
    }
}

/// Jump to a page: 1-9 by digit, the first with g/Home, the last with G/End
pub struct JumpToPageCommand;

impl JumpToPageCommand {
    fn target(event: &KeyEvent, page_count: usize) -> Option<usize> {
        // Shift is allowed so that `G` arrives however the terminal reports it
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match event.code {
            KeyCode::Char('g') | KeyCode::Home => Some(1),
            KeyCode::Char('G') | KeyCode::End => Some(page_count),
            KeyCode::Char(ch @ '1'..='9') => ch.to_digit(10).map(|digit| digit as usize),
            _ => None,
        }
    }
}

impl Command for JumpToPageCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_browsing_list()
            && Self::target(event, context.state.page_count).is_some()
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<Message>> {
        let page_count = context.state.page_count;
        match Self::target(&event, page_count) {
            Some(page) if (1..=page_count).contains(&page) => Ok(vec![Message::PageSelected(page)]),
            target => {
                tracing::debug!("Page {:?} requested but only {} pages exist", target, page_count);
                Ok(vec![])
            }
        }
    }

    fn name(&self) -> &'static str {
        "JumpToPage"
    }
}
