//! # Post Commands
//!
//! Viewing and deleting the highlighted post.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext};
use crate::board::events::Message;

/// Open the detail view of the highlighted post (Enter or v)
pub struct ViewPostCommand;

impl Command for ViewPostCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_browsing_list()
            && context.state.highlighted_post_id.is_some()
            && event.modifiers.is_empty()
            && matches!(event.code, KeyCode::Enter | KeyCode::Char('v'))
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<Message>> {
        Ok(context
            .state
            .highlighted_post_id
            .map(|post_id| Message::ViewPost { post_id })
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "ViewPost"
    }
}

/// Delete the highlighted post from the session (d or Delete)
pub struct DeletePostCommand;

impl Command for DeletePostCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_browsing_list()
            && context.state.highlighted_post_id.is_some()
            && event.modifiers.is_empty()
            && matches!(event.code, KeyCode::Char('d') | KeyCode::Delete)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<Message>> {
        Ok(context
            .state
            .highlighted_post_id
            .map(|post_id| Message::DeletePost { post_id })
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "DeletePost"
    }
}
