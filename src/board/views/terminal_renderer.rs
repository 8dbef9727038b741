//! # Terminal Renderer
//!
//! Draws the frame produced by [`layout::screen_lines`] onto a
//! [`RenderStream`]. Every render is a full redraw.

use crate::board::io::{RenderStream, TerminalSize};
use crate::board::models::InteractionLog;
use crate::board::state::BoardState;
use crate::board::views::layout::{self, LineStyle, StyledLine};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! queue_term {
    ($($arg:expr),* $(,)?) => {
        queue!($($arg),*).map_err(anyhow::Error::from)
    };
}

/// Trait for rendering views
pub trait ViewRenderer {
    /// Redraw the whole screen from state
    fn render_full(&mut self, state: &BoardState, log: &InteractionLog) -> Result<()>;

    fn update_size(&mut self, width: u16, height: u16);

    fn terminal_size(&self) -> TerminalSize;
}

/// Crossterm renderer over any [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: TerminalSize,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    /// Mutable access for terminal mode switches done by the controller
    pub fn render_stream_mut(&mut self) -> &mut RS {
        &mut self.render_stream
    }

    fn draw_line(&mut self, row: u16, line: &StyledLine) -> Result<()> {
        queue_term!(self.render_stream, MoveTo(0, row))?;
        match line.style {
            LineStyle::Normal => {}
            LineStyle::Title => queue_term!(self.render_stream, SetAttribute(Attribute::Bold))?,
            LineStyle::Dim => {
                queue_term!(self.render_stream, SetForegroundColor(Color::DarkGrey))?
            }
            LineStyle::Highlight => {
                queue_term!(self.render_stream, SetAttribute(Attribute::Reverse))?
            }
        }
        queue_term!(
            self.render_stream,
            Print(&line.text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn render_full(&mut self, state: &BoardState, log: &InteractionLog) -> Result<()> {
        let lines = layout::screen_lines(state, log, self.terminal_size);
        self.render_stream.begin_frame()?;
        for (row, line) in (0u16..).zip(lines.iter()) {
            self.draw_line(row, line)?;
        }
        self.render_stream.flush()?;
        Ok(())
    }

    fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }
}
