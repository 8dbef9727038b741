//! # Terminal I/O
//!
//! The controller reads input and draws frames through these two traits, so
//! tests can swap the terminal for in-memory streams.
//!
//! ```text
//! AppController ──▶ EventStream  ──▶ crossterm events   | MockEventStream (queued events)
//!               ──▶ RenderStream ──▶ stdout             | MockRenderStream (recorded frames)
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderHandle, MockRenderStream};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// (columns, rows)
pub type TerminalSize = (u16, u16);

/// How the terminal is set up while postboard runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    /// Raw input, alternate screen, hidden cursor
    Board,
    /// Whatever the shell had before the board started
    Shell,
}

pub trait EventStream: Send {
    /// Next input event, or `None` if nothing arrives within `timeout`
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Frame output. Frame content is queued through `Write` and shown on flush.
pub trait RenderStream: Write + Send {
    fn size(&self) -> Result<TerminalSize>;

    /// Blank the screen for the next frame
    fn begin_frame(&mut self) -> Result<()>;

    fn set_mode(&mut self, mode: TerminalMode) -> Result<()>;
}
