//! Crossterm-backed streams used outside of tests.

use super::{EventStream, RenderStream, TerminalMode, TerminalSize};
use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Draws onto a terminal writer, stdout unless a test supplies one
pub struct TerminalRenderStream<W: Write> {
    out: W,
}

impl TerminalRenderStream<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderStream<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn size(&self) -> Result<TerminalSize> {
        Ok(terminal::size()?)
    }

    fn begin_frame(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        Ok(())
    }

    fn set_mode(&mut self, mode: TerminalMode) -> Result<()> {
        match mode {
            TerminalMode::Board => {
                terminal::enable_raw_mode()?;
                execute!(self.out, EnterAlternateScreen, cursor::Hide)?;
            }
            TerminalMode::Shell => {
                // Raw mode goes even when the screen switch fails
                let restored = execute!(self.out, cursor::Show, LeaveAlternateScreen);
                terminal::disable_raw_mode()?;
                restored?;
            }
        }
        Ok(())
    }
}
