//! In-memory streams for driving the controller without a terminal.
//!
//! [`MockRenderStream`] keeps every frame it was given. A
//! [`MockRenderHandle`] taken before the stream is moved into a controller
//! reads them back.

use super::{EventStream, RenderStream, TerminalMode, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Replays a fixed list of events, then reports no input
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl EventStream for MockEventStream {
    fn next_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        Ok(self.events.pop_front())
    }
}

#[derive(Debug, Default)]
struct Screen {
    /// Finished frames, oldest first
    frames: Vec<String>,
    /// Bytes of the frame being drawn
    pending: Vec<u8>,
    modes: Vec<TerminalMode>,
}

pub struct MockRenderStream {
    screen: Arc<Mutex<Screen>>,
    size: TerminalSize,
}

impl MockRenderStream {
    /// 80x24 screen
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::default())),
            size,
        }
    }

    pub fn handle(&self) -> MockRenderHandle {
        MockRenderHandle {
            screen: Arc::clone(&self.screen),
        }
    }

    fn with_screen<T>(&self, f: impl FnOnce(&mut Screen) -> T) -> Result<T> {
        let mut screen = self
            .screen
            .lock()
            .map_err(|_| anyhow::anyhow!("mock screen lock poisoned"))?;
        Ok(f(&mut screen))
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.with_screen(|screen| screen.pending.extend_from_slice(buf))
            .map_err(std::io::Error::other)?;
        Ok(buf.len())
    }

    /// A flush completes the pending frame
    fn flush(&mut self) -> std::io::Result<()> {
        self.with_screen(|screen| {
            let frame = String::from_utf8_lossy(&screen.pending).into_owned();
            screen.pending.clear();
            screen.frames.push(frame);
        })
        .map_err(std::io::Error::other)
    }
}

impl RenderStream for MockRenderStream {
    fn size(&self) -> Result<TerminalSize> {
        Ok(self.size)
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.with_screen(|screen| screen.pending.clear())
    }

    fn set_mode(&mut self, mode: TerminalMode) -> Result<()> {
        self.with_screen(|screen| screen.modes.push(mode))
    }
}

/// Read side of a [`MockRenderStream`]
#[derive(Clone)]
pub struct MockRenderHandle {
    screen: Arc<Mutex<Screen>>,
}

impl MockRenderHandle {
    pub fn frame_count(&self) -> usize {
        self.read(|screen| screen.frames.len())
    }

    /// Most recent flushed frame, escape sequences included
    pub fn last_frame(&self) -> Option<String> {
        self.read(|screen| screen.frames.last().cloned())
    }

    /// Terminal mode switches in order
    pub fn modes(&self) -> Vec<TerminalMode> {
        self.read(|screen| screen.modes.clone())
    }

    fn read<T: Default>(&self, f: impl FnOnce(&Screen) -> T) -> T {
        self.screen.lock().map(|screen| f(&screen)).unwrap_or_default()
    }
}
