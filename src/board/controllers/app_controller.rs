//! # Board Application Controller
//!
//! Owns the state, the interaction log and the terminal, and runs the event
//! loop. Key presses become messages through the command registry; fetch
//! tasks send messages over a channel. Every message goes through
//! [`update`], and the controller runs the effects it returns.

use crate::board::{
    commands::{CommandContext, CommandRegistry},
    events::Message,
    io::{EventStream, RenderStream, TerminalEventStream, TerminalMode, TerminalRenderStream},
    models::InteractionLog,
    services::{FetchRunner, PostsClient},
    state::{update, BoardState, Effect},
    views::{TerminalRenderer, ViewRenderer},
};
use crate::config::Settings;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::io::Stdout;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long one loop iteration waits for terminal input
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream> {
    state: BoardState,
    interaction_log: InteractionLog,
    command_registry: CommandRegistry,
    fetch_runner: FetchRunner,
    fetch_results: mpsc::Receiver<Message>,
    startup_effects: Vec<Effect>,
    view_renderer: TerminalRenderer<RS>,
    event_stream: ES,
    should_quit: bool,
}

impl AppController<TerminalEventStream, TerminalRenderStream<Stdout>> {
    /// Controller on the real terminal
    pub fn new(settings: &Settings, interaction_log: InteractionLog) -> Result<Self> {
        Self::with_io_streams(
            settings,
            interaction_log,
            TerminalEventStream::new(),
            TerminalRenderStream::new(),
        )
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create a controller with injected I/O streams
    pub fn with_io_streams(
        settings: &Settings,
        interaction_log: InteractionLog,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let client = PostsClient::new(settings.base_url.clone(), settings.request_timeout)?;
        let (fetch_runner, fetch_results) = FetchRunner::new(client);
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let (state, startup_effects) = BoardState::init(settings.items_per_page);
        let (width, height) = view_renderer.terminal_size();
        let (state, _) = update(state, Message::ViewportResized { width, height });

        tracing::debug!(
            "Controller created for {} with {} posts per page",
            settings.base_url,
            settings.items_per_page
        );

        Ok(Self {
            state,
            interaction_log,
            command_registry: CommandRegistry::new(),
            fetch_runner,
            fetch_results,
            startup_effects,
            view_renderer,
            event_stream,
            should_quit: false,
        })
    }

    /// Run the event loop until quit, restoring the terminal afterwards
    pub async fn run(&mut self) -> Result<()> {
        self.enter_terminal()?;
        let result = self.event_loop().await;
        let restored = self.leave_terminal();
        result.and(restored)
    }

    /// Run the startup effects (log the start and fetch the post list)
    ///
    /// Does nothing after the first call.
    pub fn start(&mut self) {
        for effect in std::mem::take(&mut self.startup_effects) {
            self.run_effect(effect);
        }
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.start();
        self.render()?;

        while !self.should_quit {
            let mut dirty = self.drain_fetch_results();

            match self.event_stream.next_event(INPUT_POLL_INTERVAL)? {
                Some(Event::Key(key_event)) => {
                    tracing::debug!("Received key event: {:?}", key_event);
                    self.process_key_event(key_event)?;
                    dirty = true;
                }
                Some(Event::Resize(width, height)) => {
                    self.view_renderer.update_size(width, height);
                    self.dispatch(Message::ViewportResized { width, height });
                    dirty = true;
                }
                _ => {}
            }

            if dirty && !self.should_quit {
                self.render()?;
            }

            // Lets fetch tasks progress on a single-threaded runtime
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    fn enter_terminal(&mut self) -> Result<()> {
        self.view_renderer
            .render_stream_mut()
            .set_mode(TerminalMode::Board)
    }

    fn leave_terminal(&mut self) -> Result<()> {
        self.view_renderer
            .render_stream_mut()
            .set_mode(TerminalMode::Shell)
    }

    fn render(&mut self) -> Result<()> {
        self.view_renderer
            .render_full(&self.state, &self.interaction_log)
    }

    /// Dispatch every fetch result already waiting; true if any arrived
    fn drain_fetch_results(&mut self) -> bool {
        let mut received = false;
        while let Ok(message) = self.fetch_results.try_recv() {
            self.dispatch(message);
            received = true;
        }
        received
    }

    /// Wait for the next fetch result and dispatch it
    ///
    /// Returns false when no fetch can report any more.
    pub async fn await_fetch_result(&mut self) -> bool {
        match self.fetch_results.recv().await {
            Some(message) => {
                self.dispatch(message);
                true
            }
            None => false,
        }
    }

    /// Map a key press to messages and dispatch them
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.kind == KeyEventKind::Release {
            return Ok(());
        }
        let context = CommandContext::from_state(&self.state);
        let messages = self.command_registry.process_event(key_event, &context)?;
        for message in messages {
            self.dispatch(message);
        }
        Ok(())
    }

    /// Apply one message and run the effects it produces
    pub fn dispatch(&mut self, message: Message) {
        let placeholder = BoardState::new(self.state.items_per_page());
        let (state, effects) = update(std::mem::replace(&mut self.state, placeholder), message);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchPosts => {
                self.fetch_runner.spawn_posts_load();
            }
            Effect::FetchDetail { post_id, ticket } => {
                self.fetch_runner.spawn_detail_load(post_id, ticket);
            }
            Effect::RecordInteraction(message) => self.interaction_log.log(message),
            Effect::Quit => {
                tracing::debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn interaction_log(&self) -> &InteractionLog {
        &self.interaction_log
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
