//! Presentation adapter around the calculator engine.
//!
//! A [`Session`] owns an engine and a [`Renderer`]. Every intent is handed to
//! the engine and the resulting snapshot is forwarded to the renderer; the
//! renderer decides how and when to draw it.

pub mod keys;
pub mod terminal;

pub use keys::{Command, HELP, ParseKeyError, parse_line};
pub use terminal::{OutputMode, TerminalRenderer};

use crate::calculator::{CalculatorEngine, ClipboardError, Intent, Snapshot, copy_to_clipboard};
use crate::history::HistoryItem;
use std::io;

/// Callback surface the session pushes calculator state to.
pub trait Renderer {
    /// Called with the new snapshot after every intent.
    fn render(&mut self, snapshot: &Snapshot);

    /// Show the history view.
    fn show_history(&mut self, history: &[HistoryItem]) -> io::Result<()>;

    /// Show a one-off message (errors, help, confirmations).
    fn show_message(&mut self, message: &str) -> io::Result<()>;

    /// Called once a batch of input has been handled.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Whether the session should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Clipboard writer used by [`Session`].
pub type ClipboardFn = Box<dyn Fn(&str) -> Result<(), ClipboardError>>;

pub struct Session<R: Renderer> {
    engine: CalculatorEngine,
    renderer: R,
    copy_on_equals: bool,
    clipboard: ClipboardFn,
}

impl<R: Renderer> Session<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            renderer,
            copy_on_equals: false,
            clipboard: Box::new(copy_to_clipboard),
        }
    }

    /// Replace the system clipboard with another writer.
    pub fn set_clipboard(
        &mut self,
        clipboard: impl Fn(&str) -> Result<(), ClipboardError> + 'static,
    ) {
        self.clipboard = Box::new(clipboard);
    }

    /// Copy every equals result to the clipboard.
    pub fn with_copy_on_equals(mut self, enable: bool) -> Self {
        self.copy_on_equals = enable;
        self
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Dispatch an intent and forward the snapshot to the renderer.
    pub fn handle(&mut self, intent: Intent) -> Snapshot {
        let snapshot = self.engine.dispatch(intent);
        self.renderer.render(&snapshot);
        snapshot
    }

    /// Carry out a parsed command.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Intent(intent) => {
                let previous = self.engine.history().items().first().map(|item| item.id);
                let snapshot = self.handle(intent);
                // Only an equals that recorded a new calculation is copied.
                if self.copy_on_equals
                    && intent == Intent::Equals
                    && let Some(item) = snapshot.history.first()
                    && Some(item.id) != previous
                {
                    self.copy(&item.result)?;
                }
            }
            Command::UseHistory(position) => {
                let id = self
                    .engine
                    .history()
                    .items()
                    .get(position.wrapping_sub(1))
                    .map(|item| item.id);
                match id {
                    Some(id) => {
                        self.handle(Intent::SelectHistory(id));
                    }
                    None => self
                        .renderer
                        .show_message(&format!("No history entry {position}"))?,
                }
            }
            Command::ShowHistory => self.renderer.show_history(self.engine.history().items())?,
            Command::Copy => {
                let display = self.engine.state().display().to_string();
                if self.copy(&display)? {
                    self.renderer.show_message(&format!("Copied {display}"))?;
                }
            }
            Command::Help => self.renderer.show_message(HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parse and run one line of input, then flush the renderer.
    ///
    /// A line that does not parse is reported and otherwise ignored.
    pub fn run_line(&mut self, line: &str) -> io::Result<Flow> {
        match parse_line(line) {
            Ok(commands) => self.run_commands(commands),
            Err(e) => {
                tracing::warn!(line, "Ignoring input: {e}");
                self.renderer.show_message(&format!("error: {e}"))?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run already parsed commands in order, then flush the renderer.
    ///
    /// Stops at the first `quit`.
    pub fn run_commands(&mut self, commands: Vec<Command>) -> io::Result<Flow> {
        let mut flow = Flow::Continue;
        for command in commands {
            flow = self.execute(command)?;
            if flow == Flow::Quit {
                break;
            }
        }

        self.renderer.flush()?;
        Ok(flow)
    }

    /// Copy text to the clipboard.
    ///
    /// A failure is logged and shown to the user; returns whether the copy
    /// succeeded.
    fn copy(&mut self, text: &str) -> io::Result<bool> {
        match (self.clipboard)(text) {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::warn!("{e}");
                self.renderer.show_message(&format!("error: {e}"))?;
                Ok(false)
            }
        }
    }
}
