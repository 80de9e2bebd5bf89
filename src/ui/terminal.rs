//! Terminal renderers: plain text or one JSON object per line.

use super::Renderer;
use crate::calculator::Snapshot;
use crate::config::DisplayConfig;
use crate::history::HistoryItem;
use serde_json::json;
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

/// Writes snapshots to a terminal (or any writer).
///
/// Snapshots are buffered and only the latest one is written on `flush`, so a
/// line of several keystrokes produces a single readout. A buffered snapshot
/// is written before any history view or message so output stays in order.
pub struct TerminalRenderer<W: Write> {
    out: W,
    mode: OutputMode,
    display: DisplayConfig,
    latest: Option<Snapshot>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, mode: OutputMode, display: DisplayConfig) -> Self {
        Self {
            out,
            mode,
            display,
            latest: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_snapshot(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        match self.mode {
            OutputMode::Json => writeln!(self.out, "{}", serde_json::to_string(snapshot)?),
            OutputMode::Text => {
                if self.display.show_pending_operation
                    && let Some(label) = &snapshot.pending_operation_label
                {
                    writeln!(self.out, "  {label}")?;
                }
                writeln!(self.out, "= {}", snapshot.display_text)
            }
        }
    }

    fn write_pending(&mut self) -> io::Result<()> {
        match self.latest.take() {
            Some(snapshot) => self.write_snapshot(&snapshot),
            None => Ok(()),
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot) {
        self.latest = Some(snapshot.clone());
    }

    fn show_history(&mut self, history: &[HistoryItem]) -> io::Result<()> {
        self.write_pending()?;
        if self.mode == OutputMode::Json {
            return writeln!(self.out, "{}", json!({ "history": history }));
        }

        writeln!(self.out, "History")?;
        if history.is_empty() {
            return writeln!(self.out, "  No calculations yet");
        }
        for (position, item) in history.iter().enumerate() {
            let marker = if item.is_error() { " !" } else { "" };
            writeln!(
                self.out,
                "  [{}] {} = {}{}  ({})",
                position + 1,
                item.expression,
                item.result,
                marker,
                item.time_label(&self.display.time_format)
            )?;
        }
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.write_pending()?;
        match self.mode {
            OutputMode::Json => writeln!(self.out, "{}", json!({ "message": message })),
            OutputMode::Text => writeln!(self.out, "{message}"),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_pending()?;
        self.out.flush()
    }
}
