//! Optional JSON-lines session log.
//!
//! One JSON object per line, tagged by `type`: a `start` record with the
//! session settings, a `lock` record per frozen piece and a final `quit`.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::AppConfig;
use crate::core::LockEvent;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord<'a> {
    Start {
        seed: u32,
        cols: usize,
        rows: usize,
        drop_interval_ms: u32,
        line_clear: &'static str,
    },
    Lock {
        episode_id: u32,
        piece_id: u32,
        piece: &'static str,
        x: i32,
        y: i32,
        cleared_rows: &'a [usize],
        game_over: bool,
    },
    Quit {
        pieces: u32,
        episodes: u32,
    },
}

impl LogRecord<'static> {
    pub fn start(config: &AppConfig) -> Self {
        LogRecord::Start {
            seed: config.seed,
            cols: config.game.width,
            rows: config.game.height,
            drop_interval_ms: config.game.drop_interval_ms,
            line_clear: config.game.line_clear.as_str(),
        }
    }
}

impl<'a> LogRecord<'a> {
    /// `episode_id` is the game the piece belonged to.
    pub fn lock(episode_id: u32, event: &'a LockEvent) -> Self {
        LogRecord::Lock {
            episode_id,
            piece_id: event.piece_id,
            piece: event.kind.as_str(),
            x: event.x,
            y: event.y,
            cleared_rows: event.cleared_rows.as_slice(),
            game_over: event.game_over,
        }
    }
}

/// Appends records to a writer; a disabled log drops everything.
pub struct SessionLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl SessionLog {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening session log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Open `path` if given, otherwise return a disabled log.
    pub fn from_path(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }
}

impl<W: Write> SessionLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, record: &LogRecord<'_>) -> Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        out.write_all(&self.buf).context("writing session log")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(out) = self.out.as_mut() {
            out.flush().context("flushing session log")?;
        }
        Ok(())
    }

    /// Flush and hand back the writer.
    pub fn into_inner(mut self) -> Option<W> {
        self.flush().ok()?;
        self.out.take()
    }
}
