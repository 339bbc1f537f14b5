//! Decoupled logging pipeline for benchmark runs.
//!
//! The report goes to stdout; diagnostics go through this collector to stderr
//! so the two never interleave mid-line.
//!
//! ```text
//! log::info!() / log::debug!()
//!     |
//! [LogCollector] (non-blocking send)
//!     | (crossbeam unbounded channel)
//!     v
//! [writer thread] -> stderr (or any Write sink)
//! ```
//!
//! A flush marker travels down the same channel, so `wait_for_empty` returns
//! only after every earlier line has been written.

use chrono::Local;
use crossbeam_channel::{unbounded, Sender};
use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

/// Internal log line or special marker
enum LogMessage {
    Line(LogLine),
    /// Flush marker with channel sender to signal completion
    Flush(std::sync::mpsc::Sender<()>),
}

/// A log line with metadata
#[derive(Clone, Debug)]
pub struct LogLine {
    pub message: String,
    pub level: log::Level,
    /// Wall-clock time the record was created
    pub timestamp: String,
}

impl LogLine {
    pub fn new(level: log::Level, message: String) -> Self {
        LogLine {
            message,
            level,
            timestamp: Local::now().format("%H:%M:%S%.3f").to_string(),
        }
    }

    /// `[HH:MM:SS.mmm] [LEVEL] message`
    pub fn format(&self) -> String {
        format!("[{}] [{}] {}", self.timestamp, self.level, self.message)
    }
}

/// Logger that hands records to a background writer thread.
#[derive(Clone)]
pub struct LogCollector {
    tx: Sender<LogMessage>,
    max_level: LevelFilter,
}

impl LogCollector {
    /// Collector writing to stderr.
    pub fn new(max_level: LevelFilter) -> Self {
        Self::with_sink(max_level, Box::new(std::io::stderr()))
    }

    /// Collector writing to an arbitrary sink.
    pub fn with_sink(max_level: LevelFilter, mut sink: Box<dyn Write + Send>) -> Self {
        let (tx, rx) = unbounded::<LogMessage>();

        // Plain OS thread: blocking recv() until every sender is dropped
        std::thread::spawn(move || {
            while let Ok(msg) = rx.recv() {
                match msg {
                    LogMessage::Line(line) => {
                        let _ = writeln!(sink, "{}", line.format());
                    }
                    LogMessage::Flush(done) => {
                        let _ = sink.flush();
                        let _ = done.send(());
                    }
                }
            }
            let _ = sink.flush();
        });

        LogCollector { tx, max_level }
    }

    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }

    /// Queue a line (non-blocking, cannot fail while the writer lives)
    pub fn log_line(&self, line: LogLine) {
        let _ = self.tx.send(LogMessage::Line(line));
    }

    /// Block until every line queued before this call has been written.
    pub fn wait_for_empty(&self) -> Result<(), String> {
        let (tx, rx) = std::sync::mpsc::channel::<()>();
        self.tx
            .send(LogMessage::Flush(tx))
            .map_err(|e| format!("Failed to send flush marker: {}", e))?;
        rx.recv()
            .map_err(|e| format!("Flush signal interrupted: {}", e))
    }
}

/// Wires all log::info!(), log::warn!(), log::debug!() calls into LogCollector
impl Log for LogCollector {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.log_line(LogLine::new(record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {
        let _ = self.wait_for_empty();
    }
}
