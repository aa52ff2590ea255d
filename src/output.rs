//! Rename reporting
//!
//! The traversal reports each performed rename to a `RenameSink`. Two
//! reporters are provided: `ConsoleReporter` streams one log line per
//! rename to stdout, and `JsonReporter` buffers events and prints a single
//! JSON document at the end of the run.

use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::renamer::{EntryKind, RenameEvent, RenameSummary};

/// Callback for the rename traversal - receives each performed rename.
pub trait RenameSink {
    fn record(&mut self, event: &RenameEvent) -> io::Result<()>;
}

/// Event collector for tests.
impl RenameSink for Vec<RenameEvent> {
    fn record(&mut self, event: &RenameEvent) -> io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

/// Configuration for console output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Suppress per-rename log lines and the trailing summary.
    pub quiet: bool,
}

/// Streams one `Renamed {directory|file} '<old>' to '<new>'` line per
/// rename directly to stdout.
pub struct ConsoleReporter {
    config: OutputConfig,
    stdout: StandardStream,
}

impl ConsoleReporter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Print the trailing summary line unless quiet.
    pub fn finish(&mut self, summary: &RenameSummary) -> io::Result<()> {
        if self.config.quiet {
            return Ok(());
        }
        self.stdout.reset()?;
        writeln!(
            self.stdout,
            "\n{} directories, {} files renamed",
            summary.directories, summary.files
        )
    }
}

impl RenameSink for ConsoleReporter {
    fn record(&mut self, event: &RenameEvent) -> io::Result<()> {
        if self.config.quiet {
            return Ok(());
        }
        let color = match event.kind {
            EntryKind::Directory => Color::Blue,
            EntryKind::File => Color::Green,
        };
        self.stdout.reset()?;
        write!(
            self.stdout,
            "Renamed {} '{}' to '",
            event.kind.label(),
            event.old_name
        )?;
        self.stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.stdout, "{}", event.new_name)?;
        self.stdout.reset()?;
        writeln!(self.stdout, "'")
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    renames: &'a [RenameEvent],
    summary: &'a RenameSummary,
}

/// Buffers rename events and prints one pretty-printed JSON report.
#[derive(Default)]
pub struct JsonReporter {
    events: Vec<RenameEvent>,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the full report as pretty-printed JSON.
    pub fn render(&self, summary: &RenameSummary) -> io::Result<String> {
        let report = JsonReport {
            renames: &self.events,
            summary,
        };
        serde_json::to_string_pretty(&report)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }

    /// Print the report to stdout.
    pub fn print(&self, summary: &RenameSummary) -> io::Result<()> {
        println!("{}", self.render(summary)?);
        Ok(())
    }
}

impl RenameSink for JsonReporter {
    fn record(&mut self, event: &RenameEvent) -> io::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
