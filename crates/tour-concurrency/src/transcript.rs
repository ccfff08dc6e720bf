//! Where exercise output goes.

use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug, Clone)]
enum Sink {
    Stdout,
    Capture(Arc<Mutex<Vec<String>>>),
}

/// A line-oriented output sink shared by every task of an exercise.
///
/// Cloning is cheap and clones write to the same place. Lines from
/// different tasks interleave in the order they are written.
#[derive(Debug, Clone)]
pub struct Transcript {
    sink: Sink,
}

impl Transcript {
    /// Print each line to standard output.
    pub fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    /// Keep lines in memory; read them back with [`Transcript::lines`].
    pub fn capture() -> Self {
        Self {
            sink: Sink::Capture(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Write one line.
    pub fn line(&self, line: impl Into<String>) {
        let line = line.into();
        tracing::trace!(%line, "transcript");
        match &self.sink {
            Sink::Stdout => println!("{line}"),
            Sink::Capture(lines) => lines.lock().push(line),
        }
    }

    /// Lines captured so far. Always empty for a stdout transcript.
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stdout => Vec::new(),
            Sink::Capture(lines) => lines.lock().clone(),
        }
    }

    /// Position of the first captured line equal to `line`.
    pub fn position(&self, line: &str) -> Option<usize> {
        self.lines().iter().position(|l| l == line)
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::stdout()
    }
}
