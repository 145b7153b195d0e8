//! JSON-lines event log.
//!
//! Board events are sent over an mpsc channel to a writer thread, which
//! appends one JSON object per line. The board never waits on disk I/O.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::types::{BoardEvent, Gem};

/// One line of the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub seq: u64,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gem: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<[usize; 2]>,
}

impl EventRecord {
    pub fn new(seq: u64, event: &BoardEvent<Gem>) -> Self {
        let run = event.as_match();
        Self {
            seq,
            kind: event.kind(),
            gem: run.map(|r| r.matched.as_str()),
            axis: run.map(|r| r.axis.as_str()),
            positions: run
                .map(|r| r.positions.iter().map(|p| [p.row, p.col]).collect())
                .unwrap_or_default(),
        }
    }
}

/// Serialize one event as a JSON line.
pub fn write_record(out: &mut impl Write, seq: u64, event: &BoardEvent<Gem>) -> Result<()> {
    serde_json::to_writer(&mut *out, &EventRecord::new(seq, event))?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Handle to the writer thread.
///
/// The thread runs until every sender is dropped, including clones held by
/// board listeners, so drop the board before calling [`EventLog::finish`].
pub struct EventLog {
    tx: mpsc::Sender<BoardEvent<Gem>>,
    handle: JoinHandle<Result<u64>>,
}

impl EventLog {
    /// Open `path` for appending and start the writer thread.
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("event log: open {} failed", path.display()))?;

        let (tx, rx) = mpsc::channel::<BoardEvent<Gem>>();
        let handle = thread::spawn(move || {
            let mut out = BufWriter::new(file);
            let mut seq = 0u64;
            for event in rx {
                write_record(&mut out, seq, &event)?;
                seq += 1;
            }
            out.flush()?;
            Ok(seq)
        });

        Ok(Self { tx, handle })
    }

    pub fn sender(&self) -> mpsc::Sender<BoardEvent<Gem>> {
        self.tx.clone()
    }

    /// Close the channel and wait for the writer. Returns the number of records written.
    pub fn finish(self) -> Result<u64> {
        drop(self.tx);
        self.handle
            .join()
            .map_err(|_| anyhow!("event log: writer thread panicked"))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Axis, Match, Position};

    fn ruby_run() -> BoardEvent<Gem> {
        BoardEvent::Match(Match::new(
            Gem::Ruby,
            Axis::Vertical,
            vec![Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
        ))
    }

    #[test]
    fn match_record_has_positions() {
        let mut out = Vec::new();
        write_record(&mut out, 7, &ruby_run()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"seq\":7,\"kind\":\"match\",\"gem\":\"ruby\",\"axis\":\"vertical\",\"positions\":[[0,2],[1,2],[2,2]]}\n"
        );
    }

    #[test]
    fn refill_record_is_minimal() {
        let mut out = Vec::new();
        write_record(&mut out, 0, &BoardEvent::Refill).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"seq\":0,\"kind\":\"refill\"}\n"
        );
    }
}
