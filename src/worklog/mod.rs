//! The persisted work log (`~/.worklog`)
//!
//! This tool only ever appends. Structured timestamp entries are written by
//! the forwarded script; history blocks are written here.

pub(crate) mod history;
pub(crate) mod timestamp;

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::consts::LOG_FILE_NAME;
use crate::error::AppError;

pub(crate) use history::{HistorySource, HistoryWindow};

/// Last timestamp-pattern line of the log, used as the editor anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TimestampAnchor {
    /// 1-based line number
    pub(crate) line: usize,
    pub(crate) time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub(crate) struct WorkLog {
    path: PathBuf,
}

impl WorkLog {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn at_home() -> Result<Self, AppError> {
        let home = dirs::home_dir().ok_or(AppError::HomeNotFound)?;
        Ok(Self::new(home.join(LOG_FILE_NAME)))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Append a blank separator line followed by the window's commands.
    ///
    /// Creates the file when missing; existing bytes are never touched.
    pub(crate) fn append_history(&self, window: &HistoryWindow) -> Result<(), AppError> {
        let mut block = String::from("\n");
        for entry in window.entries() {
            block.push_str(entry);
            block.push('\n');
        }

        let write_err = |source| AppError::LogWrite {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        file.write_all(block.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)
    }

    /// Locate the most recent timestamp line. A missing log has no anchor.
    pub(crate) fn last_timestamp(&self) -> Result<Option<TimestampAnchor>, AppError> {
        let read_err = |source| AppError::LogRead {
            path: self.path.clone(),
            source,
        };
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(read_err(e)),
        };

        let mut line_no = 0;
        let mut last = None;
        for raw in BufReader::new(file).split(b'\n') {
            let raw = raw.map_err(read_err)?;
            line_no += 1;
            // Log lines may hold anything the terminal produced
            let line = String::from_utf8_lossy(&raw);
            if timestamp::is_timestamp_line(&line) {
                last = Some(TimestampAnchor {
                    line: line_no,
                    time: timestamp::parse_timestamp(&line),
                });
            }
        }

        Ok(last)
    }

    /// Number of lines in the log (0 when missing)
    pub(crate) fn line_count(&self) -> Result<usize, AppError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(AppError::LogRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let mut count = 0;
        for raw in BufReader::new(file).split(b'\n') {
            raw.map_err(|source| AppError::LogRead {
                path: self.path.clone(),
                source,
            })?;
            count += 1;
        }
        Ok(count)
    }
}
