//! Shell history capture
//!
//! The history buffer lives in the interactive shell, so it is read once at
//! the process boundary (piped `history 30` output or the shell's history
//! file) and turned into a plain list of command lines.

use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::consts::HISTORY_WINDOW;
use crate::error::HistoryError;
use crate::utils::debug_enabled;

static INDEX_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\*?(\s+|$)").expect("valid index regex"));

static BASH_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\d+\s*$").expect("valid bash timestamp regex"));

static ZSH_EXTENDED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^: \d+:\d+;").expect("valid zsh header regex"));

/// Remove the `history` index number ("  12  ls" -> "ls").
pub(crate) fn strip_index_prefix(line: &str) -> &str {
    match INDEX_PREFIX_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// The most recent commands, oldest first, at most `HISTORY_WINDOW` long
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct HistoryWindow {
    entries: Vec<String>,
}

impl HistoryWindow {
    /// Build a window from raw history lines in chronological order.
    ///
    /// `numbered` lines carry a `history` index which is stripped.
    pub(crate) fn from_lines<I, S>(lines: I, numbered: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = lines
            .into_iter()
            .filter(|line| !line.as_ref().trim().is_empty())
            .map(|line| {
                let line = line.as_ref();
                let text = if numbered {
                    strip_index_prefix(line)
                } else {
                    line
                };
                text.trim_end().to_string()
            })
            .collect();

        if entries.len() > HISTORY_WINDOW {
            entries.drain(..entries.len() - HISTORY_WINDOW);
        }
        Self { entries }
    }

    pub(crate) fn entries(&self) -> &[String] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where the history buffer is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HistorySource {
    /// Numbered `history` output piped into stdin
    Stdin,
    /// The shell's history file, one command per line
    HistFile(PathBuf),
}

impl HistorySource {
    /// Piped stdin wins; otherwise fall back to the shell's history file.
    pub(crate) fn detect() -> Result<Self, HistoryError> {
        if !std::io::stdin().is_terminal() {
            return Ok(HistorySource::Stdin);
        }
        histfile_candidates()
            .into_iter()
            .find(|p| p.is_file())
            .map(HistorySource::HistFile)
            .ok_or(HistoryError::Unavailable)
    }

    pub(crate) fn read_window(&self) -> Result<HistoryWindow, HistoryError> {
        match self {
            HistorySource::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(HistoryError::Stdin)?;
                let text = String::from_utf8_lossy(&buf);
                if debug_enabled() {
                    eprintln!("[DEBUG] Read {} bytes of history from stdin", buf.len());
                }
                Ok(HistoryWindow::from_lines(text.lines(), true))
            }
            HistorySource::HistFile(path) => read_histfile(path),
        }
    }
}

fn histfile_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(histfile) = std::env::var_os("HISTFILE").filter(|v| !v.is_empty()) {
        paths.push(PathBuf::from(histfile));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".bash_history"));
        paths.push(home.join(".zsh_history"));
    }
    paths
}

fn read_histfile(path: &Path) -> Result<HistoryWindow, HistoryError> {
    let bytes = fs::read(path).map_err(|source| HistoryError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    if debug_enabled() {
        eprintln!("[DEBUG] Reading history from {}", path.display());
    }
    Ok(HistoryWindow::from_lines(histfile_commands(&text), false))
}

/// Commands from a bash or zsh history file, without timestamp metadata
fn histfile_commands(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| !BASH_TIME_RE.is_match(line))
        .map(|line| match ZSH_EXTENDED_RE.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        })
        .collect()
}
