//! Timestamp-prefixed lines written by the worklog script
//!
//! Structured entries start with `YYYYMMDD-HHMM`; everything after the
//! prefix (working directory, git info) belongs to the script.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::consts::TIMESTAMP_FORMAT;

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{8}-\d{4})").expect("valid timestamp regex"));

/// Same anchor in vim regex syntax, for the editor's backward search
pub(crate) const VIM_TIMESTAMP_PATTERN: &str = r"^\d\{8\}-\d\{4\}";

pub(crate) fn is_timestamp_line(line: &str) -> bool {
    TIMESTAMP_RE.is_match(line)
}

/// Parse the leading timestamp; `None` when the line has no prefix or the
/// digits are not a real date.
pub(crate) fn parse_timestamp(line: &str) -> Option<NaiveDateTime> {
    let prefix = TIMESTAMP_RE.captures(line)?.get(1)?.as_str();
    NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT).ok()
}

pub(crate) fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
