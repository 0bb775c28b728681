//! Dispatch between history capture and forwarding

use std::ffi::OsString;

use crate::consts::TRIGGER;

/// What a single run of the binary does
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Invocation {
    /// Append the shell history window to the log and open the editor
    AppendHistory,
    /// Hand the complete argument list to the worklog script
    Forward(Vec<OsString>),
}

impl Invocation {
    /// Only the first argument selects the mode; the rest are ignored by
    /// history capture and passed through untouched otherwise.
    pub(crate) fn from_args(args: Vec<OsString>) -> Self {
        match args.first() {
            Some(first) if first == TRIGGER => Invocation::AppendHistory,
            _ => Invocation::Forward(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn trigger_selects_history_capture() {
        assert_eq!(Invocation::from_args(os(&["h"])), Invocation::AppendHistory);
        assert_eq!(
            Invocation::from_args(os(&["h", "extra"])),
            Invocation::AppendHistory
        );
    }

    #[test]
    fn everything_else_is_forwarded_verbatim() {
        let args = os(&["status", "-x", "h"]);
        assert_eq!(
            Invocation::from_args(args.clone()),
            Invocation::Forward(args)
        );
    }

    #[test]
    fn trigger_must_match_exactly() {
        for first in ["H", "hh", " h", "history"] {
            let args = os(&[first]);
            assert_eq!(
                Invocation::from_args(args.clone()),
                Invocation::Forward(args)
            );
        }
    }

    #[test]
    fn empty_invocation_is_forwarded() {
        assert_eq!(Invocation::from_args(Vec::new()), Invocation::Forward(Vec::new()));
    }
}
