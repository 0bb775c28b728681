//! Raw argument collection
//!
//! The binary is a thin dispatcher: nothing is interpreted here, not even
//! `--`, so the list reaches the script exactly as typed.

use std::ffi::OsString;

use super::commands::Invocation;

#[derive(Debug)]
pub(crate) struct Cli {
    /// `h` to capture history; anything else is passed to the script
    pub(crate) args: Vec<OsString>,
}

impl Cli {
    pub(crate) fn from_env() -> Self {
        Self::from_argv(std::env::args_os())
    }

    /// Build from a full argv, program name first.
    pub(crate) fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            args: argv.into_iter().skip(1).map(Into::into).collect(),
        }
    }

    pub(crate) fn invocation(self) -> Invocation {
        Invocation::from_args(self.args)
    }
}
