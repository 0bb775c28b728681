//! Opening the log in an interactive editor
//!
//! Positioning is the only thing the editor is asked to do: go to the end of
//! the file, then back to the most recent timestamp entry, centered.

use std::ffi::OsString;
use std::fs::File;
use std::io::{ErrorKind, IsTerminal};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::Config;
use crate::error::AppError;
use crate::utils::debug_enabled;
use crate::worklog::timestamp::{VIM_TIMESTAMP_PATTERN, format_timestamp};
use crate::worklog::{TimestampAnchor, WorkLog};

const VIM_FAMILY: &[&str] = &["vim", "nvim", "vi", "gvim", "view", "mvim"];

/// Something that can show the log positioned at its latest entry
pub(crate) trait LogViewer {
    fn open_at_last_timestamp(&self, log: &WorkLog) -> Result<(), AppError>;
}

/// How the editor expects positioning directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Positioning {
    /// `-c "normal G" -c "?pattern" -c "normal zz"`
    Vim,
    /// `+LINE file`, understood by nano, emacs, micro, kak, ...
    LineJump,
}

#[derive(Debug, Clone)]
pub(crate) struct EditorCommand {
    program: String,
    extra_args: Vec<String>,
    positioning: Positioning,
    screen: bool,
}

impl EditorCommand {
    /// Split an editor command line ("emacs -nw") into program and arguments.
    pub(crate) fn parse(command: &str, screen: bool) -> Self {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next().unwrap_or_default();
        let extra_args = words.collect();
        let positioning = positioning_for(&program);
        Self {
            program,
            extra_args,
            positioning,
            screen,
        }
    }

    pub(crate) fn from_config(config: &Config) -> Self {
        Self::parse(config.editor(), config.use_screen())
    }

    /// Full argv (program first) for opening `path` at `anchor`, or at
    /// `last_line` when the log has no timestamp entry.
    pub(crate) fn argv(
        &self,
        path: &Path,
        anchor: Option<&TimestampAnchor>,
        last_line: usize,
    ) -> Vec<OsString> {
        let mut argv: Vec<OsString> = Vec::new();
        if self.screen {
            argv.push("screen".into());
        }
        argv.push(self.program.clone().into());
        argv.extend(self.extra_args.iter().map(OsString::from));

        match self.positioning {
            Positioning::Vim => {
                argv.push(path.into());
                argv.push("-c".into());
                argv.push("normal G".into());
                // Without an anchor the search would stop at a "Pattern not found" prompt
                if anchor.is_some() {
                    argv.push("-c".into());
                    argv.push(format!("?{VIM_TIMESTAMP_PATTERN}").into());
                    argv.push("-c".into());
                    argv.push("normal zz".into());
                }
            }
            Positioning::LineJump => {
                let line = anchor.map_or(last_line, |a| a.line).max(1);
                argv.push(format!("+{line}").into());
                argv.push(path.into());
            }
        }
        argv
    }

    fn display_name(&self) -> &str {
        &self.program
    }
}

impl LogViewer for EditorCommand {
    fn open_at_last_timestamp(&self, log: &WorkLog) -> Result<(), AppError> {
        let anchor = log.last_timestamp()?;
        let last_line = match (&anchor, self.positioning) {
            (None, Positioning::LineJump) => log.line_count()?,
            _ => 0,
        };
        let argv = self.argv(log.path(), anchor.as_ref(), last_line);

        if debug_enabled() {
            match &anchor {
                Some(a) => eprintln!(
                    "[DEBUG] Last entry {} at line {}",
                    a.time.as_ref().map(format_timestamp).unwrap_or_default(),
                    a.line
                ),
                None => eprintln!("[DEBUG] No timestamp entry in {}", log.path().display()),
            }
            eprintln!("[DEBUG] Running {:?}", argv);
        }

        let Some((program, args)) = argv.split_first() else {
            return Err(AppError::EditorNotFound {
                editor: String::new(),
            });
        };
        let mut cmd = Command::new(program);
        cmd.args(args);
        // History may have arrived on a pipe; the editor needs the terminal
        if !std::io::stdin().is_terminal()
            && let Ok(tty) = File::open("/dev/tty")
        {
            cmd.stdin(Stdio::from(tty));
        }

        let editor = self.display_name().to_string();
        let status = cmd.status().map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                AppError::EditorNotFound {
                    editor: editor.clone(),
                }
            } else {
                AppError::EditorSpawn {
                    editor: editor.clone(),
                    source,
                }
            }
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::EditorFailed {
                editor,
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

fn positioning_for(program: &str) -> Positioning {
    let name = Path::new(program)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(program);
    if VIM_FAMILY.contains(&name) {
        Positioning::Vim
    } else {
        Positioning::LineJump
    }
}
