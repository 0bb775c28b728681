use std::ffi::OsString;
use std::process::ExitCode;

use crate::cli::Invocation;
use crate::config::Config;
use crate::editor::{EditorCommand, LogViewer};
use crate::error::AppError;
use crate::forward::{forward, install_dir, resolve_script};
use crate::utils::debug_enabled;
use crate::worklog::{HistorySource, HistoryWindow, WorkLog};

/// Append `window` to `log`, then open it positioned at the latest entry.
///
/// The viewer is never started when the append fails.
pub(crate) fn append_and_open(
    log: &WorkLog,
    window: &HistoryWindow,
    viewer: &dyn LogViewer,
) -> Result<(), AppError> {
    log.append_history(window)?;
    if debug_enabled() {
        eprintln!(
            "[DEBUG] Appended {} history entries to {}",
            window.len(),
            log.path().display()
        );
    }
    viewer.open_at_last_timestamp(log)
}

fn handle_append_history(config: &Config) -> Result<ExitCode, AppError> {
    let log = WorkLog::at_home()?;
    let source = HistorySource::detect()?;
    let window = source.read_window()?;
    if window.is_empty() && debug_enabled() {
        eprintln!("[DEBUG] History is empty, appending separator only");
    }
    let editor = EditorCommand::from_config(config);
    append_and_open(&log, &window, &editor)?;
    Ok(ExitCode::SUCCESS)
}

fn handle_forward(config: &Config, args: &[OsString]) -> Result<ExitCode, AppError> {
    let script = resolve_script(&install_dir()?, config.script());
    let code = forward(&script, args)?;
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}

pub(crate) fn run(invocation: Invocation, config: &Config) -> Result<ExitCode, AppError> {
    match invocation {
        Invocation::AppendHistory => handle_append_history(config),
        Invocation::Forward(args) => handle_forward(config, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;

    #[derive(Default)]
    struct RecordingViewer {
        opened: Cell<usize>,
    }

    impl LogViewer for RecordingViewer {
        fn open_at_last_timestamp(&self, _log: &WorkLog) -> Result<(), AppError> {
            self.opened.set(self.opened.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn appends_then_opens_viewer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".worklog");
        fs::write(&path, "20240101-0900\nfoo\n").unwrap();
        let window = HistoryWindow::from_lines(["  12  ls", "  13  pwd"], true);
        let viewer = RecordingViewer::default();

        append_and_open(&WorkLog::new(&path), &window, &viewer).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "20240101-0900\nfoo\n\nls\npwd\n"
        );
        assert_eq!(viewer.opened.get(), 1);
    }

    #[test]
    fn failed_append_skips_viewer() {
        let dir = tempfile::tempdir().unwrap();
        let log = WorkLog::new(dir.path().join("gone").join(".worklog"));
        let window = HistoryWindow::from_lines(["  1  ls"], true);
        let viewer = RecordingViewer::default();

        let err = append_and_open(&log, &window, &viewer).unwrap_err();

        assert!(matches!(err, AppError::LogWrite { .. }));
        assert_eq!(viewer.opened.get(), 0);
    }
}
