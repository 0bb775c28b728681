use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Could not determine home directory")]
    HomeNotFound,

    #[error("Failed to write {}: {source}", path.display())]
    LogWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    LogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    History(#[from] HistoryError),

    #[error("{editor}: command not found")]
    EditorNotFound { editor: String },

    #[error("Failed to run {editor}: {source}")]
    EditorSpawn {
        editor: String,
        source: std::io::Error,
    },

    #[error("{editor} exited with status {code}")]
    EditorFailed { editor: String, code: i32 },

    #[error("Failed to locate own executable: {0}")]
    CurrentExe(std::io::Error),

    #[error("{}: command not found", path.display())]
    ScriptNotFound { path: PathBuf },

    #[error("Failed to run {}: {source}", path.display())]
    ScriptSpawn {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AppError {
    /// Shell-style exit status for this failure
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            AppError::ScriptNotFound { .. } | AppError::EditorNotFound { .. } => 127,
            AppError::ScriptSpawn { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                126
            }
            _ => 1,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum HistoryError {
    #[error("No shell history available. Pipe it in, e.g. `history 30 | worklog h`")]
    Unavailable,

    #[error("Failed to read history from stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to read history file {}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_log_write() {
        let e = AppError::LogWrite {
            path: PathBuf::from("/nope/.worklog"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            e.to_string(),
            "Failed to write /nope/.worklog: No such file or directory"
        );
    }

    #[test]
    fn app_error_display_script_not_found() {
        let e = AppError::ScriptNotFound {
            path: PathBuf::from("/opt/bin/logwork.py"),
        };
        assert_eq!(e.to_string(), "/opt/bin/logwork.py: command not found");
        assert_eq!(e.exit_code(), 127);
    }

    #[test]
    fn app_error_display_editor_failed() {
        let e = AppError::EditorFailed {
            editor: "vim".to_string(),
            code: 2,
        };
        assert_eq!(e.to_string(), "vim exited with status 2");
        assert_eq!(e.exit_code(), 1);
    }

    #[test]
    fn permission_denied_script_maps_to_126() {
        let e = AppError::ScriptSpawn {
            path: PathBuf::from("/opt/bin/logwork.py"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(e.exit_code(), 126);
    }

    #[test]
    fn app_error_from_history_error() {
        let app: AppError = HistoryError::Unavailable.into();
        assert_eq!(
            app.to_string(),
            "No shell history available. Pipe it in, e.g. `history 30 | worklog h`"
        );
    }
}
