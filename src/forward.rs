//! Hand-off to the worklog script
//!
//! Every invocation that is not the history trigger goes to the script
//! installed next to this executable, arguments untouched.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::AppError;
use crate::utils::debug_enabled;

/// Directory holding the running executable, with symlinks resolved
pub(crate) fn install_dir() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe().map_err(AppError::CurrentExe)?;
    let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::CurrentExe(std::io::Error::from(ErrorKind::NotFound)))
}

/// Script location; absolute names are used as-is.
pub(crate) fn resolve_script(install_dir: &Path, script: &str) -> PathBuf {
    install_dir.join(script)
}

/// Run `script` with `args` in the foreground and return its exit code.
pub(crate) fn forward(script: &Path, args: &[OsString]) -> Result<i32, AppError> {
    if !script.is_file() {
        return Err(AppError::ScriptNotFound {
            path: script.to_path_buf(),
        });
    }
    if debug_enabled() {
        eprintln!("[DEBUG] Forwarding {:?} to {}", args, script.display());
    }

    let status = Command::new(script)
        .args(args)
        .status()
        .map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                AppError::ScriptNotFound {
                    path: script.to_path_buf(),
                }
            } else {
                AppError::ScriptSpawn {
                    path: script.to_path_buf(),
                    source,
                }
            }
        })?;
    Ok(exit_code(status))
}

/// Shell convention: the process exit code, or 128 + signal number
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
