/// First argument that selects history capture instead of forwarding
pub(crate) const TRIGGER: &str = "h";

/// Number of most recent history entries captured per invocation
pub(crate) const HISTORY_WINDOW: usize = 30;

/// Log file name, relative to the home directory
pub(crate) const LOG_FILE_NAME: &str = ".worklog";

/// Timestamp format of structured entries: "20250115-0930"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M";

/// Script that receives every non-trigger invocation
pub(crate) const DEFAULT_SCRIPT: &str = "logwork.py";

/// Editor used when the config does not name one
pub(crate) const DEFAULT_EDITOR: &str = "vim";
