use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::{DEFAULT_EDITOR, DEFAULT_SCRIPT};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Editor command, optionally with extra arguments ("nvim", "emacs -nw")
    #[serde(default)]
    pub(crate) editor: Option<String>,
    /// Script that receives forwarded invocations, relative to the executable
    #[serde(default)]
    pub(crate) script: Option<String>,
    /// Wrap the editor in `screen`; unset means "only when inside screen"
    #[serde(default)]
    pub(crate) screen: Option<bool>,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("[DEBUG] Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("[DEBUG] Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/worklog/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("worklog").join("config.toml"));
        }

        // 2. Platform config dir (~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("worklog").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.worklog.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".worklog.toml"));
        }

        paths
    }

    pub(crate) fn editor(&self) -> &str {
        self.editor
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_EDITOR)
    }

    pub(crate) fn script(&self) -> &str {
        self.script
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SCRIPT)
    }

    pub(crate) fn use_screen(&self) -> bool {
        self.screen
            .unwrap_or_else(|| std::env::var_os("STY").is_some_and(|sty| !sty.is_empty()))
    }
}
