//! Where dock-manager keeps its files
//!
//! Everything lives in one per-user directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME/dock-manager/` or `~/.config/dock-manager/`
//! - Windows: `%APPDATA%\dock-manager\`

use std::path::PathBuf;

const APP_DIR: &str = "dock-manager";

/// Prefix of the rolling log files (`dock-manager.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "dock-manager.log";

/// Per-user dock-manager directory, if a home or config base can be found
pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA").map(PathBuf::from)
    } else {
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    };
    base.map(|dir| dir.join(APP_DIR))
}

/// `<config dir>/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `<config dir>/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or("No config directory available")?;
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create {}: {}", logs.display(), e))?;
    Ok(logs)
}
