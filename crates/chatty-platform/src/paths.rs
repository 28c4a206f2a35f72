use std::fs;
use std::path::PathBuf;

use chatty_common::PlatformError;

const APP_NAME: &str = "chatty";

/// Returns the platform-specific configuration directory for Chatty.
///
/// - macOS: `~/Library/Application Support/chatty`
/// - Linux: `$XDG_CONFIG_HOME/chatty` (defaults to `~/.config/chatty`)
/// - Windows: `%APPDATA%\chatty`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))
}

/// Returns the platform-specific data directory for Chatty.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))
}

/// Located at `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Located at `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}

/// Creates all Chatty directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, log_dir()?, crash_report_dir()?] {
        fs::create_dir_all(&dir).map_err(|e| {
            PlatformError::PathError(format!("failed to create {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}
