use crate::error::{LoadError, Result};
use directories::BaseDirs;
use std::path::PathBuf;

/// Platform application-data directory for `namespace`.
///
/// Resolves to the user's data directory with `namespace` appended
/// (Application Support on macOS, AppData on Windows, XDG data home on
/// Linux). A platform where no home directory can be determined yields
/// [`LoadError::PlatformUnsupported`] so the caller can report or fall
/// back instead of the process dying.
pub fn app_data_dir(namespace: &str) -> Result<PathBuf> {
    let base = BaseDirs::new().ok_or(LoadError::PlatformUnsupported)?;
    Ok(base.data_dir().join(namespace))
}
