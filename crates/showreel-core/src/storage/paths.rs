//! Data directory resolution

use anyhow::anyhow;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "SHOWREEL_DATA_DIR";

/// Get the directory where the file backend keeps its slot files
///
/// `$SHOWREEL_DATA_DIR` wins when set; otherwise the platform data
/// directory plus `showreel`.
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let dir = if let Ok(custom_dir) = env::var(DATA_DIR_ENV) {
        PathBuf::from(custom_dir)
    } else {
        dirs::data_dir()
            .ok_or_else(|| anyhow!("Could not determine data directory"))?
            .join("showreel")
    };
    Ok(dir)
}
