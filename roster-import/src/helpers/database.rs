use std::path::PathBuf;

/// Returns the default path of the roster database
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/roster/roster.sqlite`
/// - **Linux**: `~/.local/share/roster/roster.sqlite`
/// - **Windows**: `%LOCALAPPDATA%\roster\roster.sqlite`
pub fn get_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("roster").join("roster.sqlite"))
}
