use std::path::PathBuf;
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::database::Database;

/// Returns the path to the portal database
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/placement-portal/portal.sqlite3`
/// - **Linux**: `~/.local/share/placement-portal/portal.sqlite3`
/// - **Windows**: `%LOCALAPPDATA%\placement-portal\portal.sqlite3`
pub fn get_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("placement-portal").join("portal.sqlite3"))
}

/// Open the configured database, falling back to the platform location
pub fn initialize_database(settings: &DatabaseConfig) -> anyhow::Result<(Arc<Database>, PathBuf)> {
    let db_path = match &settings.path {
        Some(path) => path.clone(),
        None => get_db_path()?,
    };

    let db = Database::new(&db_path, settings)?;
    Ok((Arc::new(db), db_path))
}
