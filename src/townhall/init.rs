use crate::api::{TownhallApi, TownhallPaths};
use crate::config::TownhallConfig;
use crate::error::{Result, TownhallError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the platform data directory when set.
pub const DATA_DIR_ENV: &str = "TOWNHALL_DATA";

pub struct TownhallContext {
    pub api: TownhallApi<FileStore>,
    pub config: TownhallConfig,
    /// Config values that were out of range and fell back to defaults.
    pub config_warnings: Vec<String>,
}

/// Where blobs and `config.json` live: `$TOWNHALL_DATA` if set and non-empty,
/// otherwise the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("ph", "bacoor", "townhall")
        .ok_or_else(|| TownhallError::Config("Could not determine data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub fn initialize() -> Result<TownhallContext> {
    initialize_at(&data_dir()?)
}

pub fn initialize_at(dir: &Path) -> Result<TownhallContext> {
    let (config, config_warnings) = TownhallConfig::load_checked(dir)?;
    log::debug!("data directory: {}", dir.display());

    let store = FileStore::new(dir.to_path_buf());
    let paths = TownhallPaths {
        data: dir.to_path_buf(),
    };
    let api = TownhallApi::new(store, paths, config.page_size);

    Ok(TownhallContext {
        api,
        config,
        config_warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EventQuery;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_with_defaults() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize_at(temp.path()).unwrap();
        assert_eq!(ctx.config, TownhallConfig::default());
        assert_eq!(ctx.api.page_size(), ctx.config.page_size);
    }

    #[test]
    fn test_initialize_reads_page_size() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), r#"{"page-size": 4}"#).unwrap();

        let ctx = initialize_at(temp.path()).unwrap();
        assert_eq!(ctx.api.page_size().get(), 4);
    }

    #[test]
    fn test_initialize_survives_out_of_range_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), r#"{"log-level": "loud"}"#).unwrap();

        let ctx = initialize_at(temp.path()).unwrap();
        assert_eq!(ctx.config, TownhallConfig::default());
        assert_eq!(ctx.config_warnings.len(), 1);
    }

    #[test]
    fn test_initialize_rejects_broken_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "{ nope").unwrap();
        assert!(initialize_at(temp.path()).is_err());
    }

    #[test]
    fn test_events_seed_into_data_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("fresh");
        let mut ctx = initialize_at(&dir).unwrap();

        ctx.api.events(EventQuery::default()).unwrap();
        assert!(dir.join("events.json").exists());
    }
}
