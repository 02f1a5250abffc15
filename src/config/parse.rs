//! Project config reading and locked rewriting

use crate::config::templates::CONFIG_FILE;
use crate::config::types::ProjectConfig;
use crate::error::{ConfigError, ConfigResult, LangError};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Path of the project config inside a working directory
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Parse a project config from a string
pub fn parse_config(json: &str, path: &Path) -> ConfigResult<ProjectConfig> {
    serde_json::from_str(json).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read and parse the project config at `path`
pub fn read_config(path: &Path) -> Result<ProjectConfig, LangError> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_config(&contents, path)?)
}

/// Exclusive lock on the config file, released when dropped
struct ConfigLock {
    file: File,
}

impl ConfigLock {
    fn acquire(path: &Path) -> Result<Self, LangError> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        file.lock_exclusive().map_err(|e| ConfigError::Lock {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Ok(ConfigLock { file })
    }
}

impl Drop for ConfigLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// Read-modify-write the project config while holding an exclusive lock on it
///
/// Returns the config as written.
pub fn update_config<F>(path: &Path, update: F) -> Result<ProjectConfig, LangError>
where
    F: FnOnce(&mut ProjectConfig),
{
    let mut lock = ConfigLock::acquire(path)?;

    let mut contents = String::new();
    lock.file.read_to_string(&mut contents)?;
    let mut config = parse_config(&contents, path)?;

    update(&mut config);

    let json = config.to_json()?;
    lock.file.set_len(0)?;
    lock.file.seek(SeekFrom::Start(0))?;
    lock.file.write_all(json.as_bytes())?;
    lock.file.flush()?;

    Ok(config)
}
