use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_derive::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".gh-runner-group.yaml";

/// Optional defaults read from `~/.gh-runner-group.yaml`.
#[derive(Deserialize, Default, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub hostname: Option<String>,
    #[serde(default)]
    pub plain: bool,
}

/// Settings for one invocation, after flags have been merged over the file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub hostname: Option<String>,
    pub plain: bool,
}

impl Config {
    pub fn merge(file: FileConfig, hostname: Option<String>, plain: bool) -> Config {
        let hostname = hostname
            .or(file.hostname)
            .filter(|h| !h.trim().is_empty());
        Config {
            hostname,
            plain: plain || file.plain,
        }
    }

    /// Colors are always written, piped or not, unless `--plain` or a
    /// non-empty `NO_COLOR` asks otherwise.
    pub fn use_color(&self, no_color: Option<&OsStr>) -> bool {
        !self.plain && no_color.map_or(true, OsStr::is_empty)
    }
}

fn default_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
}

fn read_file(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to open config file at {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// An explicit path must exist; the default one is skipped when absent.
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    match explicit {
        Some(path) => read_file(path),
        None => match default_path() {
            Some(path) if path.is_file() => read_file(&path),
            _ => Ok(FileConfig::default()),
        },
    }
}
