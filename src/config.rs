use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::chart::figure::FigureStyle;

/// Optional settings file, looked up in the working directory.
pub const CONFIG_FILE: &str = "data-visualizer.json";

/// Environment variable overriding the data folder.
pub const DATA_DIR_ENV: &str = "DATA_VISUALIZER_DIR";

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Where to look for data and how to present it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder whose files are offered in the file dropdown.
    pub data_dir: PathBuf,
    /// File name suffix that marks a loadable file.
    pub extension: String,
    /// Rows shown in the preview table.
    pub preview_rows: usize,
    pub figure: FigureStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            extension: ".csv".to_string(),
            preview_rows: 5,
            figure: FigureStyle::default(),
        }
    }
}

impl Config {
    /// Defaults, then `data-visualizer.json` if present, then the environment.
    pub fn load() -> Result<Self> {
        let file = Path::new(CONFIG_FILE);
        let file = file.exists().then_some(file);
        Self::from_sources(file, std::env::var(DATA_DIR_ENV).ok())
    }

    pub fn from_sources(file: Option<&Path>, data_dir_override: Option<String>) -> Result<Self> {
        let mut config = match file {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => Config::default(),
        };

        if let Some(dir) = data_dir_override.filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}

/// `data` next to the executable, or `./data` when that does not exist.
fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("data")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_fields_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"{ "data_dir": "/srv/csv", "preview_rows": 10, "figure": { "width": 900.0 } }"#,
        )
        .unwrap();

        let config = Config::from_sources(Some(&path), None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/csv"));
        assert_eq!(config.preview_rows, 10);
        assert_eq!(config.extension, ".csv");
        assert_eq!(config.figure.width, 900.0);
        assert_eq!(config.figure.height, FigureStyle::default().height);
    }

    #[test]
    fn environment_wins_over_file() {
        let config = Config::from_sources(None, Some("/tmp/elsewhere".into())).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/elsewhere"));

        let config = Config::from_sources(None, Some(String::new())).unwrap();
        assert_eq!(config.data_dir, Config::default().data_dir);
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::from_sources(Some(&path), None).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
