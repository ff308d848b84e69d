//! Runtime configuration for the batch pipeline.
//!
//! Settings come from an optional YAML file, then command-line flags and
//! their environment fallbacks override whatever the file provided. The
//! classifier tables themselves are compiled in and never configurable.
//!
//! ```yaml
//! output_dir: ./data
//! batch_concurrency: 8
//! ```

use crate::batch::{DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_DIR};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory for processed batch output when `--output` is not given.
    pub output_dir: PathBuf,
    /// Number of records classified at the same time in batch mode.
    pub batch_concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            batch_concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl PipelineConfig {
    pub fn from_yaml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(raw).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    #[instrument(level = "info")]
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_yaml(&raw, path)?;
        info!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Apply command-line overrides on top of file or default values.
    pub fn with_overrides(mut self, output_dir: Option<PathBuf>, concurrency: Option<usize>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if let Some(n) = concurrency {
            self.batch_concurrency = n;
        }
        self.batch_concurrency = self.batch_concurrency.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("data"));
        assert_eq!(config.batch_concurrency, 12);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = PipelineConfig::from_yaml("batch_concurrency: 3\n", Path::new("c.yaml")).unwrap();
        assert_eq!(config.batch_concurrency, 3);
        assert_eq!(config.output_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = PipelineConfig::from_yaml("batch_concurrency: [", Path::new("c.yaml"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_overrides_win_and_concurrency_floor() {
        let config = PipelineConfig::default().with_overrides(Some(PathBuf::from("/tmp/out")), Some(0));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.batch_concurrency, 1);

        let config = PipelineConfig::default().with_overrides(None, None);
        assert_eq!(config, PipelineConfig::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.yaml");
        std::fs::write(&path, "output_dir: ./processed\nbatch_concurrency: 4\n").unwrap();

        let config = PipelineConfig::load(&path).await.unwrap();
        assert_eq!(config.output_dir, PathBuf::from("./processed"));
        assert_eq!(config.batch_concurrency, 4);

        let missing = PipelineConfig::load(&dir.path().join("nope.yaml")).await;
        assert!(matches!(missing, Err(ConfigError::Read { .. })));
    }
}
