//! Optional TOML configuration for the generators
//!
//! ```toml
//! [paths]
//! template = "shaders/screen_generic.frag"
//! output = "shaders/screen_postprocess.frag"
//!
//! [defaults]
//! type = "edge"
//! strength = 0.5
//! stride = 0.002
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file,
//! and the file takes precedence over built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::params::{FilterKind, ParamError, Stride};

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value in config {path}: {source}")]
    Invalid { path: PathBuf, source: ParamError },
}

/// Contents of a generator config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// Template and output locations
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Fallback generation parameters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    /// Filter kind (`sharpen`, `blur` or `edge`)
    #[serde(rename = "type")]
    pub kind: Option<FilterKind>,
    pub strength: Option<f64>,
    /// Validated with the same rules as `--stride`
    pub stride: Option<f64>,
}

impl GeneratorConfig {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Stride from the `[defaults]` section, if present and valid
    pub fn stride(&self) -> Result<Option<Stride>, ParamError> {
        self.defaults.stride.map(Stride::new).transpose()
    }

    /// Like [`GeneratorConfig::stride`] but attributes errors to the file
    pub fn stride_from(&self, path: &Path) -> Result<Option<Stride>, ConfigError> {
        self.stride().map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load the config at `path`, or an empty config when no path is given
pub fn load_optional(path: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
    match path {
        Some(path) => GeneratorConfig::load(path),
        None => Ok(GeneratorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = GeneratorConfig::parse(
            r#"
            [paths]
            template = "in.frag"
            output = "out.frag"

            [defaults]
            type = "edge"
            strength = 0.5
            stride = 0.002
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.template, Some(PathBuf::from("in.frag")));
        assert_eq!(config.paths.output, Some(PathBuf::from("out.frag")));
        assert_eq!(config.defaults.kind, Some(FilterKind::Edge));
        assert_eq!(config.defaults.strength, Some(0.5));
        assert_eq!(config.stride().unwrap().map(Stride::get), Some(0.002));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = GeneratorConfig::parse("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.stride().unwrap(), None);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(GeneratorConfig::parse("[paths]\ntemplte = \"x\"").is_err());
        assert!(GeneratorConfig::parse("[extra]\na = 1").is_err());
    }

    #[test]
    fn test_unknown_filter_rejected() {
        assert!(GeneratorConfig::parse("[defaults]\ntype = \"gauss\"").is_err());
    }

    #[test]
    fn test_config_stride_validated() {
        let config = GeneratorConfig::parse("[defaults]\nstride = -1.0").unwrap();
        assert_eq!(config.stride(), Err(ParamError::NonPositiveStride(-1.0)));

        let err = config.stride_from(Path::new("postfx.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("postfx.toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_optional() {
        assert_eq!(load_optional(None).unwrap(), GeneratorConfig::default());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postfx.toml");
        std::fs::write(&path, "[defaults]\nstrength = 2.0\n").unwrap();
        let config = load_optional(Some(&path)).unwrap();
        assert_eq!(config.defaults.strength, Some(2.0));
    }
}
