//! Pipeline configuration.
//!
//! Values come from built-in defaults, optionally overridden by a TOML or
//! JSON file. The defaults reproduce the reference run: ten curves drawn
//! from `[-10, 10]` and evaluated at `t = PI / 4`.

use std::f64::consts::FRAC_PI_4;
use std::fs;
use std::path::Path;

use curvekit_core::{CurveError, Result};
use curvekit_generator::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of curves to generate.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Parameter at which every curve is evaluated.
    #[serde(default = "default_parameter")]
    pub parameter: f64,

    #[serde(default = "default_domain_min")]
    pub domain_min: f64,

    #[serde(default = "default_domain_max")]
    pub domain_max: f64,

    /// Seed for a reproducible run. Unset means OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Draws allowed per shape parameter before the domain is reported as exhausted.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_count() -> usize {
    10
}

fn default_parameter() -> f64 {
    FRAC_PI_4
}

fn default_domain_min() -> f64 {
    -10.0
}

fn default_domain_max() -> f64 {
    10.0
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            parameter: default_parameter(),
            domain_min: default_domain_min(),
            domain_max: default_domain_max(),
            seed: None,
            max_attempts: default_max_attempts(),
        }
    }
}

impl PipelineConfig {
    /// Loads a configuration file. The format follows the file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let config = match extension.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => serde_json::from_str(&content)
                .map_err(|e| CurveError::Serialization(e.to_string()))?,
            ext => {
                return Err(CurveError::Config(format!(
                    "unsupported configuration format: {:?}",
                    ext
                )))
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CurveError::Serialization(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CurveError::Serialization(e.to_string()))
    }

    /// Checks values the generator cannot recover from.
    ///
    /// A collapsed domain is not an error here; the generator keeps its
    /// default domain in that case.
    pub fn validate(&self) -> Result<()> {
        if !self.parameter.is_finite() {
            return Err(CurveError::Config(format!(
                "evaluation parameter must be finite, got {}",
                self.parameter
            )));
        }
        if self.max_attempts == 0 {
            return Err(CurveError::Config(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = PipelineConfig::default();
        assert_eq!(config.count, 10);
        assert_eq!(config.parameter, FRAC_PI_4);
        assert_eq!((config.domain_min, config.domain_max), (-10.0, 10.0));
        assert!(config.seed.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = PipelineConfig::from_toml_str("count = 3\nseed = 99\n").unwrap();
        assert_eq!(config.count, 3);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.domain_max, 10.0);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig {
            seed: Some(5),
            domain_min: -2.0,
            ..PipelineConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(PipelineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_from_file_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("run.toml");
        let mut f = fs::File::create(&toml_path).unwrap();
        writeln!(f, "count = 4\ndomain_min = -1.0\ndomain_max = 1.0").unwrap();
        let config = PipelineConfig::from_file(&toml_path).unwrap();
        assert_eq!(config.count, 4);
        assert_eq!(config.domain_min, -1.0);

        let json_path = dir.path().join("run.json");
        fs::write(&json_path, r#"{"count": 2, "parameter": 0.5}"#).unwrap();
        let config = PipelineConfig::from_file(&json_path).unwrap();
        assert_eq!(config.count, 2);
        assert_eq!(config.parameter, 0.5);
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let yaml = dir.path().join("run.yaml");
        fs::write(&yaml, "count: 1").unwrap();
        assert!(matches!(
            PipelineConfig::from_file(&yaml),
            Err(CurveError::Config(_))
        ));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            PipelineConfig::from_file(&missing),
            Err(CurveError::Io(_))
        ));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "count = \"many\"").unwrap();
        assert!(matches!(
            PipelineConfig::from_file(&bad),
            Err(CurveError::Serialization(_))
        ));

        let zero = dir.path().join("zero.toml");
        fs::write(&zero, "max_attempts = 0").unwrap();
        assert!(PipelineConfig::from_file(&zero).unwrap_err().is_config());
    }
}
