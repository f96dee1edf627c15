//! Session configuration: engine parameters and the initial control points.

use std::path::Path;

use pf_engine::{EngineConfig, Preset};
use pf_fit::Point;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub preset: Preset,
    /// Explicit engine parameters; takes precedence over `preset`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineConfig>,
    #[serde(default = "default_points")]
    pub points: Vec<Point>,
}

fn default_points() -> Vec<Point> {
    vec![
        Point::new(0.0, 1.0),
        Point::new(1.0, 3.0),
        Point::new(2.0, 4.0),
    ]
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            engine: None,
            points: default_points(),
        }
    }
}

impl SessionConfig {
    pub fn with_preset(preset: Preset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        self.engine.unwrap_or_else(|| self.preset.config())
    }

    pub fn validate(&self) -> AppResult<()> {
        for (i, p) in self.points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(AppError::Validation(format!(
                    "point {i} has a non-finite coordinate ({}, {})",
                    p.x, p.y
                )));
            }
        }
        Ok(())
    }
}

/// Load and validate a session configuration from YAML or JSON.
pub fn load_config(path: &Path) -> AppResult<SessionConfig> {
    let config: SessionConfig = read_document(path)?;
    config.validate()?;
    Ok(config)
}

/// Deserialize a YAML or JSON document, chosen by file extension.
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(AppError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: SessionConfig = serde_yaml::from_str("preset: wide\n").unwrap();
        assert_eq!(config.preset, Preset::Wide);
        assert_eq!(config.points.len(), 3);
        assert_eq!(config.engine_config(), EngineConfig::wide());
    }

    #[test]
    fn explicit_engine_overrides_preset() {
        let yaml = "preset: wide\nengine:\n  domain:\n    half_width: 2.0\n  rough: 5\n  smooth: 50\n";
        let config: SessionConfig = serde_yaml::from_str(yaml).unwrap();
        let engine = config.engine_config();
        assert_eq!(engine.domain.max(), 2.0);
        assert_eq!(engine.rough.get(), 5);
    }

    #[test]
    fn json_points() {
        let json = r#"{"points": [{"x": 1.0, "y": 2.0}, {"x": 3.0, "y": 4.0}]}"#;
        let config: SessionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.preset, Preset::Narrow);
        assert_eq!(config.points[1], Point::new(3.0, 4.0));
    }

    #[test]
    fn validate_rejects_nan() {
        let config = SessionConfig {
            points: vec![Point::new(f64::NAN, 0.0)],
            ..SessionConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }
}
