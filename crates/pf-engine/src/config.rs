//! Engine configuration: sampling domain and the two resolutions.

use std::str::FromStr;

use pf_core::{PfError, PfResult};
use pf_fit::{Domain, Resolution};
use serde::{Deserialize, Serialize};

use crate::state::CurveKind;

/// Fixed parameters supplied once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub domain: Domain,
    pub rough: Resolution,
    pub smooth: Resolution,
}

impl EngineConfig {
    /// `[-3, 3]`, 7 rough samples, 100 smooth samples.
    pub fn narrow() -> Self {
        Self {
            domain: Domain::NARROW,
            rough: Resolution::ROUGH_NARROW,
            smooth: Resolution::SMOOTH,
        }
    }

    /// `[-10, 10]`, 10 rough samples, 100 smooth samples.
    pub fn wide() -> Self {
        Self {
            domain: Domain::WIDE,
            rough: Resolution::ROUGH_WIDE,
            smooth: Resolution::SMOOTH,
        }
    }

    pub fn resolution(&self, kind: CurveKind) -> Resolution {
        match kind {
            CurveKind::Rough => self.rough,
            CurveKind::Smooth => self.smooth,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::narrow()
    }
}

/// Named engine configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Narrow,
    Wide,
}

impl Preset {
    pub fn config(self) -> EngineConfig {
        match self {
            Preset::Narrow => EngineConfig::narrow(),
            Preset::Wide => EngineConfig::wide(),
        }
    }
}

impl FromStr for Preset {
    type Err = PfError;

    fn from_str(s: &str) -> PfResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "narrow" => Ok(Preset::Narrow),
            "wide" => Ok(Preset::Wide),
            _ => Err(PfError::InvalidArg {
                what: "preset (expected narrow or wide)",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_program_variants() {
        let narrow = Preset::Narrow.config();
        assert_eq!(narrow.domain.half_width(), 3.0);
        assert_eq!(narrow.rough.get(), 7);
        assert_eq!(narrow.smooth.get(), 100);

        let wide = Preset::Wide.config();
        assert_eq!(wide.domain.half_width(), 10.0);
        assert_eq!(wide.resolution(CurveKind::Rough).get(), 10);
    }

    #[test]
    fn preset_from_str() {
        assert_eq!("Wide".parse::<Preset>().unwrap(), Preset::Wide);
        assert!("huge".parse::<Preset>().is_err());
    }

    #[test]
    fn config_yaml_is_validated() {
        let yaml = "domain:\n  half_width: 5.0\nrough: 9\nsmooth: 200\n";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.domain.max(), 5.0);
        assert_eq!(config.rough.get(), 9);

        let bad = "domain:\n  half_width: 5.0\nrough: 1\nsmooth: 200\n";
        assert!(serde_yaml::from_str::<EngineConfig>(bad).is_err());

        let bad_domain = "domain:\n  half_width: -1.0\nrough: 5\nsmooth: 200\n";
        assert!(serde_yaml::from_str::<EngineConfig>(bad_domain).is_err());
    }
}
