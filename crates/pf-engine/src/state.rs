//! Curve freshness and the presentation derived from it.

use serde::{Deserialize, Serialize};

/// Which of the two curve buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// Low-resolution preview, refreshed on every edit.
    Rough,
    /// High-resolution curve, refreshed on request.
    Smooth,
}

impl CurveKind {
    pub fn label(self) -> &'static str {
        match self {
            CurveKind::Rough => "rough",
            CurveKind::Smooth => "smooth",
        }
    }
}

/// Whether the smooth curve reflects the current control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Fresh,
    Stale,
}

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashPattern {
    Solid,
    Dashed,
    Dotted,
}

impl DashPattern {
    /// On/off segment lengths in screen units.
    pub fn segments(self) -> [f32; 2] {
        match self {
            DashPattern::Solid => [1.0, 0.0],
            DashPattern::Dashed => [6.0, 3.0],
            DashPattern::Dotted => [2.0, 4.0],
        }
    }
}

/// Named line colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveColor {
    Green,
    Red,
    Blue,
}

impl CurveColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            CurveColor::Green => [0, 128, 0],
            CurveColor::Red => [255, 0, 0],
            CurveColor::Blue => [31, 119, 180],
        }
    }
}

/// Presentation attributes for a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveStyle {
    pub dash: DashPattern,
    pub color: CurveColor,
}

impl CurveStyle {
    pub const ROUGH: CurveStyle = CurveStyle {
        dash: DashPattern::Dotted,
        color: CurveColor::Blue,
    };
    pub const FRESH: CurveStyle = CurveStyle {
        dash: DashPattern::Solid,
        color: CurveColor::Green,
    };
    pub const STALE: CurveStyle = CurveStyle {
        dash: DashPattern::Dashed,
        color: CurveColor::Red,
    };
}

/// Freshness tag of the smooth curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveState {
    freshness: Freshness,
}

impl CurveState {
    pub const fn fresh() -> Self {
        Self {
            freshness: Freshness::Fresh,
        }
    }

    pub const fn stale() -> Self {
        Self {
            freshness: Freshness::Stale,
        }
    }

    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    pub fn is_fresh(&self) -> bool {
        self.freshness == Freshness::Fresh
    }

    pub fn style(&self) -> CurveStyle {
        match self.freshness {
            Freshness::Fresh => CurveStyle::FRESH,
            Freshness::Stale => CurveStyle::STALE,
        }
    }

    /// Returns `true` if the tag changed.
    pub fn mark_stale(&mut self) -> bool {
        self.transition(Freshness::Stale)
    }

    /// Returns `true` if the tag changed.
    pub fn mark_fresh(&mut self) -> bool {
        self.transition(Freshness::Fresh)
    }

    fn transition(&mut self, to: Freshness) -> bool {
        let changed = self.freshness != to;
        self.freshness = to;
        changed
    }
}

impl Default for CurveState {
    fn default() -> Self {
        Self::fresh()
    }
}
