//! Sampling interval and resolution.

use pf_core::{PfError, PfResult, Real};
use serde::{Deserialize, Serialize};

/// Symmetric sampling interval `[-half_width, half_width]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDomain")]
pub struct Domain {
    half_width: Real,
}

#[derive(Deserialize)]
struct RawDomain {
    half_width: Real,
}

impl TryFrom<RawDomain> for Domain {
    type Error = PfError;

    fn try_from(raw: RawDomain) -> PfResult<Self> {
        Domain::symmetric(raw.half_width)
    }
}

impl Domain {
    /// `[-3, 3]`
    pub const NARROW: Domain = Domain { half_width: 3.0 };
    /// `[-10, 10]`
    pub const WIDE: Domain = Domain { half_width: 10.0 };

    pub fn symmetric(half_width: Real) -> PfResult<Self> {
        if !half_width.is_finite() {
            return Err(PfError::NonFinite {
                what: "domain half width",
                value: half_width,
            });
        }
        if half_width <= 0.0 {
            return Err(PfError::InvalidArg {
                what: "domain half width must be positive",
            });
        }
        Ok(Self { half_width })
    }

    pub fn half_width(&self) -> Real {
        self.half_width
    }

    pub fn min(&self) -> Real {
        -self.half_width
    }

    pub fn max(&self) -> Real {
        self.half_width
    }

    pub fn contains(&self, x: Real) -> bool {
        x >= self.min() && x <= self.max()
    }
}

/// Number of samples along a curve; always at least two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Resolution(usize);

impl Resolution {
    pub const MIN: usize = 2;

    /// Preview resolution for the narrow domain.
    pub const ROUGH_NARROW: Resolution = Resolution(7);
    /// Preview resolution for the wide domain.
    pub const ROUGH_WIDE: Resolution = Resolution(10);
    /// Committed resolution.
    pub const SMOOTH: Resolution = Resolution(100);

    pub fn new(samples: usize) -> PfResult<Self> {
        if samples < Self::MIN {
            return Err(PfError::BelowMinimum {
                what: "sample count",
                value: samples,
                min: Self::MIN,
            });
        }
        Ok(Self(samples))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for Resolution {
    type Error = PfError;

    fn try_from(samples: usize) -> PfResult<Self> {
        Resolution::new(samples)
    }
}

impl From<Resolution> for usize {
    fn from(r: Resolution) -> Self {
        r.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(Domain::NARROW.min(), -3.0);
        assert_eq!(Domain::WIDE.max(), 10.0);
        assert!(Domain::NARROW.contains(0.0));
        assert!(!Domain::NARROW.contains(3.5));
    }

    #[test]
    fn domain_rejects_bad_widths() {
        assert!(Domain::symmetric(0.0).is_err());
        assert!(Domain::symmetric(-1.0).is_err());
        assert!(matches!(
            Domain::symmetric(f64::INFINITY),
            Err(PfError::NonFinite { .. })
        ));
    }

    #[test]
    fn resolution_minimum() {
        assert!(Resolution::new(1).is_err());
        assert_eq!(Resolution::new(2).unwrap().get(), 2);
    }
}
