//! Parabola fitting and curve sampling.
//!
//! Three control points determine a unique parabola `y = a·x² + b·x + c` as
//! long as their x-coordinates are pairwise distinct. This crate provides:
//! - [`PointSet`]: the ordered, editable collection of control points
//! - [`fit_parabola`]: the 3×3 solve that turns the first three points into
//!   [`Coefficients`], or reports degenerate input
//! - [`sample`]: evaluation of coefficients on an evenly spaced grid over a
//!   symmetric [`Domain`]
//!
//! Everything here is pure and synchronous.

pub mod coefficients;
pub mod domain;
pub mod error;
pub mod point;
pub mod sampler;
pub mod solver;

pub use coefficients::Coefficients;
pub use domain::{Domain, Resolution};
pub use error::{FitError, FitResult};
pub use pf_core::PointId;
pub use point::{ControlPoint, Point, PointSet};
pub use sampler::{Curve, sample};
pub use solver::{FIT_POINTS, Fit, TruncationNotice, fit_parabola, fit_parabola_with};
