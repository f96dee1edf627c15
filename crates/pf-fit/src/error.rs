//! Error types for fitting operations.

use pf_core::PfError;
use thiserror::Error;

/// Result type for fitting operations.
pub type FitResult<T> = Result<T, FitError>;

/// Errors raised while fitting a parabola.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// Fewer than three control points.
    #[error("insufficient points to determine a unique parabola (got {count}, need 3)")]
    InsufficientPoints { count: usize },

    /// Two of the three fitted points share an x-coordinate.
    #[error("no unique parabola through points with repeated x-coordinate (x = {x})")]
    RepeatedX { x: f64 },

    /// Two of the three fitted points have distinct but practically equal
    /// x-coordinates (closer than the absolute tolerance).
    #[error("x-coordinates too close to fit a unique parabola ({x0} and {x1})")]
    CloseX { x0: f64, x1: f64 },

    /// The linear solve failed or produced non-finite coefficients.
    #[error("coefficient matrix is singular")]
    Singular,

    #[error(transparent)]
    Core(#[from] PfError),
}

impl FitError {
    /// Whether the error means "no unique parabola exists for these points".
    ///
    /// Every error produced by [`crate::fit_parabola`] is degenerate input;
    /// `Core` errors other than non-finite coordinates come from point editing.
    pub fn is_degenerate(&self) -> bool {
        match self {
            FitError::InsufficientPoints { .. }
            | FitError::RepeatedX { .. }
            | FitError::CloseX { .. }
            | FitError::Singular => true,
            FitError::Core(PfError::NonFinite { .. }) => true,
            FitError::Core(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_condition() {
        let msg = FitError::InsufficientPoints { count: 2 }.to_string();
        assert!(msg.contains("insufficient points"));
        let msg = FitError::RepeatedX { x: 1.0 }.to_string();
        assert!(msg.contains("repeated x-coordinate"));
    }

    #[test]
    fn degenerate_classification() {
        assert!(FitError::Singular.is_degenerate());
        assert!(FitError::CloseX { x0: 0.0, x1: 1e-13 }.is_degenerate());
        assert!(
            FitError::Core(PfError::NonFinite {
                what: "point x",
                value: f64::NAN
            })
            .is_degenerate()
        );
        assert!(
            !FitError::Core(PfError::UnknownId {
                what: "point",
                id: 4
            })
            .is_degenerate()
        );
    }
}
