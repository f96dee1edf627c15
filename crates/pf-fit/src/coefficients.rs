use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Coefficients of `y = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluate the parabola at `x` (Horner form).
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

impl From<Vector3<f64>> for Coefficients {
    fn from(v: Vector3<f64>) -> Self {
        Self {
            a: v[0],
            b: v[1],
            c: v[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_matches_expanded_form() {
        let k = Coefficients::new(-0.5, 2.5, 1.0);
        for x in [-3.0, -1.0, 0.0, 0.5, 2.0] {
            let expanded = -0.5 * x * x + 2.5 * x + 1.0;
            assert!((k.eval(x) - expanded).abs() < 1e-12);
        }
    }

    #[test]
    fn detects_non_finite() {
        assert!(Coefficients::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Coefficients::new(f64::NAN, 2.0, 3.0).is_finite());
    }
}
