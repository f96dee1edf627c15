//! Direct 3×3 solve for the parabola through three control points.

use std::fmt;

use nalgebra::{Matrix3, Vector3};
use pf_core::{Tolerances, ensure_finite};
use tracing::info;

use crate::coefficients::Coefficients;
use crate::error::{FitError, FitResult};
use crate::point::Point;

/// Number of control points consumed by a fit.
pub const FIT_POINTS: usize = 3;

/// Non-fatal notice that points beyond the third were ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationNotice {
    /// How many points were supplied.
    pub supplied: usize,
}

impl TruncationNotice {
    pub fn ignored(&self) -> usize {
        self.supplied.saturating_sub(FIT_POINTS)
    }
}

impl fmt::Display for TruncationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{FIT_POINTS} points max: only the first {FIT_POINTS} points will be considered"
        )
    }
}

/// Result of a successful fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub coefficients: Coefficients,
    pub notice: Option<TruncationNotice>,
}

/// Fit `y = a·x² + b·x + c` through the first three points.
pub fn fit_parabola(points: &[Point]) -> FitResult<Fit> {
    fit_parabola_with(points, Tolerances::default())
}

/// Like [`fit_parabola`], with an explicit tolerance for x-coordinates that
/// are too close to separate. Only `tol.abs` is used.
pub fn fit_parabola_with(points: &[Point], tol: Tolerances) -> FitResult<Fit> {
    if points.len() < FIT_POINTS {
        return Err(FitError::InsufficientPoints {
            count: points.len(),
        });
    }

    let notice = (points.len() > FIT_POINTS).then_some(TruncationNotice {
        supplied: points.len(),
    });
    if let Some(notice) = notice {
        info!(supplied = notice.supplied, "{notice}");
    }

    let used = &points[..FIT_POINTS];
    for p in used {
        ensure_finite(p.x, "point x")?;
        ensure_finite(p.y, "point y")?;
    }
    ensure_distinct_x(used, tol)?;

    // Rows are [x², x, 1].
    let matrix = Matrix3::from_fn(|row, col| {
        let x = used[row].x;
        match col {
            0 => x * x,
            1 => x,
            _ => 1.0,
        }
    });
    let rhs = Vector3::new(used[0].y, used[1].y, used[2].y);

    let solution = matrix.lu().solve(&rhs).ok_or(FitError::Singular)?;
    let coefficients = Coefficients::from(solution);
    if !coefficients.is_finite() {
        return Err(FitError::Singular);
    }

    Ok(Fit {
        coefficients,
        notice,
    })
}

fn ensure_distinct_x(points: &[Point], tol: Tolerances) -> FitResult<()> {
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            if p.x == q.x {
                return Err(FitError::RepeatedX { x: p.x });
            }
            if (p.x - q.x).abs() <= tol.abs {
                return Err(FitError::CloseX { x0: p.x, x1: q.x });
            }
        }
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use pf_core::nearly_equal;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fit_reproduces_inputs(
            x0 in -10.0_f64..10.0,
            gap1 in 0.1_f64..5.0,
            gap2 in 0.1_f64..5.0,
            ys in prop::array::uniform3(-100.0_f64..100.0),
        ) {
            let xs = [x0, x0 + gap1, x0 + gap1 + gap2];
            let points: Vec<Point> = xs.iter().zip(ys.iter()).map(|(&x, &y)| Point::new(x, y)).collect();
            let fit = fit_parabola(&points).unwrap();
            let tol = Tolerances { abs: 1e-7, rel: 1e-9 };
            for p in &points {
                prop_assert!(nearly_equal(fit.coefficients.eval(p.x), p.y, tol));
            }
        }

        #[test]
        fn extra_points_never_change_the_fit(
            extra in prop::collection::vec((-50.0_f64..50.0, -50.0_f64..50.0), 1..6),
        ) {
            let mut points = vec![Point::new(-2.0, 3.0), Point::new(0.5, -1.0), Point::new(4.0, 7.0)];
            let base = fit_parabola(&points).unwrap();
            points.extend(extra.into_iter().map(Point::from));
            let fit = fit_parabola(&points).unwrap();
            prop_assert_eq!(fit.coefficients, base.coefficients);
            prop_assert_eq!(fit.notice, Some(TruncationNotice { supplied: points.len() }));
        }
    }
}
