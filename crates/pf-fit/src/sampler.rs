//! Evaluation of fitted coefficients on an even grid.

use pf_core::lerp;
use serde::{Deserialize, Serialize};

use crate::coefficients::Coefficients;
use crate::domain::{Domain, Resolution};
use crate::point::Point;

/// Sampled curve, ordered by increasing x.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }
}

/// Sample `coefficients` at `resolution` evenly spaced x values spanning
/// `domain`, both endpoints included.
pub fn sample(coefficients: &Coefficients, domain: Domain, resolution: Resolution) -> Curve {
    let n = resolution.get();
    let last = (n - 1) as f64;
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        let x = lerp(domain.min(), domain.max(), i as f64 / last);
        points.push(Point::new(x, coefficients.eval(x)));
    }

    Curve { points }
}
