//! Plot orientations sharing one curve buffer.

use pf_fit::{Curve, Point};
use serde::{Deserialize, Serialize};

/// How a view maps curve coordinates onto plot axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotOrientation {
    /// Horizontal axis x, vertical axis y.
    #[default]
    Primary,
    /// Horizontal axis y, vertical axis x.
    Swapped,
}

impl PlotOrientation {
    pub fn project_point(self, p: Point) -> [f64; 2] {
        match self {
            PlotOrientation::Primary => [p.x, p.y],
            PlotOrientation::Swapped => [p.y, p.x],
        }
    }

    /// Inverse of [`PlotOrientation::project_point`].
    pub fn unproject(self, plot: [f64; 2]) -> Point {
        match self {
            PlotOrientation::Primary => Point::new(plot[0], plot[1]),
            PlotOrientation::Swapped => Point::new(plot[1], plot[0]),
        }
    }

    pub fn project(self, curve: &Curve) -> Vec<[f64; 2]> {
        curve.points().iter().map(|&p| self.project_point(p)).collect()
    }

    /// Horizontal and vertical axis labels.
    pub fn axis_labels(self) -> (&'static str, &'static str) {
        match self {
            PlotOrientation::Primary => ("x", "y"),
            PlotOrientation::Swapped => ("y", "x"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swapped_view_mirrors_primary() {
        let curve = Curve::from_points(vec![Point::new(-1.0, 4.0), Point::new(2.0, 5.0)]);
        let primary = PlotOrientation::Primary.project(&curve);
        let swapped = PlotOrientation::Swapped.project(&curve);
        assert_eq!(primary, vec![[-1.0, 4.0], [2.0, 5.0]]);
        assert_eq!(swapped, vec![[4.0, -1.0], [5.0, 2.0]]);
    }

    #[test]
    fn unproject_inverts_project() {
        let p = Point::new(0.25, -7.0);
        for o in [PlotOrientation::Primary, PlotOrientation::Swapped] {
            assert_eq!(o.unproject(o.project_point(p)), p);
        }
    }
}
