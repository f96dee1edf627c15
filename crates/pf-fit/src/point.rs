//! Control points and the ordered point set.

use pf_core::{IdAllocator, PfError, PfResult, PointId};
use serde::{Deserialize, Serialize};

/// A 2D control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The same point with its axes exchanged.
    pub fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// A point together with its stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub id: PointId,
    pub point: Point,
}

/// Ordered collection of control points.
///
/// Order decides which three points survive truncation when fitting; it has no
/// geometric meaning. Ids are never reused within one set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    entries: Vec<ControlPoint>,
    ids: IdAllocator,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points<I, P>(points: I) -> PfResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let mut set = Self::new();
        for p in points {
            set.push(p.into())?;
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a point at the end of the set.
    pub fn push(&mut self, point: Point) -> PfResult<PointId> {
        let id = self.ids.next_id().ok_or(PfError::InvalidArg {
            what: "point id space exhausted",
        })?;
        self.entries.push(ControlPoint { id, point });
        Ok(id)
    }

    pub fn get(&self, id: PointId) -> Option<Point> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.point)
    }

    /// Position of `id` in fitting order.
    pub fn position(&self, id: PointId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn at(&self, index: usize) -> PfResult<ControlPoint> {
        self.entries.get(index).copied().ok_or(PfError::IndexOob {
            what: "point set",
            index,
            len: self.entries.len(),
        })
    }

    /// Move an existing point to a new location; order is preserved.
    pub fn set(&mut self, id: PointId, point: Point) -> PfResult<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(PfError::UnknownId {
                what: "point",
                id: id.index(),
            })?;
        entry.point = point;
        Ok(())
    }

    pub fn remove(&mut self, id: PointId) -> PfResult<Point> {
        let index = self.position(id).ok_or(PfError::UnknownId {
            what: "point",
            id: id.index(),
        })?;
        Ok(self.entries.remove(index).point)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint> + '_ {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<PointId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Coordinates in fitting order.
    pub fn points(&self) -> Vec<Point> {
        self.entries.iter().map(|e| e.point).collect()
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.entries
    }
}
