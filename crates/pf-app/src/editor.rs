//! Point editing with undo/redo history.

use pf_core::PfResult;
use pf_fit::{Point, PointSet};
use serde::{Deserialize, Serialize};

/// Default number of undo snapshots kept.
pub const DEFAULT_HISTORY: usize = 100;

/// A committed edit, addressed by position in fitting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditCommand {
    Add { x: f64, y: f64 },
    Move { index: usize, x: f64, y: f64 },
    Remove { index: usize },
    Replace { points: Vec<Point> },
}

/// Owner of the point set.
///
/// Every successful edit pushes the previous set onto the undo stack and
/// clears the redo stack. Failed edits leave both the set and the history
/// untouched.
#[derive(Debug, Clone)]
pub struct PointEditor {
    points: PointSet,
    undo: Vec<PointSet>,
    redo: Vec<PointSet>,
    history_limit: usize,
}

impl PointEditor {
    pub fn new(points: PointSet) -> Self {
        Self::with_history_limit(points, DEFAULT_HISTORY)
    }

    pub fn with_history_limit(points: PointSet, history_limit: usize) -> Self {
        Self {
            points,
            undo: Vec::new(),
            redo: Vec::new(),
            history_limit,
        }
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn apply(&mut self, command: &EditCommand) -> PfResult<()> {
        match command {
            EditCommand::Add { x, y } => self.add(Point::new(*x, *y)),
            EditCommand::Move { index, x, y } => self.move_point(*index, Point::new(*x, *y)),
            EditCommand::Remove { index } => self.remove(*index),
            EditCommand::Replace { points } => self.replace_all(points),
        }
    }

    pub fn add(&mut self, point: Point) -> PfResult<()> {
        self.commit(|set| set.push(point).map(|_| ()))
    }

    pub fn move_point(&mut self, index: usize, point: Point) -> PfResult<()> {
        self.commit(|set| {
            let id = set.at(index)?.id;
            set.set(id, point)
        })
    }

    pub fn remove(&mut self, index: usize) -> PfResult<()> {
        self.commit(|set| {
            let id = set.at(index)?.id;
            set.remove(id).map(|_| ())
        })
    }

    pub fn replace_all(&mut self, points: &[Point]) -> PfResult<()> {
        self.commit(|set| {
            *set = PointSet::from_points(points.iter().copied())?;
            Ok(())
        })
    }

    /// Restore the previous point set. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.points, previous);
                self.redo.push(current);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone edit. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.points, next);
                self.undo.push(current);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    fn commit<F>(&mut self, edit: F) -> PfResult<()>
    where
        F: FnOnce(&mut PointSet) -> PfResult<()>,
    {
        let mut next = self.points.clone();
        edit(&mut next)?;

        let previous = std::mem::replace(&mut self.points, next);
        self.undo.push(previous);
        if self.undo.len() > self.history_limit {
            self.undo.remove(0);
        }
        self.redo.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::PfError;

    fn editor() -> PointEditor {
        PointEditor::new(PointSet::from_points([(0.0, 1.0), (1.0, 3.0), (2.0, 4.0)]).unwrap())
    }

    #[test]
    fn undo_redo_round_trip() {
        let mut ed = editor();
        let original = ed.points().points();

        ed.move_point(1, Point::new(1.0, -3.0)).unwrap();
        ed.add(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(ed.points().len(), 4);

        assert!(ed.undo());
        assert_eq!(ed.points().len(), 3);
        assert!(ed.undo());
        assert_eq!(ed.points().points(), original);
        assert!(!ed.undo());

        assert!(ed.redo());
        assert_eq!(ed.points().points()[1], Point::new(1.0, -3.0));
        assert!(ed.can_redo());
    }

    #[test]
    fn new_edit_clears_redo() {
        let mut ed = editor();
        ed.remove(0).unwrap();
        ed.undo();
        assert!(ed.can_redo());
        ed.add(Point::new(9.0, 9.0)).unwrap();
        assert!(!ed.can_redo());
    }

    #[test]
    fn failed_edit_keeps_history() {
        let mut ed = editor();
        let err = ed.remove(7).unwrap_err();
        assert!(matches!(err, PfError::IndexOob { index: 7, len: 3, .. }));
        assert!(!ed.can_undo());
        assert_eq!(ed.points().len(), 3);
    }

    #[test]
    fn history_is_bounded() {
        let mut ed = PointEditor::with_history_limit(PointSet::new(), 2);
        for i in 0..5 {
            ed.add(Point::new(i as f64, 0.0)).unwrap();
        }
        assert!(ed.undo());
        assert!(ed.undo());
        assert!(!ed.undo());
        assert_eq!(ed.points().len(), 3);
    }

    #[test]
    fn commands_dispatch() {
        let mut ed = editor();
        ed.apply(&EditCommand::Replace {
            points: vec![Point::new(-1.0, 1.0), Point::new(0.0, 0.0)],
        })
        .unwrap();
        assert_eq!(ed.points().len(), 2);
        ed.apply(&EditCommand::Add { x: 1.0, y: 1.0 }).unwrap();
        ed.apply(&EditCommand::Move {
            index: 0,
            x: -2.0,
            y: 4.0,
        })
        .unwrap();
        assert_eq!(ed.points().points()[0], Point::new(-2.0, 4.0));
    }
}
