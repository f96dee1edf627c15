//! A point editor wired to a recompute controller.

use pf_engine::{
    CurveObserver, CurveStyle, EngineConfig, Freshness, RecomputeController, RecomputeOutcome,
};
use pf_fit::{Coefficients, ControlPoint, Curve, PointSet};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::editor::{EditCommand, PointEditor};
use crate::error::AppResult;

/// Serializable view of everything a frontend renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub points: Vec<ControlPoint>,
    pub coefficients: Coefficients,
    pub smooth_state: Freshness,
    pub smooth_style: CurveStyle,
    pub rough: Curve,
    pub smooth: Curve,
}

/// Editing session: the point editor plus the engine that follows it.
///
/// Edits, undo and redo are all point set changes and take the rough path;
/// only [`Session::recompute`] refreshes the smooth curve. When an edit is
/// accepted but leaves a degenerate point set, the edit is kept and
/// [`crate::AppError::Fit`] is returned.
pub struct Session {
    editor: PointEditor,
    controller: RecomputeController,
}

impl Session {
    pub fn new(config: &SessionConfig) -> AppResult<Self> {
        config.validate()?;
        let points = PointSet::from_points(config.points.iter().copied())?;
        Self::from_parts(config.engine_config(), points)
    }

    pub fn from_parts(engine: EngineConfig, points: PointSet) -> AppResult<Self> {
        let controller = RecomputeController::new(engine, &points)?;
        info!(
            points = points.len(),
            domain = engine.domain.half_width(),
            "session started"
        );
        Ok(Self {
            editor: PointEditor::new(points),
            controller,
        })
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: CurveObserver + 'static,
    {
        self.controller.subscribe(observer);
    }

    /// Apply an edit and refresh the rough curve.
    pub fn apply(&mut self, command: &EditCommand) -> AppResult<RecomputeOutcome> {
        self.editor.apply(command)?;
        debug!(?command, "edit committed");
        self.notify_changed()
    }

    /// Refresh the smooth curve from the current points.
    pub fn recompute(&mut self) -> AppResult<RecomputeOutcome> {
        Ok(self
            .controller
            .on_recompute_requested(self.editor.points())?)
    }

    /// Undo the last edit. `Ok(None)` when there is nothing to undo.
    pub fn undo(&mut self) -> AppResult<Option<RecomputeOutcome>> {
        if !self.editor.undo() {
            return Ok(None);
        }
        self.notify_changed().map(Some)
    }

    /// Redo the last undone edit. `Ok(None)` when there is nothing to redo.
    pub fn redo(&mut self) -> AppResult<Option<RecomputeOutcome>> {
        if !self.editor.redo() {
            return Ok(None);
        }
        self.notify_changed().map(Some)
    }

    fn notify_changed(&mut self) -> AppResult<RecomputeOutcome> {
        Ok(self
            .controller
            .on_point_set_changed(self.editor.points())?)
    }

    pub fn points(&self) -> &PointSet {
        self.editor.points()
    }

    pub fn editor(&self) -> &PointEditor {
        &self.editor
    }

    pub fn controller(&self) -> &RecomputeController {
        &self.controller
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            points: self.points().control_points().to_vec(),
            coefficients: self.controller.coefficients(),
            smooth_state: self.controller.smooth_state().freshness(),
            smooth_style: self.controller.smooth_style(),
            rough: self.controller.rough().clone(),
            smooth: self.controller.smooth().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use pf_engine::CurveKind;

    #[test]
    fn default_session_matches_reference_fit() {
        let session = Session::new(&SessionConfig::default()).unwrap();
        let k = session.controller().coefficients();
        assert!((k.a + 0.5).abs() < 1e-12);
        assert!((k.b - 2.5).abs() < 1e-12);
        assert!((k.c - 1.0).abs() < 1e-12);
    }

    #[test]
    fn undo_is_a_point_set_change() {
        let mut session = Session::new(&SessionConfig::default()).unwrap();
        session
            .apply(&EditCommand::Move {
                index: 0,
                x: 0.0,
                y: 0.0,
            })
            .unwrap();
        session.recompute().unwrap();
        assert!(session.controller().smooth_state().is_fresh());

        let outcome = session.undo().unwrap().unwrap();
        assert_eq!(outcome.kind, CurveKind::Rough);
        assert!(!session.controller().smooth_state().is_fresh());
        assert!(session.redo().unwrap().is_some());
        assert!(session.redo().unwrap().is_none());
    }

    #[test]
    fn degenerate_edit_is_kept_but_not_fitted() {
        let mut session = Session::new(&SessionConfig::default()).unwrap();
        let rough = session.controller().rough().clone();

        let err = session.apply(&EditCommand::Remove { index: 0 }).unwrap_err();
        assert!(matches!(err, AppError::Fit(_)));
        assert_eq!(session.points().len(), 2);
        assert_eq!(session.controller().rough(), &rough);

        session.undo().unwrap();
        assert_eq!(session.points().len(), 3);
    }

    #[test]
    fn rejected_edit_changes_nothing() {
        let mut session = Session::new(&SessionConfig::default()).unwrap();
        let err = session.apply(&EditCommand::Remove { index: 9 }).unwrap_err();
        assert!(matches!(err, AppError::Edit(_)));
        assert!(!session.editor().can_undo());
    }

    #[test]
    fn snapshot_reports_state() {
        let mut session = Session::new(&SessionConfig::default()).unwrap();
        session.apply(&EditCommand::Add { x: 3.0, y: 3.0 }).unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.points.len(), 4);
        assert_eq!(snap.smooth_state, Freshness::Stale);
        assert_eq!(snap.smooth_style, CurveStyle::STALE);
        assert_eq!(snap.rough.len(), 7);
        assert_eq!(snap.smooth.len(), 100);
    }
}
