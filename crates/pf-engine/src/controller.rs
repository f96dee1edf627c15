//! State machine that decides when each curve buffer is refreshed.
//!
//! | Trigger                    | Buffer replaced | Smooth state |
//! |----------------------------|-----------------|--------------|
//! | point set changed          | rough           | Stale        |
//! | recompute requested        | smooth          | Fresh        |
//! | either, on degenerate fit  | none            | unchanged    |

use pf_fit::{
    Coefficients, Curve, FitResult, PointSet, TruncationNotice, fit_parabola, sample,
};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::observer::{CurveEvent, CurveObserver};
use crate::state::{CurveKind, CurveState, CurveStyle};

/// What a successful handler refreshed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecomputeOutcome {
    pub kind: CurveKind,
    pub coefficients: Coefficients,
    pub notice: Option<TruncationNotice>,
}

/// Owner and sole writer of the rough and smooth curve buffers.
pub struct RecomputeController {
    config: EngineConfig,
    rough: Curve,
    smooth: Curve,
    smooth_state: CurveState,
    coefficients: Coefficients,
    observers: Vec<Box<dyn CurveObserver>>,
}

impl RecomputeController {
    /// Fit the initial point set and sample both curves; the smooth curve
    /// starts Fresh.
    pub fn new(config: EngineConfig, points: &PointSet) -> FitResult<Self> {
        let fit = fit_parabola(&points.points())?;
        let rough = sample(&fit.coefficients, config.domain, config.rough);
        let smooth = sample(&fit.coefficients, config.domain, config.smooth);
        debug!(
            a = fit.coefficients.a,
            b = fit.coefficients.b,
            c = fit.coefficients.c,
            "initial fit"
        );

        Ok(Self {
            config,
            rough,
            smooth,
            smooth_state: CurveState::fresh(),
            coefficients: fit.coefficients,
            observers: Vec::new(),
        })
    }

    /// Register a subscriber for future buffer replacements and state changes.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: CurveObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// React to any committed add/move/remove on the point set.
    ///
    /// Refreshes the rough curve and marks the smooth curve Stale. On a
    /// degenerate point set nothing changes and the error is returned.
    pub fn on_point_set_changed(&mut self, points: &PointSet) -> FitResult<RecomputeOutcome> {
        let outcome = self.refresh(CurveKind::Rough, points)?;
        if self.smooth_state.mark_stale() {
            debug!("smooth curve is stale");
            self.publish(CurveEvent::StateChanged {
                kind: CurveKind::Smooth,
                state: self.smooth_state,
            });
        }
        Ok(outcome)
    }

    /// React to an explicit recompute command.
    ///
    /// Refreshes the smooth curve and marks it Fresh; the rough curve is left
    /// alone.
    pub fn on_recompute_requested(&mut self, points: &PointSet) -> FitResult<RecomputeOutcome> {
        let outcome = self.refresh(CurveKind::Smooth, points)?;
        if self.smooth_state.mark_fresh() {
            debug!("smooth curve is fresh");
            self.publish(CurveEvent::StateChanged {
                kind: CurveKind::Smooth,
                state: self.smooth_state,
            });
        }
        Ok(outcome)
    }

    fn refresh(&mut self, kind: CurveKind, points: &PointSet) -> FitResult<RecomputeOutcome> {
        let fit = fit_parabola(&points.points()).inspect_err(|e| {
            warn!(curve = kind.label(), error = %e, "recompute rejected");
        })?;

        let curve = sample(
            &fit.coefficients,
            self.config.domain,
            self.config.resolution(kind),
        );
        debug!(curve = kind.label(), samples = curve.len(), "curve replaced");

        match kind {
            CurveKind::Rough => self.rough = curve,
            CurveKind::Smooth => self.smooth = curve,
        }
        self.coefficients = fit.coefficients;

        if !self.observers.is_empty() {
            self.publish(CurveEvent::Replaced {
                kind,
                curve: self.curve(kind).clone(),
            });
        }

        Ok(RecomputeOutcome {
            kind,
            coefficients: fit.coefficients,
            notice: fit.notice,
        })
    }

    fn publish(&mut self, event: CurveEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rough(&self) -> &Curve {
        &self.rough
    }

    pub fn smooth(&self) -> &Curve {
        &self.smooth
    }

    pub fn curve(&self, kind: CurveKind) -> &Curve {
        match kind {
            CurveKind::Rough => &self.rough,
            CurveKind::Smooth => &self.smooth,
        }
    }

    pub fn smooth_state(&self) -> CurveState {
        self.smooth_state
    }

    pub fn smooth_style(&self) -> CurveStyle {
        self.smooth_state.style()
    }

    pub fn style(&self, kind: CurveKind) -> CurveStyle {
        match kind {
            CurveKind::Rough => CurveStyle::ROUGH,
            CurveKind::Smooth => self.smooth_style(),
        }
    }

    /// Coefficients of the most recent successful fit.
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Freshness;
    use pf_fit::{FitError, Point};

    fn reference_set() -> PointSet {
        PointSet::from_points([(0.0, 1.0), (1.0, 3.0), (2.0, 4.0)]).unwrap()
    }

    #[test]
    fn starts_fresh_with_both_curves() {
        let ctrl = RecomputeController::new(EngineConfig::narrow(), &reference_set()).unwrap();
        assert_eq!(ctrl.rough().len(), 7);
        assert_eq!(ctrl.smooth().len(), 100);
        assert_eq!(ctrl.smooth_state().freshness(), Freshness::Fresh);
        assert_eq!(ctrl.style(CurveKind::Rough), CurveStyle::ROUGH);
    }

    #[test]
    fn degenerate_initial_set_is_rejected() {
        let set = PointSet::from_points([(0.0, 1.0), (1.0, 3.0)]).unwrap();
        let err = RecomputeController::new(EngineConfig::narrow(), &set)
            .err()
            .unwrap();
        assert_eq!(err, FitError::InsufficientPoints { count: 2 });
    }

    #[test]
    fn edit_then_recompute() {
        let mut points = reference_set();
        let mut ctrl = RecomputeController::new(EngineConfig::narrow(), &points).unwrap();
        let smooth_before = ctrl.smooth().clone();

        let id = points.ids()[2];
        points.set(id, Point::new(2.0, 0.0)).unwrap();
        let outcome = ctrl.on_point_set_changed(&points).unwrap();

        assert_eq!(outcome.kind, CurveKind::Rough);
        assert_eq!(ctrl.smooth(), &smooth_before);
        assert_eq!(ctrl.smooth_style(), CurveStyle::STALE);

        let rough_after_edit = ctrl.rough().clone();
        ctrl.on_recompute_requested(&points).unwrap();
        assert_eq!(ctrl.rough(), &rough_after_edit);
        assert_ne!(ctrl.smooth(), &smooth_before);
        assert_eq!(ctrl.smooth_style(), CurveStyle::FRESH);
    }

    #[test]
    fn failed_recompute_leaves_everything_alone() {
        let mut points = reference_set();
        let mut ctrl = RecomputeController::new(EngineConfig::wide(), &points).unwrap();
        let rough = ctrl.rough().clone();
        let smooth = ctrl.smooth().clone();
        let coefficients = ctrl.coefficients();

        let id = points.ids()[1];
        points.set(id, Point::new(0.0, 9.0)).unwrap();

        assert!(ctrl.on_point_set_changed(&points).is_err());
        assert!(ctrl.on_recompute_requested(&points).is_err());
        assert_eq!(ctrl.rough(), &rough);
        assert_eq!(ctrl.smooth(), &smooth);
        assert_eq!(ctrl.coefficients(), coefficients);
        assert!(ctrl.smooth_state().is_fresh());
    }

    #[test]
    fn truncation_notice_is_forwarded() {
        let mut points = reference_set();
        let mut ctrl = RecomputeController::new(EngineConfig::narrow(), &points).unwrap();
        points.push(Point::new(5.0, 5.0)).unwrap();
        let outcome = ctrl.on_point_set_changed(&points).unwrap();
        assert_eq!(outcome.notice, Some(TruncationNotice { supplied: 4 }));
    }
}
