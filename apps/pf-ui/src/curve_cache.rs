//! Render-side copy of the curve buffers, kept current by controller events.

use std::cell::RefCell;
use std::rc::Rc;

use pf_engine::{
    CurveEvent, CurveKind, CurveObserver, CurveState, CurveStyle, PlotOrientation,
    RecomputeController,
};
use pf_fit::Curve;

#[derive(Default)]
struct CachedCurves {
    rough: Curve,
    smooth: Curve,
    smooth_state: CurveState,
}

/// Shared between the controller (as a subscriber) and the plot views.
#[derive(Clone, Default)]
pub struct CurveCache {
    inner: Rc<RefCell<CachedCurves>>,
}

impl CurveCache {
    /// Start from the controller's current buffers; later changes arrive as
    /// events.
    pub fn seeded(controller: &RecomputeController) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CachedCurves {
                rough: controller.rough().clone(),
                smooth: controller.smooth().clone(),
                smooth_state: controller.smooth_state(),
            })),
        }
    }

    pub fn project(&self, kind: CurveKind, orientation: PlotOrientation) -> Vec<[f64; 2]> {
        let inner = self.inner.borrow();
        match kind {
            CurveKind::Rough => orientation.project(&inner.rough),
            CurveKind::Smooth => orientation.project(&inner.smooth),
        }
    }

    pub fn smooth_state(&self) -> CurveState {
        self.inner.borrow().smooth_state
    }

    pub fn style(&self, kind: CurveKind) -> CurveStyle {
        match kind {
            CurveKind::Rough => CurveStyle::ROUGH,
            CurveKind::Smooth => self.smooth_state().style(),
        }
    }
}

impl CurveObserver for CurveCache {
    fn notify(&mut self, event: &CurveEvent) {
        let mut inner = self.inner.borrow_mut();
        match event {
            CurveEvent::Replaced { kind, curve } => match kind {
                CurveKind::Rough => inner.rough = curve.clone(),
                CurveKind::Smooth => inner.smooth = curve.clone(),
            },
            CurveEvent::StateChanged { state, .. } => inner.smooth_state = *state,
        }
    }
}
