//! Publish/subscribe fan-out of curve updates to rendering collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use pf_fit::Curve;

use crate::state::{CurveKind, CurveState};

/// Something the controller published.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveEvent {
    /// A curve buffer was replaced wholesale.
    Replaced { kind: CurveKind, curve: Curve },
    /// A curve's freshness tag changed.
    StateChanged { kind: CurveKind, state: CurveState },
}

impl CurveEvent {
    pub fn kind(&self) -> CurveKind {
        match self {
            CurveEvent::Replaced { kind, .. } | CurveEvent::StateChanged { kind, .. } => *kind,
        }
    }
}

/// Subscriber to controller events.
pub trait CurveObserver {
    fn notify(&mut self, event: &CurveEvent);
}

impl<F> CurveObserver for F
where
    F: FnMut(&CurveEvent),
{
    fn notify(&mut self, event: &CurveEvent) {
        self(event)
    }
}

/// Observer that records every event; clones share one log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<CurveEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn events(&self) -> Vec<CurveEvent> {
        self.events.borrow().clone()
    }

    /// Drain recorded events.
    pub fn take(&self) -> Vec<CurveEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl CurveObserver for EventLog {
    fn notify(&mut self, event: &CurveEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_log_clones_share_storage() {
        let log = EventLog::new();
        let mut handle = log.clone();
        handle.notify(&CurveEvent::StateChanged {
            kind: CurveKind::Smooth,
            state: CurveState::stale(),
        });
        assert_eq!(log.len(), 1);
        assert_eq!(log.take()[0].kind(), CurveKind::Smooth);
        assert!(log.is_empty());
    }

    #[test]
    fn closures_are_observers() {
        let mut count = 0;
        {
            let mut observer = |_: &CurveEvent| count += 1;
            observer.notify(&CurveEvent::Replaced {
                kind: CurveKind::Rough,
                curve: Curve::default(),
            });
        }
        assert_eq!(count, 1);
    }
}
