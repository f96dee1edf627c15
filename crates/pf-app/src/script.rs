//! Replayable sequences of host events.

use std::path::Path;

use pf_engine::{CurveKind, Freshness};
use pf_fit::{Coefficients, Curve, Point, TruncationNotice};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{SessionConfig, read_document};
use crate::editor::EditCommand;
use crate::error::AppResult;
use crate::session::Session;

/// One host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Step {
    Add { x: f64, y: f64 },
    Move { index: usize, x: f64, y: f64 },
    Remove { index: usize },
    Recompute,
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Refreshed {
        kind: CurveKind,
        notice: Option<TruncationNotice>,
    },
    /// Undo or redo with an empty history.
    Nothing,
    Rejected {
        message: String,
    },
}

/// Sample count and endpoints of a curve buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSummary {
    pub samples: usize,
    pub first: Option<Point>,
    pub last: Option<Point>,
}

impl From<&Curve> for CurveSummary {
    fn from(curve: &Curve) -> Self {
        Self {
            samples: curve.len(),
            first: curve.first(),
            last: curve.last(),
        }
    }
}

/// State after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub index: usize,
    pub step: Step,
    pub outcome: StepOutcome,
    pub point_count: usize,
    pub coefficients: Coefficients,
    pub smooth_state: Freshness,
    pub rough: CurveSummary,
    pub smooth: CurveSummary,
}

pub fn load_script(path: &Path) -> AppResult<Script> {
    let script: Script = read_document(path)?;
    script.session.validate()?;
    Ok(script)
}

/// Run every step in order. A rejected step is reported and the replay
/// continues; only failing to start the session is an error.
pub fn run_script(script: &Script) -> AppResult<Vec<StepReport>> {
    let mut session = Session::new(&script.session)?;
    let mut reports = Vec::with_capacity(script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        let result = match *step {
            Step::Add { x, y } => session.apply(&EditCommand::Add { x, y }).map(Some),
            Step::Move { index, x, y } => session
                .apply(&EditCommand::Move { index, x, y })
                .map(Some),
            Step::Remove { index } => session.apply(&EditCommand::Remove { index }).map(Some),
            Step::Recompute => session.recompute().map(Some),
            Step::Undo => session.undo(),
            Step::Redo => session.redo(),
        };

        let outcome = match result {
            Ok(Some(o)) => StepOutcome::Refreshed {
                kind: o.kind,
                notice: o.notice,
            },
            Ok(None) => StepOutcome::Nothing,
            Err(e) => {
                warn!(step = index, error = %e, "step rejected");
                StepOutcome::Rejected {
                    message: e.to_string(),
                }
            }
        };

        reports.push(StepReport {
            index,
            step: step.clone(),
            outcome,
            point_count: session.points().len(),
            coefficients: session.controller().coefficients(),
            smooth_state: session.controller().smooth_state().freshness(),
            rough: CurveSummary::from(session.controller().rough()),
            smooth: CurveSummary::from(session.controller().smooth()),
        });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_parse_from_yaml() {
        let yaml = r#"
session:
  preset: wide
steps:
  - op: add
    x: 4.0
    y: 1.0
  - op: move
    index: 0
    x: -1.0
    y: 2.0
  - op: recompute
  - op: undo
"#;
        let script: Script = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(script.steps.len(), 4);
        assert_eq!(script.steps[2], Step::Recompute);
        assert_eq!(
            script.steps[1],
            Step::Move {
                index: 0,
                x: -1.0,
                y: 2.0
            }
        );
    }
}
