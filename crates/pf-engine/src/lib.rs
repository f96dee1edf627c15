//! Reactive recompute engine for the rough and smooth parabola curves.
//!
//! The engine owns two curve buffers sampled from the fitted parabola:
//! - the **rough** curve, a low-resolution preview refreshed on every point
//!   set change
//! - the **smooth** curve, a high-resolution rendering refreshed only on an
//!   explicit recompute request, tagged Fresh or Stale
//!
//! # Architecture
//!
//! - [`RecomputeController`] is the only writer of both buffers
//! - [`CurveState`] derives the smooth curve's presentation from its freshness
//! - [`CurveObserver`]s subscribe to buffer replacements and state changes
//! - [`PlotOrientation`] projects one buffer into the primary or swapped view
//!
//! Handlers are synchronous and take `&mut self`; each event runs to
//! completion before the next one is delivered.

pub mod config;
pub mod controller;
pub mod observer;
pub mod state;
pub mod view;

pub use config::{EngineConfig, Preset};
pub use controller::{RecomputeController, RecomputeOutcome};
pub use observer::{CurveEvent, CurveObserver, EventLog};
pub use state::{CurveColor, CurveKind, CurveState, CurveStyle, DashPattern, Freshness};
pub use view::PlotOrientation;
