//! pf-core: shared foundation for parafit.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - ids (stable compact IDs for control points)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{PfError, PfResult};
pub use ids::*;
pub use numeric::*;
