//! hg-core: stable foundation for hydrogeo.
//!
//! Contains:
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HgError, HgResult};
pub use numeric::*;
