//! hg-pumping: well-test analysis for hydrogeo.
//!
//! Provides:
//! - Theis well function W(u) via its exponential-integral series
//! - Cooper–Jacob straight-line transmissivity and storativity
//! - Theis transient drawdown
//! - slug tests (Hvorslev, Bouwer–Rice)
//!
//! # Architecture
//!
//! The well function is the only genuine numerical routine in the
//! workspace: a truncated alternating series with a configurable tolerance
//! and term cap. Everything else is a closed-form expression that consumes
//! it (Theis drawdown) or stands alone (Cooper–Jacob, slug tests).

pub mod cooper_jacob;
pub mod slug;
pub mod theis;
pub mod wellfunc;

pub use cooper_jacob::{storativity, transmissivity};
pub use slug::{bouwer_rice_k, hvorslev_k};
pub use theis::{TheisDrawdown, theis_drawdown};
pub use wellfunc::{WellFunctionConfig, WellFunctionResult, well_function};
