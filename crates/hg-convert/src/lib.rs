//! hg-convert: unit and concentration conversions for hydrogeo.
//!
//! Provides:
//! - length, flow-rate, and hydraulic-conductivity conversions
//! - contaminant concentration conversions (mg/L, µg/L, mol/L)
//!
//! Every conversion is a pure function of one or two `f64` scalars; the
//! caller supplies values in the units a function documents and receives a
//! value in the units it promises. No unit metadata is carried at runtime.

pub mod concentration;
pub mod units;

pub use concentration::{mg_to_mol, mg_to_ug, mol_to_mg, ug_to_mg};
pub use units::{
    feet_to_meters, gpm_to_l_per_s, l_per_s_to_gpm, m_per_day_to_m_per_s, m_per_s_to_m_per_day,
    meters_to_feet,
};
