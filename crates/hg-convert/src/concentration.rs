//! Contaminant concentration conversions for water quality work.
//!
//! Supports mg/L ↔ µg/L and mol/L ↔ mg/L. The molar conversions need the
//! species' molecular weight in g/mol, which must be strictly positive.

use hg_core::{HgResult, Real, ensure_finite, ensure_positive};

/// Convert concentration from mg/L to µg/L.
pub fn mg_to_ug(value: Real) -> HgResult<Real> {
    Ok(ensure_finite(value, "concentration")? * 1000.0)
}

/// Convert concentration from µg/L to mg/L.
pub fn ug_to_mg(value: Real) -> HgResult<Real> {
    Ok(ensure_finite(value, "concentration")? / 1000.0)
}

/// Convert concentration from mol/L to mg/L.
///
/// mg/L = mol/L * MW * 1000, with MW in g/mol.
pub fn mol_to_mg(value: Real, mw: Real) -> HgResult<Real> {
    let value = ensure_finite(value, "concentration")?;
    let mw = ensure_positive(mw, "molecular weight")?;
    Ok(value * mw * 1000.0)
}

/// Convert concentration from mg/L to mol/L.
///
/// mol/L = (mg/L) / (MW * 1000), with MW in g/mol.
pub fn mg_to_mol(value: Real, mw: Real) -> HgResult<Real> {
    let value = ensure_finite(value, "concentration")?;
    let mw = ensure_positive(mw, "molecular weight")?;
    Ok(value / (mw * 1000.0))
}
