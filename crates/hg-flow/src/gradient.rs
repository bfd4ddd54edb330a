//! Hydraulic gradient: I = Δh / ΔL.

use hg_core::{HgResult, Real, ensure_finite, ensure_nonzero};

/// Compute the hydraulic gradient I = Δh / ΔL.
///
/// `delta_h` and `delta_l` must be in the same length units; the result is
/// dimensionless. The sign encodes flow direction and is preserved.
pub fn gradient(delta_h: Real, delta_l: Real) -> HgResult<Real> {
    let delta_h = ensure_finite(delta_h, "delta_h")?;
    let delta_l = ensure_nonzero(delta_l, "delta_l")?;
    Ok(delta_h / delta_l)
}
