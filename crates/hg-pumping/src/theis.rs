//! Theis (1935) transient drawdown for a confined aquifer.

use crate::wellfunc::{WellFunctionConfig, well_function};
use hg_core::{HgResult, Real, ensure_finite, ensure_nonzero};
use std::f64::consts::PI;

/// Theis drawdown result: both `u` and the drawdown are meaningful outputs.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheisDrawdown {
    /// Dimensionless time parameter u = r²S / (4Tt)
    pub u: Real,
    /// Drawdown s = Q / (4πT) · W(u)
    pub drawdown: Real,
    /// Whether the well-function series met its tolerance
    pub converged: bool,
}

/// Compute the Theis drawdown at radius `r` and elapsed time `time`.
///
/// `q` is the pumping rate, `t` the transmissivity, `s` the storativity.
/// Zero transmissivity or zero elapsed time is a division by zero; a
/// non-positive resulting `u` (e.g. from zero storativity or radius) is an
/// invalid input to the well function and propagates from there.
pub fn theis_drawdown(q: Real, t: Real, s: Real, r: Real, time: Real) -> HgResult<TheisDrawdown> {
    let q = ensure_finite(q, "Q")?;
    let t = ensure_nonzero(t, "T")?;
    let s = ensure_finite(s, "S")?;
    let r = ensure_finite(r, "r")?;
    let time = ensure_nonzero(time, "t")?;

    let u = (r * r * s) / (4.0 * t * time);
    let wf = well_function(u, &WellFunctionConfig::default())?;
    let drawdown = (q / (4.0 * PI * t)) * wf.value;

    Ok(TheisDrawdown {
        u,
        drawdown,
        converged: wf.converged,
    })
}
