//! Cooper–Jacob straight-line pumping-test analysis.
//!
//! The Cooper–Jacob method assumes confined conditions and enough elapsed
//! time that drawdown vs. log10(t) is approximately linear. Transmissivity
//! comes from the line's slope, storativity from its zero-drawdown time
//! intercept.
//!
//! Reference: Cooper & Jacob (1946), Trans. American Geophysical Union
//! 27(4), 526–534.

use hg_core::{HgResult, Real, ensure_finite, ensure_nonzero};
use std::f64::consts::PI;

/// Compute transmissivity from the Cooper–Jacob straight-line slope.
///
/// T = (2.3 · Q) / (4π · Δs), with `q` the pumping rate (e.g. m³/s) and
/// `delta_s` the drawdown per log cycle of time (e.g. m). Only an exactly
/// zero `delta_s` is rejected; sign plausibility is the caller's concern.
pub fn transmissivity(q: Real, delta_s: Real) -> HgResult<Real> {
    let q = ensure_finite(q, "Q")?;
    let delta_s = ensure_nonzero(delta_s, "delta_s")?;
    Ok((2.3 * q) / (4.0 * PI * delta_s))
}

/// Compute storativity from the Cooper–Jacob time intercept.
///
/// S = (2.25 · T · t0) / r², with `t0` the zero-drawdown time intercept and
/// `r` the radial distance to the observation well.
pub fn storativity(t: Real, t0: Real, r: Real) -> HgResult<Real> {
    let t = ensure_finite(t, "T")?;
    let t0 = ensure_finite(t0, "t0")?;
    let r = ensure_nonzero(r, "r")?;
    Ok((2.25 * t * t0) / (r * r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::{HgError, Tolerances, nearly_equal};

    #[test]
    fn transmissivity_worked_example() {
        // Q = 0.01 m³/s, Δs = 0.5 m per log cycle
        let t = transmissivity(0.01, 0.5).unwrap();
        let expected = (2.3 * 0.01) / (4.0 * PI * 0.5);
        assert!(nearly_equal(t, expected, Tolerances::default()));
    }

    #[test]
    fn storativity_worked_example() {
        // T = 1e-3 m²/s, t0 = 120 s, r = 10 m
        let s = storativity(1.0e-3, 120.0, 10.0).unwrap();
        assert!(nearly_equal(s, 2.7e-3, Tolerances::default()));
    }

    #[test]
    fn zero_denominators_fail() {
        assert!(matches!(
            transmissivity(0.01, 0.0),
            Err(HgError::DivisionByZero { what: "delta_s" })
        ));
        assert!(matches!(
            storativity(1.0e-3, 120.0, 0.0),
            Err(HgError::DivisionByZero { what: "r" })
        ));
    }

    #[test]
    fn non_finite_radius_fails() {
        assert!(matches!(
            storativity(1.0e-3, 120.0, Real::NAN),
            Err(HgError::NonFinite { what: "r", .. })
        ));
    }
}
