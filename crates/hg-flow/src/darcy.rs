//! Darcy's Law: Q = K · I · A.

use hg_core::{HgResult, Real, ensure_finite};

/// Compute volumetric discharge from Darcy's Law: Q = K · I · A.
///
/// Units of Q match the product of K, I, and A; use consistent units
/// (e.g. K in m/s and A in m² give Q in m³/s). A negative gradient yields a
/// negative discharge, meaning flow opposite the reference direction.
pub fn darcy_flow(k: Real, i: Real, a: Real) -> HgResult<Real> {
    let k = ensure_finite(k, "K")?;
    let i = ensure_finite(i, "I")?;
    let a = ensure_finite(a, "A")?;
    Ok(k * i * a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::{HgError, Tolerances, nearly_equal};

    #[test]
    fn sand_aquifer_example() {
        // K = 1e-5 m/s, I = 0.01, A = 10 m² -> Q = 1e-6 m³/s
        let q = darcy_flow(1.0e-5, 0.01, 10.0).unwrap();
        assert!(nearly_equal(q, 1.0e-6, Tolerances::default()));
    }

    #[test]
    fn sign_follows_gradient() {
        let q = darcy_flow(1.0e-5, -0.01, 10.0).unwrap();
        assert!(nearly_equal(q, -1.0e-6, Tolerances::default()));
    }

    #[test]
    fn non_finite_input_fails() {
        assert!(matches!(
            darcy_flow(Real::NAN, 0.01, 10.0),
            Err(HgError::NonFinite { what: "K", .. })
        ));
    }
}
