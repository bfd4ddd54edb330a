//! Slug-test analysis for hydraulic conductivity estimation.
//!
//! A slug test displaces water in a well instantaneously and tracks head
//! recovery; the time to recover to 37% of the initial displacement gives a
//! first-pass conductivity estimate without pumping equipment.
//!
//! References: Hvorslev (1951), USACE WES Bulletin 36; Bouwer & Rice
//! (1976), Water Resources Research 12(3), 423–428.

use hg_core::{HgError, HgResult, Real, ensure_positive};

/// Hvorslev hydraulic conductivity.
///
/// K = r² · ln(L / r) / (2 · L · t37), with `r` the well radius,
/// `screen_len` the screened interval length L (must exceed `r`), and `t37`
/// the time to 37% recovery.
pub fn hvorslev_k(r: Real, screen_len: Real, t37: Real) -> HgResult<Real> {
    let r = ensure_positive(r, "r")?;
    let screen_len = ensure_positive(screen_len, "screen length")?;
    let t37 = ensure_positive(t37, "t37")?;
    if screen_len <= r {
        return Err(HgError::InvalidInput {
            what: "screen length must exceed well radius",
        });
    }
    Ok((r * r * (screen_len / r).ln()) / (2.0 * screen_len * t37))
}

/// Bouwer–Rice hydraulic conductivity for unconfined or partially
/// penetrating wells.
///
/// K = rw² · ln(re / rw) / (2 · L · t37), with `rw` the well radius and
/// `re` the effective radius of influence (must exceed `rw`).
pub fn bouwer_rice_k(rw: Real, re: Real, screen_len: Real, t37: Real) -> HgResult<Real> {
    let rw = ensure_positive(rw, "rw")?;
    let re = ensure_positive(re, "re")?;
    let screen_len = ensure_positive(screen_len, "screen length")?;
    let t37 = ensure_positive(t37, "t37")?;
    if re <= rw {
        return Err(HgError::InvalidInput {
            what: "effective radius must exceed well radius",
        });
    }
    Ok((rw * rw * (re / rw).ln()) / (2.0 * screen_len * t37))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::{Tolerances, nearly_equal};

    #[test]
    fn hvorslev_worked_example() {
        // r = 5 cm, screen 2 m, t37 = 60 s
        let k = hvorslev_k(0.05, 2.0, 60.0).unwrap();
        let expected = (0.05 * 0.05 * (2.0_f64 / 0.05).ln()) / (2.0 * 2.0 * 60.0);
        assert!(nearly_equal(k, expected, Tolerances::default()));
        assert!(k > 0.0);
    }

    #[test]
    fn bouwer_rice_worked_example() {
        let k = bouwer_rice_k(0.05, 10.0, 2.0, 60.0).unwrap();
        let expected = (0.05 * 0.05 * (10.0_f64 / 0.05).ln()) / (2.0 * 2.0 * 60.0);
        assert!(nearly_equal(k, expected, Tolerances::default()));
    }

    #[test]
    fn geometry_domains_are_enforced() {
        assert!(matches!(
            hvorslev_k(0.05, 0.04, 60.0),
            Err(HgError::InvalidInput { .. })
        ));
        assert!(matches!(
            hvorslev_k(0.0, 2.0, 60.0),
            Err(HgError::InvalidInput { what: "r" })
        ));
        assert!(matches!(
            bouwer_rice_k(0.05, 0.05, 2.0, 60.0),
            Err(HgError::InvalidInput { .. })
        ));
        assert!(matches!(
            bouwer_rice_k(0.05, 10.0, 2.0, -1.0),
            Err(HgError::InvalidInput { what: "t37" })
        ));
    }
}
