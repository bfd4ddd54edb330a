//! Theis well function W(u), evaluated from its series expansion.
//!
//! W(u) = -γ - ln(u) + u - u²/(2·2!) + u³/(3·3!) - u⁴/(4·4!) + …
//!
//! The alternating series converges for all u > 0 but loses precision to
//! cancellation once u grows past roughly 10, where terms near n ≈ u dwarf
//! the tiny result. Pumping-test practice lives at u ≪ 1 (Cooper–Jacob
//! assumes it), so the plain series is used as-is and the degradation for
//! large u is a documented limitation of this routine.

use hg_core::{HgResult, Real, ensure_positive};

/// Euler–Mascheroni constant γ.
const EULER_GAMMA: Real = 0.5772156649;

/// Well function evaluation configuration.
pub struct WellFunctionConfig {
    /// Maximum number of series terms
    pub max_terms: usize,
    /// Relative tolerance against the accumulated sum
    pub rel_tol: Real,
    /// Absolute floor for the term magnitude
    pub abs_tol: Real,
}

impl Default for WellFunctionConfig {
    fn default() -> Self {
        Self {
            max_terms: 200,
            rel_tol: 1e-8,
            abs_tol: 1e-12,
        }
    }
}

/// Well function evaluation result.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellFunctionResult {
    /// Series value W(u)
    pub value: Real,
    /// Number of series terms accumulated
    pub terms: usize,
    /// Whether the tolerance was met before the term cap
    pub converged: bool,
}

/// Evaluate W(u) for u > 0.
///
/// Terminates when the latest term magnitude drops below `abs_tol` or below
/// `rel_tol` of the accumulated sum. Exhausting `max_terms` is not an
/// error: the best partial sum is returned with `converged = false` and a
/// warning is traced.
pub fn well_function(u: Real, config: &WellFunctionConfig) -> HgResult<WellFunctionResult> {
    let u = ensure_positive(u, "u")?;

    let mut sum = -EULER_GAMMA - u.ln() + u;
    // p = u^n / n!, so term n is p / n; start from the n = 1 term already
    // folded into the sum above.
    let mut p = u;
    let mut sign = -1.0;

    for n in 2..=config.max_terms {
        p *= u / n as Real;
        let term = p / n as Real;
        sum += sign * term;

        if term <= config.abs_tol || term <= config.rel_tol * sum.abs() {
            return Ok(WellFunctionResult {
                value: sum,
                terms: n,
                converged: true,
            });
        }
        sign = -sign;
    }

    tracing::warn!(
        u,
        max_terms = config.max_terms,
        "well function series hit the term cap before tolerance; returning partial sum"
    );
    Ok(WellFunctionResult {
        value: sum,
        terms: config.max_terms,
        converged: false,
    })
}
