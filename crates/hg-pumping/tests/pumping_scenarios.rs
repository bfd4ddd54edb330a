//! Integration scenarios for pumping-test analysis over realistic
//! hydrogeological ranges.

use hg_core::{HgError, Tolerances, nearly_equal};
use hg_pumping::{storativity, theis_drawdown, transmissivity};

#[test]
fn theis_worked_example() {
    // Q = 0.01 m³/s, T = 1e-3 m²/s, S = 1e-4, r = 10 m, t = 1 h
    let result = theis_drawdown(0.01, 1.0e-3, 1.0e-4, 10.0, 3600.0).unwrap();

    let tol = Tolerances {
        abs: 1e-12,
        rel: 1e-4,
    };
    assert!(nearly_equal(result.u, 6.9444e-4, tol));
    assert!(nearly_equal(result.drawdown, 5.3284, tol));
    assert!(result.converged);
}

#[test]
fn cooper_jacob_chain() {
    // Slope-derived transmissivity feeds the storativity intercept formula.
    let t = transmissivity(0.01, 0.5).unwrap();
    let s = storativity(t, 120.0, 10.0).unwrap();

    assert!(t > 0.0 && t.is_finite());
    assert!(s > 0.0 && s.is_finite());
    // S = 2.25 * T * 120 / 100 with T = 0.0036606...
    let tol = Tolerances {
        abs: 1e-12,
        rel: 1e-4,
    };
    assert!(nearly_equal(s, 2.25 * t * 120.0 / 100.0, tol));
}

#[test]
fn drawdown_finite_and_signed_across_realistic_ranges() {
    // Confined-aquifer parameter sweep: sandy silt through coarse gravel.
    for q in [1.0e-3, 0.01, 0.05] {
        for t in [1.0e-4, 1.0e-3, 1.0e-2] {
            for s in [1.0e-5, 1.0e-4, 1.0e-3] {
                for r in [1.0, 10.0, 50.0] {
                    for time in [3600.0, 86400.0] {
                        let result = theis_drawdown(q, t, s, r, time).unwrap();
                        assert!(result.u > 0.0);
                        assert!(result.drawdown.is_finite());
                        // Positive pumping always draws the head down.
                        assert!(
                            result.drawdown > 0.0,
                            "non-positive drawdown for q={q} t={t} s={s} r={r} time={time}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn negative_pumping_rate_gives_recovery() {
    // Injection (negative Q) mirrors the drawdown sign.
    let result = theis_drawdown(-0.01, 1.0e-3, 1.0e-4, 10.0, 3600.0).unwrap();
    assert!(result.drawdown < 0.0);
}

#[test]
fn documented_zero_denominator_conditions() {
    assert!(matches!(
        transmissivity(0.01, 0.0),
        Err(HgError::DivisionByZero { what: "delta_s" })
    ));
    assert!(matches!(
        storativity(1.0e-3, 120.0, 0.0),
        Err(HgError::DivisionByZero { what: "r" })
    ));
    assert!(matches!(
        theis_drawdown(0.01, 0.0, 1.0e-4, 10.0, 3600.0),
        Err(HgError::DivisionByZero { what: "T" })
    ));
    assert!(matches!(
        theis_drawdown(0.01, 1.0e-3, 1.0e-4, 10.0, 0.0),
        Err(HgError::DivisionByZero { what: "t" })
    ));
}
