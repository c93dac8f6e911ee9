//! Periodic interest rate of an annuity via Newton-Raphson
//!
//! The annuity equation has no closed form in `rate`, so the rate is found
//! by iterating
//!
//! ```text
//! r_{n+1} = r_n - g(r_n) / g'(r_n)
//! ```
//!
//! until successive estimates differ by less than the tolerance.

use log::{debug, trace};

use crate::due_time::PaymentDueTime;
use crate::solver::SolverOptions;

/// Rate of interest per period, using the default solver options
/// (guess 0.1, tolerance 1e-6, 100 iterations).
///
/// Returns `NaN` when the iteration does not converge.
///
/// ```
/// use financial::{rate, PaymentDueTime};
///
/// let r = rate(10.0, 0.0, -3500.0, 10000.0, PaymentDueTime::End);
/// assert!((r - 0.1106908).abs() < 1e-6);
/// ```
pub fn rate(nper: f64, pmt: f64, pv: f64, fv: f64, when: PaymentDueTime) -> f64 {
    rate_with(nper, pmt, pv, fv, when, &SolverOptions::default())
}

/// Rate of interest per period with explicit solver options
pub fn rate_with(
    nper: f64,
    pmt: f64,
    pv: f64,
    fv: f64,
    when: PaymentDueTime,
    options: &SolverOptions,
) -> f64 {
    let mut rn = options.guess;
    let mut iteration = 0;
    let mut close = false;

    while iteration < options.max_iter && !close {
        let rnp1 = rn - g_div_gp(rn, nper, pmt, pv, fv, when);
        let diff = (rnp1 - rn).abs();
        close = diff < options.tol;
        iteration += 1;
        trace!("rate: iteration {} estimate {} step {}", iteration, rnp1, diff);
        rn = rnp1;
    }

    if !close {
        debug!(
            "rate: no convergence after {} iterations (nper={}, pmt={}, pv={}, fv={}, when={})",
            options.max_iter, nper, pmt, pv, fv, when
        );
        return f64::NAN;
    }

    rn
}

/// Newton step `g(r) / g'(r)` for the annuity residual
///
/// ```text
/// g = y + (1+r)^n*x + p*((1+r)^n - 1)*(r*w + 1)/r
/// ```
fn g_div_gp(r: f64, n: f64, p: f64, x: f64, y: f64, when: PaymentDueTime) -> f64 {
    let w = when.multiplier();

    let t1 = (r + 1.0).powf(n);
    let t2 = (r + 1.0).powf(n - 1.0);
    let g = y + t1 * x + p * (t1 - 1.0) * (r * w + 1.0) / r;
    let gp = n * t2 * x - p * (t1 - 1.0) * (r * w + 1.0) / (r * r)
        + n * p * t2 * (r * w + 1.0) / r
        + p * (t1 - 1.0) * w / r;

    g / gp
}
