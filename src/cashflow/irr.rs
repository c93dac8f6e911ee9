//! Internal Rate of Return (IRR) calculation
//!
//! Newton-Raphson on the discounted sum of the cash flows. Each flow gets a
//! synthetic date 365 days after the previous one, so exponents are measured
//! in years from the first flow.

use log::{debug, trace};

use super::npv::has_sign_change;
use crate::solver::SolverOptions;

const DAYS_PER_YEAR: f64 = 365.0;

/// Internal rate of return using the default solver options
/// (guess 0.1, tolerance 1e-6, 100 iterations).
///
/// # Arguments
/// * `values` - Cash flows per period (negative = outflow, positive = inflow)
///
/// # Returns
/// The periodic rate at which the NPV of `values` is zero, or `NaN` if the
/// series has no sign change or the iteration does not converge.
///
/// ```
/// use financial::irr;
///
/// let r = irr(&[-100.0, 39.0, 59.0, 55.0, 20.0]);
/// assert!((r - 0.2809484).abs() < 1e-6);
/// ```
pub fn irr(values: &[f64]) -> f64 {
    irr_with(values, &SolverOptions::default())
}

/// Internal rate of return with explicit solver options.
///
/// Stops once both the step and the residual are within `tol`.
pub fn irr_with(values: &[f64], options: &SolverOptions) -> f64 {
    if !has_sign_change(values) {
        debug!("irr: cash flows need both a positive and a negative value");
        return f64::NAN;
    }

    let dates = synthetic_dates(values.len());
    let mut result_rate = options.guess;
    let mut iteration = 0;

    loop {
        let result_value = irr_result(values, &dates, result_rate);
        let new_rate = result_rate - result_value / irr_result_deriv(values, &dates, result_rate);
        let eps_rate = (new_rate - result_rate).abs();
        result_rate = new_rate;
        trace!("irr: iteration {} rate {} residual {}", iteration, result_rate, result_value);

        let keep_going = eps_rate > options.tol && result_value.abs() > options.tol;
        if !keep_going {
            return result_rate;
        }

        iteration += 1;
        if iteration >= options.max_iter {
            debug!("irr: no convergence after {} iterations", options.max_iter);
            return f64::NAN;
        }
    }
}

/// Day offsets of each flow: 0, 365, 730, ...
fn synthetic_dates(len: usize) -> Vec<f64> {
    let mut dates = Vec::with_capacity(len);
    for i in 0..len {
        let date = if i == 0 { 0.0 } else { dates[i - 1] + DAYS_PER_YEAR };
        dates.push(date);
    }
    dates
}

/// Discounted sum of the flows at `rate`
fn irr_result(values: &[f64], dates: &[f64], rate: f64) -> f64 {
    let r = rate + 1.0;
    let mut result = values[0];
    for i in 1..values.len() {
        result += values[i] / r.powf((dates[i] - dates[0]) / DAYS_PER_YEAR);
    }
    result
}

/// First derivative of `irr_result` with respect to the rate
fn irr_result_deriv(values: &[f64], dates: &[f64], rate: f64) -> f64 {
    let r = rate + 1.0;
    let mut result = 0.0;
    for i in 1..values.len() {
        let frac = (dates[i] - dates[0]) / DAYS_PER_YEAR;
        result -= frac * values[i] / r.powf(frac + 1.0);
    }
    result
}
