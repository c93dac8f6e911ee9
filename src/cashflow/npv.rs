//! Discounting of periodic cash flow series
//!
//! Cash flows are indexed by period with `values[0]` at time 0.
//! Negative values are outflows (investments), positive values inflows.

use log::debug;

/// Net present value of `values` at a per-period discount `rate`.
///
/// `values[0]` is treated as a time-0 flow and is not discounted.
///
/// ```
/// use financial::npv;
///
/// let value = npv(0.08, &[-40_000.0, 5000.0, 8000.0, 12000.0, 30000.0]);
/// assert!((value - 3065.2226681795255).abs() < 1e-6);
/// ```
pub fn npv(rate: f64, values: &[f64]) -> f64 {
    values
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// Modified internal rate of return.
///
/// Outflows are discounted at `finance_rate`, inflows at `reinvest_rate`.
/// Returns `NaN` unless `values` contains at least one positive and one
/// negative flow.
pub fn mirr(values: &[f64], finance_rate: f64, reinvest_rate: f64) -> f64 {
    if !has_sign_change(values) {
        debug!("mirr: cash flows need both a positive and a negative value");
        return f64::NAN;
    }

    let positives: Vec<f64> = values.iter().map(|&cf| if cf > 0.0 { cf } else { 0.0 }).collect();
    let negatives: Vec<f64> = values.iter().map(|&cf| if cf < 0.0 { cf } else { 0.0 }).collect();

    let numer = npv(reinvest_rate, &positives).abs();
    let denom = npv(finance_rate, &negatives).abs();
    let periods = (values.len() - 1) as f64;

    (numer / denom).powf(1.0 / periods) * (1.0 + reinvest_rate) - 1.0
}

/// True when the series holds at least one strictly positive and one strictly negative flow
pub(crate) fn has_sign_change(values: &[f64]) -> bool {
    let has_positive = values.iter().any(|&cf| cf > 0.0);
    let has_negative = values.iter().any(|&cf| cf < 0.0);
    has_positive && has_negative
}
