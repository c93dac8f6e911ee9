//! Time value of money functions built on the annuity equation

mod annuity;
mod rate;

pub use annuity::{fv, ipmt, nper, pmt, ppmt, pv};
pub use rate::{rate, rate_with};
