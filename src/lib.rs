//! Financial - spreadsheet-equivalent time value of money functions
//!
//! This library provides:
//! - Closed-form annuity solvers (`fv`, `pmt`, `nper`, `pv`, `ipmt`, `ppmt`)
//! - Newton-Raphson root finders for the periodic rate (`rate`) and IRR (`irr`)
//! - Cash flow aggregation (`npv`, `mirr`)
//! - Amortization schedules and batch cash flow analysis
//!
//! Invalid inputs and non-convergence are reported with `NaN`, never a panic.
//! Always test results with `f64::is_nan`.

pub mod cashflow;
pub mod due_time;
pub mod error;
pub mod schedule;
pub mod solver;
pub mod tvm;

// Re-export commonly used types
pub use cashflow::{irr, irr_with, mirr, npv, AnalysisConfig, CashFlowReport, CashFlowSeries};
pub use due_time::PaymentDueTime;
pub use error::{FinancialError, FinancialResult};
pub use schedule::{AmortizationRow, AmortizationSchedule, ScheduleSummary};
pub use solver::SolverOptions;
pub use tvm::{fv, ipmt, nper, pmt, ppmt, pv, rate, rate_with};
