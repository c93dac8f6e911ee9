//! Cash flow series: NPV, IRR, MIRR, CSV loading and batch analysis

mod irr;
mod npv;
pub mod loader;
mod report;

pub use irr::{irr, irr_with};
pub use npv::{mirr, npv};
pub use loader::{load_cash_flows, load_cash_flows_from_reader, CashFlowSeries};
pub use report::{analyze, analyze_batch, AnalysisConfig, CashFlowReport};
