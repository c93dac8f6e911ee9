//! Per-series cash flow analysis (NPV, IRR, MIRR)
//!
//! Batches are evaluated in parallel; each series is independent.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::irr::irr_with;
use super::loader::CashFlowSeries;
use super::npv::{mirr, npv};
use crate::solver::SolverOptions;

/// Rates and solver settings used to analyze a cash flow series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Per-period discount rate for NPV
    pub discount_rate: f64,

    /// Rate paid on outflows (MIRR)
    pub finance_rate: f64,

    /// Rate earned on reinvested inflows (MIRR)
    pub reinvest_rate: f64,

    /// IRR iteration settings
    #[serde(default)]
    pub solver: SolverOptions,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            discount_rate: 0.1,
            finance_rate: 0.1,
            reinvest_rate: 0.1,
            solver: SolverOptions::default(),
        }
    }
}

/// Analysis results for one series. `NaN` results serialize as JSON `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowReport {
    pub label: String,
    pub periods: usize,
    pub npv: f64,
    pub irr: f64,
    pub mirr: f64,
}

/// Analyze a single series
pub fn analyze(series: &CashFlowSeries, config: &AnalysisConfig) -> CashFlowReport {
    let values = &series.values;
    CashFlowReport {
        label: series.label.clone(),
        periods: values.len(),
        npv: npv(config.discount_rate, values),
        irr: irr_with(values, &config.solver),
        mirr: mirr(values, config.finance_rate, config.reinvest_rate),
    }
}

/// Analyze many series in parallel, preserving input order
pub fn analyze_batch(series: &[CashFlowSeries], config: &AnalysisConfig) -> Vec<CashFlowReport> {
    info!("Analyzing {} cash flow series", series.len());
    series.par_iter().map(|s| analyze(s, config)).collect()
}
