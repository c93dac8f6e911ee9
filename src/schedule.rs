//! Amortization schedules built from the interest/principal split

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::due_time::PaymentDueTime;
use crate::error::FinancialResult;
use crate::tvm::{fv, ipmt, pmt, ppmt};

/// One payment period of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment period, starting at 1
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Future value of the position after this period's payment
    pub balance: f64,
}

/// Full amortization schedule for a level-payment annuity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rate: f64,
    pub nper: u32,
    pub pv: f64,
    pub fv: f64,
    pub when: PaymentDueTime,
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Build the schedule for periods `1..=nper`
    pub fn new(rate: f64, nper: u32, pv: f64, fv_target: f64, when: PaymentDueTime) -> Self {
        let n = nper as f64;
        let payment = pmt(rate, n, pv, fv_target, when);

        let rows = (1..=nper)
            .map(|period| {
                let per = period as f64;
                AmortizationRow {
                    period,
                    payment,
                    interest: ipmt(rate, per, n, pv, fv_target, when),
                    principal: ppmt(rate, per, n, pv, fv_target, when),
                    balance: fv(rate, per, payment, pv, when),
                }
            })
            .collect();

        Self {
            rate,
            nper,
            pv,
            fv: fv_target,
            when,
            rows,
        }
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            periods: self.rows.len() as u32,
            total_payment: self.rows.iter().map(|r| r.payment).sum(),
            total_interest: self.rows.iter().map(|r| r.interest).sum(),
            total_principal: self.rows.iter().map(|r| r.principal).sum(),
            final_balance: self.rows.last().map(|r| r.balance).unwrap_or(0.0),
        }
    }

    /// Write rows as CSV with a `period,payment,interest,principal,balance` header
    pub fn write_csv<W: Write>(&self, writer: W) -> FinancialResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub periods: u32,
    pub total_payment: f64,
    pub total_interest: f64,
    pub total_principal: f64,
    pub final_balance: f64,
}
