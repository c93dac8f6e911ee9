//! Load cash flow series from CSV
//!
//! One series per record, no header row: `label,v0,v1,...`. Records may
//! have different lengths; empty cells are skipped.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{FinancialError, FinancialResult};

/// A labelled cash flow series, `values[0]` at time 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl CashFlowSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    fn from_record(record: &StringRecord) -> FinancialResult<Self> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let label = record.get(0).map(str::trim).unwrap_or_default();
        if label.is_empty() {
            return Err(FinancialError::InvalidRecord {
                line,
                reason: "missing series label".to_string(),
            });
        }

        let mut values = Vec::with_capacity(record.len().saturating_sub(1));
        for field in record.iter().skip(1).map(str::trim).filter(|f| !f.is_empty()) {
            let value: f64 = field.parse().map_err(|_| FinancialError::InvalidRecord {
                line,
                reason: format!("{:?} is not a number", field),
            })?;
            values.push(value);
        }

        if values.is_empty() {
            return Err(FinancialError::InvalidRecord {
                line,
                reason: format!("series {:?} has no cash flows", label),
            });
        }

        Ok(Self::new(label, values))
    }
}

/// Load all series from a CSV file
pub fn load_cash_flows<P: AsRef<Path>>(path: P) -> FinancialResult<Vec<CashFlowSeries>> {
    let path = path.as_ref();
    let series = read_series(ReaderBuilder::new().has_headers(false).flexible(true).from_path(path)?)?;
    info!("Loaded {} cash flow series from {}", series.len(), path.display());
    Ok(series)
}

/// Load series from any reader (e.g. stdin, string buffer)
pub fn load_cash_flows_from_reader<R: Read>(reader: R) -> FinancialResult<Vec<CashFlowSeries>> {
    read_series(ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader))
}

fn read_series<R: Read>(mut reader: csv::Reader<R>) -> FinancialResult<Vec<CashFlowSeries>> {
    let mut series = Vec::new();
    for result in reader.records() {
        let record = result?;
        series.push(CashFlowSeries::from_record(&record)?);
    }
    Ok(series)
}
