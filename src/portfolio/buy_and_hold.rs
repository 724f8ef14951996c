use crate::series::NormalizedTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("No columns to build a portfolio from")]
    NoColumns,
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

//value of one unit of starting capital over time, first value exactly 1.0
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

//builds the buy-and-hold portfolio value series with equal initial weights
//no rebalancing: capital is allocated once at the first date and shares are
//held constant, so value_t = sum over columns of w0 * price_like_t
//(price_like_0 = 1.0 for every column by construction)
pub fn build_buy_and_hold(normalized: &NormalizedTable) -> Result<PortfolioSeries, PortfolioError> {
    let n = normalized.series.len();
    if n == 0 {
        return Err(PortfolioError::NoColumns);
    }

    let rows = normalized.dates.len();
    for (name, series) in &normalized.series {
        if series.len() != rows {
            return Err(PortfolioError::LengthMismatch {
                column: name.clone(),
                expected: rows,
                actual: series.len(),
            });
        }
    }

    let w0 = 1.0 / n as f64;

    let mut values = Vec::with_capacity(rows);
    for t in 0..rows {
        let value: f64 = normalized.series.values().map(|series| w0 * series[t]).sum();
        values.push(value);
    }

    //rescale so the series starts at exactly 1.0, guarding against
    //floating-point drift in the weight sum
    let first = values[0];
    for value in &mut values {
        *value /= first;
    }

    Ok(PortfolioSeries {
        dates: normalized.dates.clone(),
        values,
    })
}
