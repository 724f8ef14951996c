use crate::data::PriceTable;
use crate::series::classify::ColumnKind;
use crate::TRADING_DAYS_PER_YEAR;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Column '{0}' is empty, cannot normalize")]
    EmptyColumn(String),
    #[error("Column '{0}' has a zero first observation, cannot normalize")]
    ZeroFirstObservation(String),
}

//all input columns converted to price-like series starting at exactly 1.0,
//in the same order and over the same date index as the raw table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedTable {
    pub dates: Vec<NaiveDate>,
    pub series: IndexMap<String, Vec<f64>>,
}

//converts every raw column into a price-like series anchored at 1.0
//- price columns: divide by the first observation
//- yield columns: treat the value as an annual yield in percent, approximate
//  the daily return as yield/100/252, cumulate, rescale to start at 1.0
pub fn normalize(table: &PriceTable) -> Result<NormalizedTable, NormalizeError> {
    let mut series = IndexMap::with_capacity(table.num_columns());

    for (name, values) in table.columns() {
        let price_like = match ColumnKind::classify(name) {
            ColumnKind::Yield => normalize_yield(name, values)?,
            ColumnKind::Price => normalize_price(name, values)?,
        };
        series.insert(name.clone(), price_like);
    }

    Ok(NormalizedTable {
        dates: table.dates().to_vec(),
        series,
    })
}

fn normalize_price(name: &str, values: &[f64]) -> Result<Vec<f64>, NormalizeError> {
    let first = *values
        .first()
        .ok_or_else(|| NormalizeError::EmptyColumn(name.to_string()))?;

    if first == 0.0 {
        return Err(NormalizeError::ZeroFirstObservation(name.to_string()));
    }

    Ok(values.iter().map(|value| value / first).collect())
}

fn normalize_yield(name: &str, values: &[f64]) -> Result<Vec<f64>, NormalizeError> {
    if values.is_empty() {
        return Err(NormalizeError::EmptyColumn(name.to_string()));
    }

    //cumulative product of (1 + implied daily return)
    let mut cumulated = Vec::with_capacity(values.len());
    let mut acc = 1.0;
    for value in values {
        let daily_return = value / 100.0 / TRADING_DAYS_PER_YEAR;
        acc *= 1.0 + daily_return;
        cumulated.push(acc);
    }

    //rescale so the series starts at exactly 1.0
    let first = cumulated[0];
    if first == 0.0 {
        return Err(NormalizeError::ZeroFirstObservation(name.to_string()));
    }

    Ok(cumulated.iter().map(|value| value / first).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn table(columns: Vec<(&str, Vec<f64>)>) -> PriceTable {
        let rows = columns[0].1.len();
        let start = NaiveDate::parse_from_str("2024-01-01", "%Y-%m-%d").unwrap();
        let dates: Vec<NaiveDate> = (0..rows)
            .map(|i| start + chrono::Days::new(i as u64))
            .collect();
        let columns: IndexMap<String, Vec<f64>> = columns
            .into_iter()
            .map(|(name, values)| (name.to_string(), values))
            .collect();
        PriceTable::new(dates, columns).unwrap()
    }

    #[test]
    fn price_series_starts_at_one() {
        let normalized = normalize(&table(vec![("SPY", vec![400.0, 410.0, 390.0])])).unwrap();
        let series = &normalized.series["SPY"];
        assert_eq!(series[0], 1.0);
        assert_relative_eq!(series[1], 410.0 / 400.0);
        assert_relative_eq!(series[2], 390.0 / 400.0);
    }

    #[test]
    fn yield_series_starts_at_one() {
        let normalized = normalize(&table(vec![("US10Y", vec![4.0, 4.1, 4.2])])).unwrap();
        assert_eq!(normalized.series["US10Y"][0], 1.0);
    }

    #[test]
    fn constant_yield_compounds_daily() {
        //constant 5% annual yield over 252 trading days compounds to
        //(1 + 0.05/252)^252, about 1.0513, after the rescale to 1.0 at day one
        let values = vec![5.0; 252];
        let normalized = normalize(&table(vec![("US10Y", values)])).unwrap();
        let series = &normalized.series["US10Y"];

        let daily: f64 = 0.05 / 252.0;
        //the final value carries 251 compounding steps past the anchor
        let expected = (1.0 + daily).powi(251);
        assert_relative_eq!(series[251], expected, max_relative = 1e-12);
        assert_relative_eq!(
            series[251] * (1.0 + daily),
            (1.0 + daily).powi(252),
            max_relative = 1e-12
        );
        assert_relative_eq!((1.0 + daily).powi(252), 1.0513, max_relative = 1e-4);
    }

    #[test]
    fn constant_yield_matches_closed_form_at_every_step() {
        let values = vec![3.0; 10];
        let normalized = normalize(&table(vec![("US2Y", values)])).unwrap();
        let daily: f64 = 3.0 / 100.0 / 252.0;
        for (t, value) in normalized.series["US2Y"].iter().enumerate() {
            assert_relative_eq!(*value, (1.0 + daily).powi(t as i32), max_relative = 1e-12);
        }
    }

    #[test]
    fn zero_first_price_is_rejected() {
        let result = normalize(&table(vec![("SPY", vec![0.0, 1.0])]));
        match result {
            Err(NormalizeError::ZeroFirstObservation(name)) => assert_eq!(name, "SPY"),
            other => panic!("expected ZeroFirstObservation, got {:?}", other),
        }
    }

    #[test]
    fn columns_keep_input_order() {
        let normalized =
            normalize(&table(vec![("QQQ", vec![1.0]), ("AAPL", vec![2.0])])).unwrap();
        let names: Vec<&String> = normalized.series.keys().collect();
        assert_eq!(names, vec!["QQQ", "AAPL"]);
    }
}
