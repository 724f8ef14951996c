use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Table has no rows")]
    Empty,
    #[error("Table has no data columns")]
    NoColumns,
    #[error("Column '{column}' has {actual} observations, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("Dates out of order: {prev} followed by {next}")]
    UnsortedDates { prev: NaiveDate, next: NaiveDate },
    #[error("Duplicate date: {0}")]
    DuplicateDate(NaiveDate),
    #[error("Non-finite observation in column '{column}' at {date}")]
    NonFinite { column: String, date: NaiveDate },
}

//a rectangular table of daily observations: one date index, one or more named numeric columns
//columns keep their input order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceTable {
    dates: Vec<NaiveDate>,
    columns: IndexMap<String, Vec<f64>>,
}

impl PriceTable {
    //creates a table with validation: non-empty, strictly ascending unique dates,
    //every column the same length as the index, every observation finite
    pub fn new(
        dates: Vec<NaiveDate>,
        columns: IndexMap<String, Vec<f64>>,
    ) -> Result<Self, TableError> {
        if dates.is_empty() {
            return Err(TableError::Empty);
        }

        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }

        for window in dates.windows(2) {
            if window[1] == window[0] {
                return Err(TableError::DuplicateDate(window[1]));
            }
            if window[1] < window[0] {
                return Err(TableError::UnsortedDates {
                    prev: window[0],
                    next: window[1],
                });
            }
        }

        for (name, values) in &columns {
            if values.len() != dates.len() {
                return Err(TableError::LengthMismatch {
                    column: name.clone(),
                    expected: dates.len(),
                    actual: values.len(),
                });
            }

            for (i, value) in values.iter().enumerate() {
                if !value.is_finite() {
                    return Err(TableError::NonFinite {
                        column: name.clone(),
                        date: dates[i],
                    });
                }
            }
        }

        Ok(PriceTable { dates, columns })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn columns(&self) -> &IndexMap<String, Vec<f64>> {
        &self.columns
    }

    pub fn num_rows(&self) -> usize {
        self.dates.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}
