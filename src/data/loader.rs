use crate::data::table::PriceTable;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use indexmap::IndexMap;
use std::path::Path;

//loads a combined market data table from a csv file
//the first column is the date index (its header name is ignored, pandas often
//leaves it blank), every remaining column is numeric
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<PriceTable> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(format!("Failed to open CSV file: {:?}", path))?;

    let headers = reader
        .headers()
        .context(format!("Failed to read CSV header: {:?}", path))?
        .clone();

    if headers.len() < 2 {
        anyhow::bail!(
            "CSV file {:?} needs a date column and at least one data column",
            path
        );
    }

    let column_names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

    let mut rows: Vec<(NaiveDate, Vec<f64>)> = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result.context(format!("Failed to parse CSV record at line {}", index + 2))?;

        if record.len() != headers.len() {
            anyhow::bail!(
                "Row at line {} has {} fields, expected {}",
                index + 2,
                record.len(),
                headers.len()
            );
        }

        let date = NaiveDate::parse_from_str(&record[0], "%Y-%m-%d").context(format!(
            "Failed to parse date '{}' at line {}",
            &record[0],
            index + 2
        ))?;

        let mut values = Vec::with_capacity(column_names.len());
        for (field, name) in record.iter().skip(1).zip(&column_names) {
            let value: f64 = field.trim().parse().context(format!(
                "Failed to parse value '{}' for column '{}' at line {}",
                field,
                name,
                index + 2
            ))?;
            values.push(value);
        }

        rows.push((date, values));
    }

    //sort by date to ensure chronological order
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    let dates: Vec<NaiveDate> = rows.iter().map(|(date, _)| *date).collect();

    let mut columns: IndexMap<String, Vec<f64>> = column_names
        .iter()
        .map(|name| (name.clone(), Vec::with_capacity(rows.len())))
        .collect();

    for (_, values) in &rows {
        for (column, &value) in columns.values_mut().zip(values) {
            column.push(value);
        }
    }

    let table = PriceTable::new(dates, columns)
        .context(format!("Invalid table loaded from {:?}", path))?;

    Ok(table)
}
