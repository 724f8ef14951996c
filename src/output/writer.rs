use crate::metrics::PortfolioMetrics;
use crate::portfolio::PortfolioSeries;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;

//writes the portfolio value series as a two-column csv
pub fn save_values_csv(portfolio: &PortfolioSeries, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .context(format!("Failed to create value series file: {:?}", path))?;
    writeln!(file, "date,portfolio_value")?;

    for (date, value) in portfolio.dates.iter().zip(&portfolio.values) {
        writeln!(file, "{},{}", date.format("%Y-%m-%d"), value)?;
    }

    Ok(())
}

//writes the return series as a two-column csv
//each return is dated with the later date of its pair, so the first
//portfolio date does not appear
pub fn save_returns_csv(dates: &[NaiveDate], returns: &[f64], path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .context(format!("Failed to create return series file: {:?}", path))?;
    writeln!(file, "date,portfolio_return")?;

    for (date, ret) in dates.iter().skip(1).zip(returns) {
        writeln!(file, "{},{}", date.format("%Y-%m-%d"), ret)?;
    }

    Ok(())
}

//writes the metrics record as fixed-precision labeled text lines
pub fn save_metrics_txt(metrics: &PortfolioMetrics, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .context(format!("Failed to create metrics file: {:?}", path))?;

    writeln!(file, "Cumulative Return: {:.6}", metrics.cumulative_return)?;
    writeln!(file, "CAGR (ann.): {:.6}", metrics.cagr)?;
    writeln!(file, "Annualized Volatility: {:.6}", metrics.annualized_vol)?;
    writeln!(file, "Max Drawdown: {:.6}", metrics.max_drawdown)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn sample_series() -> PortfolioSeries {
        let start = NaiveDate::parse_from_str("2024-01-02", "%Y-%m-%d").unwrap();
        let values = vec![1.0, 1.5, 2.5];
        let dates = (0..values.len())
            .map(|i| start + chrono::Days::new(i as u64))
            .collect();
        PortfolioSeries { dates, values }
    }

    #[test]
    fn value_csv_round_trips() {
        let portfolio = sample_series();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.csv");

        save_values_csv(&portfolio, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["date", "portfolio_value"])
        );

        let mut dates = Vec::new();
        let mut values = Vec::new();
        for record in reader.records() {
            let record = record.unwrap();
            dates.push(NaiveDate::parse_from_str(&record[0], "%Y-%m-%d").unwrap());
            values.push(record[1].parse::<f64>().unwrap());
        }

        assert_eq!(dates, portfolio.dates);
        for (read, original) in values.iter().zip(&portfolio.values) {
            assert_relative_eq!(*read, *original, max_relative = 1e-12);
        }
    }

    #[test]
    fn return_csv_skips_first_date() {
        let portfolio = sample_series();
        let returns = vec![0.5, 2.5 / 1.5 - 1.0];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("returns.csv");

        save_returns_csv(&portfolio.dates, &returns, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["date", "portfolio_return"])
        );

        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "2024-01-03");
        assert_relative_eq!(records[0][1].parse::<f64>().unwrap(), 0.5);
        assert_relative_eq!(
            records[1][1].parse::<f64>().unwrap(),
            2.5 / 1.5 - 1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn metrics_txt_has_four_labeled_lines() {
        let metrics = PortfolioMetrics {
            cumulative_return: 1.5,
            cagr: 0.1234567,
            annualized_vol: 0.2,
            max_drawdown: -0.25,
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.txt");

        save_metrics_txt(&metrics, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Cumulative Return: 1.500000",
                "CAGR (ann.): 0.123457",
                "Annualized Volatility: 0.200000",
                "Max Drawdown: -0.250000",
            ]
        );
    }

    #[test]
    fn write_to_bad_path_fails() {
        let portfolio = sample_series();
        let result = save_values_csv(&portfolio, Path::new("/no/such/dir/values.csv"));
        assert!(result.is_err());
    }
}
