use crate::metrics::timeseries::max_drawdown;
use crate::portfolio::PortfolioSeries;
use crate::TRADING_DAYS_PER_YEAR;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Need at least 2 return observations to compute metrics, got {0}")]
    InsufficientHistory(usize),
}

//summary risk and performance metrics for the portfolio value series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioMetrics {
    pub cumulative_return: f64,
    pub cagr: f64,
    pub annualized_vol: f64,
    pub max_drawdown: f64,
}

impl PortfolioMetrics {
    //calculates the four summary metrics from the value series and its returns
    //fails loudly on insufficient history rather than emitting nan
    pub fn from_series(
        portfolio: &PortfolioSeries,
        returns: &[f64],
    ) -> Result<Self, MetricsError> {
        if returns.len() < 2 {
            return Err(MetricsError::InsufficientHistory(returns.len()));
        }

        let first = portfolio.values[0];
        let last = portfolio.values[portfolio.values.len() - 1];

        let cumulative_return = last / first - 1.0;

        //annualized with the count of trading-day observations as the
        //holding-period proxy, not elapsed calendar days
        let trading_days = returns.len() as f64;
        let cagr = (last / first).powf(TRADING_DAYS_PER_YEAR / trading_days) - 1.0;

        //sample standard deviation (bessel) scaled to annual
        let annualized_vol = returns.iter().std_dev() * TRADING_DAYS_PER_YEAR.sqrt();

        let max_drawdown = max_drawdown(&portfolio.values);

        Ok(PortfolioMetrics {
            cumulative_return,
            cagr,
            annualized_vol,
            max_drawdown,
        })
    }

    //prints metrics in a formatted table
    pub fn pretty_print_table(&self) {
        let mut table = Table::new();

        table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

        table.add_row(Row::new(vec![
            Cell::new("Cumulative Return"),
            Cell::new(&format!("{:.6}", self.cumulative_return)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("CAGR (ann.)"),
            Cell::new(&format!("{:.6}", self.cagr)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Annualized Volatility"),
            Cell::new(&format!("{:.6}", self.annualized_vol)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Max Drawdown"),
            Cell::new(&format!("{:.6}", self.max_drawdown)),
        ]));

        table.printstd();
    }
}
