//an equal-weight buy-and-hold portfolio analyzer for daily market data

pub mod config;
pub mod data;
pub mod metrics;
pub mod output;
pub mod portfolio;
pub mod series;

//assumed number of trading days per year, used for yield conversion and annualization
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

//prelude module for convenient imports
pub mod prelude {
    pub use crate::config::AnalysisConfiguration;
    pub use crate::data::{load_csv, PriceTable, TableError};
    pub use crate::metrics::{calculate_returns, max_drawdown, MetricsError, PortfolioMetrics};
    pub use crate::output::{save_metrics_txt, save_returns_csv, save_values_csv};
    pub use crate::portfolio::{build_buy_and_hold, PortfolioError, PortfolioSeries};
    pub use crate::series::{normalize, ColumnKind, NormalizeError, NormalizedTable};
    pub use crate::TRADING_DAYS_PER_YEAR;
}
