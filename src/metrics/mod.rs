pub mod summary;
pub mod timeseries;

pub use summary::{MetricsError, PortfolioMetrics};
pub use timeseries::{calculate_returns, max_drawdown};
