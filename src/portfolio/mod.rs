pub mod buy_and_hold;

pub use buy_and_hold::{build_buy_and_hold, PortfolioError, PortfolioSeries};
