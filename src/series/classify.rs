use serde::{Deserialize, Serialize};

//how a raw input column is interpreted before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    //a price level (equities, etfs), normalized by its first observation
    Price,
    //an annualized yield level in percent (treasury naming convention,
    //eg US10Y, US2Y), converted to an implied daily-return price proxy
    Yield,
}

impl ColumnKind {
    //classifies a column by name: yield iff it starts with "US" and
    //ends with "Y", case-insensitively
    pub fn classify(name: &str) -> Self {
        let upper = name.to_uppercase();
        if upper.starts_with("US") && upper.ends_with('Y') {
            ColumnKind::Yield
        } else {
            ColumnKind::Price
        }
    }
}
