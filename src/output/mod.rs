pub mod writer;

pub use writer::{save_metrics_txt, save_returns_csv, save_values_csv};
