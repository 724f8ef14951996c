pub mod loader;
pub mod table;

pub use loader::load_csv;
pub use table::{PriceTable, TableError};
