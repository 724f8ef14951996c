pub mod classify;
pub mod normalize;

pub use classify::ColumnKind;
pub use normalize::{normalize, NormalizeError, NormalizedTable};
