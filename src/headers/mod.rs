//! Case-insensitive HTTP headers.
mod matches;
mod table;
mod iter;
mod error;

pub use table::HeaderTable;
pub use iter::Iter;
pub use error::{HeaderError, validate};
pub use matches::name_eq;
