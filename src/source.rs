//! Source tables loading.
//!
//! Every table is a CSV file with a header row, living under a common source directory with a
//! fixed file name. Rows are deserialized through [`serde`], so each table maps to a plain struct
//! ([`crate::catalog::Product`], [`crate::catalog::Customer`], [`crate::order::Order`]).

use std::path::Path;
use std::path::PathBuf;

use csv::ReaderBuilder;
use csv::Trim;
use serde::de::DeserializeOwned;

pub const PRODUCTS_FILE: &str = "products.csv";
pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const ORDERS_FILE: &str = "orders.csv";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source table unreadable path={path:?}, source_error={source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Reads every row of the CSV table at `path`.
///
/// # Errors
///
/// Returns [`SourceError::Unreadable`] if the file cannot be opened or if any row fails to
/// deserialize. No partially read table is ever returned.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SourceError> {
    let unreadable = |source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path).map_err(unreadable)?;
    reader.deserialize::<T>().collect::<Result<Vec<_>, _>>().map_err(unreadable)
}
