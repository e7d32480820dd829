//! Output tables.
//!
//! Each reporter derives one CSV file from the source tables:
//! - [`order_prices`]: total cost per order.
//! - [`product_customers`]: distinct customers per product.
//! - [`customer_ranking`]: customers by accumulated spend, descending.
//!
//! Outputs are rebuilt from scratch on every run: the stale file is removed before the reporter
//! computes anything, then the new table is written in one go.

use std::path::Path;
use std::path::PathBuf;

use csv::WriterBuilder;
use serde::Serialize;

use crate::catalog::CatalogError;
use crate::events::EventSink;
use crate::model::CustomerId;
use crate::model::OrderId;
use crate::price::PriceError;

pub mod customer_ranking;
pub mod order_prices;
pub mod product_customers;

pub const ORDER_PRICES_FILE: &str = "order_prices.csv";
pub const PRODUCT_CUSTOMERS_FILE: &str = "product_customers.csv";
pub const CUSTOMER_RANKING_FILE: &str = "customer_ranking.csv";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot price order id={order_id}")]
    Pricing {
        order_id: OrderId,
        #[source]
        source: PriceError,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("overflow while accumulating spend for customer id={customer_id}")]
    SpendOverflow { customer_id: CustomerId },
    #[error("no ranking record to update for customer id={customer_id}")]
    MissingRankingRecord { customer_id: CustomerId },
    #[error("cannot remove stale output path={path:?}, source_error={source}")]
    StaleOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write output path={path:?}, source_error={source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

fn clear_stale_output(output: &Path, sink: &dyn EventSink) -> Result<(), ReportError> {
    crate::cleanup::remove_stale(output, sink).map_err(|source| ReportError::StaleOutput {
        path: output.to_path_buf(),
        source,
    })
}

/// Writes `headers` then `rows` as a CSV table and reports the completion to `sink`.
///
/// The header row is written even when there are no rows.
fn publish<I>(output: &Path, headers: &[&str], rows: I, sink: &dyn EventSink) -> Result<(), ReportError>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let write_error = |source| ReportError::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(output)
        .map_err(write_error)?;
    writer.write_record(headers).map_err(write_error)?;
    for row in rows {
        writer.serialize(row).map_err(write_error)?;
    }
    writer.flush().map_err(|io_error| write_error(csv::Error::from(io_error)))?;

    sink.info(&format!("Successfully created the file {}", output.display()));
    Ok(())
}
