//! Customers ranked by accumulated spend.
//!
//! [`CustomerRanking`] folds orders one at a time, sorted by customer, and keeps its records
//! sorted descending by spend after every fold. The ranking is thus observable at any point of
//! the run, not only once every order has been processed.
//!
//! # Repeat orders
//! A customer's first order sets the running total to the order's total. Every further order of
//! the same customer *doubles* the running total instead of adding its own total to it: a
//! customer ordering `30` then `40` is ranked with `60`, not `70`. This is how the ranking has
//! always been computed and downstream consumers may depend on it, so it is kept as is until
//! someone confirms the intended semantics.

use std::path::Path;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::catalog::CustomerField;
use crate::events::EventSink;
use crate::model::CustomerId;
use crate::model::Euros;
use crate::order::Order;
use crate::order::OrderSource;
use crate::report::ReportError;

#[cfg(test)]
#[path = "tests/customer_ranking_tests.rs"]
mod customer_ranking_tests;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerRankingRecord {
    #[serde(rename = "customer")]
    pub customer_id: CustomerId,
    pub firstname: String,
    pub lastname: String,
    #[serde(rename = "euros")]
    pub total_spend: Euros,
}

impl CustomerRankingRecord {
    pub const HEADERS: [&str; 4] = ["customer", "firstname", "lastname", "euros"];
}

pub struct CustomerRanking<'a> {
    catalog: &'a Catalog,
    records: Vec<CustomerRankingRecord>,
    running_total: Euros,
    previous_customer_id: Option<CustomerId>,
}

impl<'a> CustomerRanking<'a> {
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            records: Vec::new(),
            running_total: Euros::ZERO,
            previous_customer_id: None,
        }
    }

    /// Folds `order` into the ranking and returns the re-ranked records.
    ///
    /// Orders are expected grouped by customer (see [`OrderSource::sorted_by_customer`]): a
    /// customer coming back after another one starts a new group and gets a second record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The order cannot be priced ([`ReportError::Pricing`]).
    /// - The order's customer is missing from the catalog ([`ReportError::Catalog`]).
    /// - The running total overflows ([`ReportError::SpendOverflow`]).
    /// - A repeat order finds no record for its customer ([`ReportError::MissingRankingRecord`]).
    pub fn apply(&mut self, order: &Order) -> Result<&[CustomerRankingRecord], ReportError> {
        let order_total =
            crate::price::order_total(self.catalog, &order.product_ids).map_err(|source| ReportError::Pricing {
                order_id: order.id,
                source,
            })?;

        if self.previous_customer_id == Some(order.customer_id) {
            self.running_total = self
                .running_total
                .checked_add(self.running_total)
                .ok_or(ReportError::SpendOverflow {
                    customer_id: order.customer_id,
                })?;
            let record = self
                .records
                .iter_mut()
                .find(|record| record.customer_id == order.customer_id)
                .ok_or(ReportError::MissingRankingRecord {
                    customer_id: order.customer_id,
                })?;
            record.total_spend = self.running_total;
        } else {
            self.running_total = order_total;
            self.records.push(CustomerRankingRecord {
                customer_id: order.customer_id,
                firstname: self
                    .catalog
                    .field_of(order.customer_id, CustomerField::Firstname)?
                    .to_owned(),
                lastname: self
                    .catalog
                    .field_of(order.customer_id, CustomerField::Lastname)?
                    .to_owned(),
                total_spend: self.running_total,
            });
        }

        self.previous_customer_id = Some(order.customer_id);
        // Stable: customers with the same spend keep their arrival order.
        self.records.sort_by(|a, b| b.total_spend.cmp(&a.total_spend));

        Ok(&self.records)
    }

    pub fn records(&self) -> &[CustomerRankingRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CustomerRankingRecord> {
        self.records
    }
}

/// Folds every order, sorted by customer, into a [`CustomerRanking`].
///
/// # Errors
///
/// Returns the first error hit by [`CustomerRanking::apply`].
pub fn customer_ranking(catalog: &Catalog, orders: &OrderSource) -> Result<Vec<CustomerRankingRecord>, ReportError> {
    let mut ranking = CustomerRanking::new(catalog);
    for order in orders.sorted_by_customer() {
        ranking.apply(order)?;
    }
    Ok(ranking.into_records())
}

/// Rebuilds the customer ranking table at `output`.
///
/// # Errors
///
/// Returns an error if the stale output cannot be removed, if any order cannot be ranked or if
/// the output cannot be written.
pub fn generate(
    catalog: &Catalog,
    orders: &OrderSource,
    output: &Path,
    sink: &dyn EventSink,
) -> Result<(), ReportError> {
    super::clear_stale_output(output, sink)?;
    let records = customer_ranking(catalog, orders)?;
    super::publish(output, &CustomerRankingRecord::HEADERS, &records, sink)
}
