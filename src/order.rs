//! The orders table.

use std::path::Path;

use serde::Deserialize;

use crate::model::CustomerId;
use crate::model::OrderId;
use crate::model::ProductIds;
use crate::source::ORDERS_FILE;
use crate::source::SourceError;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "customer")]
    pub customer_id: CustomerId,
    #[serde(rename = "products")]
    pub product_ids: ProductIds,
}

#[derive(Debug)]
pub struct OrderSource(Vec<Order>);

impl OrderSource {
    pub const fn new(orders: Vec<Order>) -> Self {
        Self(orders)
    }

    /// Loads `orders.csv` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unreadable`] if the table cannot be read or if any `products` field
    /// holds something other than digits and whitespace.
    pub fn load(dir: &Path) -> Result<Self, SourceError> {
        crate::source::read_table(&dir.join(ORDERS_FILE)).map(Self)
    }

    pub fn in_source_order(&self) -> impl Iterator<Item = &Order> {
        self.0.iter()
    }

    /// Orders ascending by customer id.
    /// The sort is stable: orders of the same customer keep their table order.
    pub fn sorted_by_customer(&self) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self.0.iter().collect();
        orders.sort_by_key(|order| order.customer_id);
        orders
    }
}
