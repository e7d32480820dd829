use std::path::Path;

use serde::Serialize;
use serde::Serializer;

use crate::catalog::Catalog;
use crate::events::EventSink;
use crate::model::CustomerId;
use crate::model::ProductId;
use crate::order::OrderSource;
use crate::report::ReportError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProductCustomerRecord {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Distinct, ascending.
    #[serde(serialize_with = "serialize_customer_ids")]
    pub customer_ids: Vec<CustomerId>,
}

impl ProductCustomerRecord {
    pub const HEADERS: [&str; 2] = ["id", "customer_ids"];
}

/// One [`ProductCustomerRecord`] per product, in catalog order, listing every customer that
/// ordered the product at least once.
///
/// Products no one ordered get an empty list.
pub fn product_customers(catalog: &Catalog, orders: &OrderSource) -> Vec<ProductCustomerRecord> {
    let orders_by_customer = orders.sorted_by_customer();

    catalog
        .products()
        .iter()
        .map(|product| {
            let mut customer_ids: Vec<CustomerId> = Vec::new();
            for order in orders_by_customer
                .iter()
                .filter(|order| order.product_ids.contains(product.id))
            {
                if !customer_ids.contains(&order.customer_id) {
                    customer_ids.push(order.customer_id);
                }
            }
            // Scan order already yields ascending ids.
            customer_ids.sort_unstable();

            ProductCustomerRecord {
                product_id: product.id,
                customer_ids,
            }
        })
        .collect()
}

/// Rebuilds the product customers table at `output`.
///
/// # Errors
///
/// Returns an error if the stale output cannot be removed or if the output cannot be written.
pub fn generate(
    catalog: &Catalog,
    orders: &OrderSource,
    output: &Path,
    sink: &dyn EventSink,
) -> Result<(), ReportError> {
    super::clear_stale_output(output, sink)?;
    let records = product_customers(catalog, orders);
    super::publish(output, &ProductCustomerRecord::HEADERS, &records, sink)
}

/// Space separated ids, e.g. `3 5 12`.
pub fn render_customer_ids(customer_ids: &[CustomerId]) -> String {
    let rendered = customer_ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    rendered.replace([',', '[', ']'], "")
}

fn serialize_customer_ids<S>(customer_ids: &[CustomerId], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&render_customer_ids(customer_ids))
}
