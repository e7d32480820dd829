use std::path::Path;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::events::EventSink;
use crate::model::Euros;
use crate::model::OrderId;
use crate::order::OrderSource;
use crate::report::ReportError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OrderPriceRecord {
    #[serde(rename = "id")]
    pub order_id: OrderId,
    #[serde(rename = "euros")]
    pub total_cost: Euros,
}

impl OrderPriceRecord {
    pub const HEADERS: [&str; 2] = ["id", "euros"];
}

/// One [`OrderPriceRecord`] per order, in orders table order.
///
/// # Errors
///
/// Returns [`ReportError::Pricing`] for the first order that cannot be priced.
pub fn order_prices(catalog: &Catalog, orders: &OrderSource) -> Result<Vec<OrderPriceRecord>, ReportError> {
    orders
        .in_source_order()
        .map(|order| {
            let total_cost =
                crate::price::order_total(catalog, &order.product_ids).map_err(|source| ReportError::Pricing {
                    order_id: order.id,
                    source,
                })?;
            Ok(OrderPriceRecord {
                order_id: order.id,
                total_cost,
            })
        })
        .collect()
}

/// Rebuilds the order prices table at `output`.
///
/// # Errors
///
/// Returns an error if the stale output cannot be removed, if any order cannot be priced or if
/// the output cannot be written.
pub fn generate(
    catalog: &Catalog,
    orders: &OrderSource,
    output: &Path,
    sink: &dyn EventSink,
) -> Result<(), ReportError> {
    super::clear_stale_output(output, sink)?;
    let records = order_prices(catalog, orders)?;
    super::publish(output, &OrderPriceRecord::HEADERS, &records, sink)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::CatalogError;
    use crate::events::recording::RecordingSink;
    use crate::model::ProductId;
    use crate::price::PriceError;
    use crate::test_fixtures::catalog;
    use crate::test_fixtures::euros;
    use crate::test_fixtures::order;

    #[test]
    fn order_prices_keeps_orders_table_order() {
        let orders = OrderSource::new(vec![order(3, 9, "1"), order(1, 5, "12"), order(2, 7, "3 3")]);

        assert2::let_assert!(Ok(records) = order_prices(&catalog(), &orders));
        assert_eq!(
            vec![
                OrderPriceRecord {
                    order_id: OrderId(3),
                    total_cost: euros("10"),
                },
                OrderPriceRecord {
                    order_id: OrderId(1),
                    total_cost: euros("30"),
                },
                OrderPriceRecord {
                    order_id: OrderId(2),
                    total_cost: euros("11.0"),
                },
            ],
            records
        );
    }

    #[test]
    fn order_prices_fails_on_unknown_product() {
        let orders = OrderSource::new(vec![order(1, 5, "12"), order(2, 5, "4")]);

        assert2::let_assert!(
            Err(ReportError::Pricing {
                order_id,
                source: PriceError::Catalog(CatalogError::ProductNotFound { id }),
            }) = order_prices(&catalog(), &orders)
        );
        assert_eq!(OrderId(2), order_id);
        assert_eq!(ProductId::try_from(4).unwrap(), id);
    }

    #[test]
    fn generate_replaces_stale_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join(crate::report::ORDER_PRICES_FILE);
        std::fs::write(&output, "stale\n").unwrap();
        let orders = OrderSource::new(vec![order(1, 5, "12"), order(2, 7, "3 3")]);
        let sink = RecordingSink::default();

        assert2::let_assert!(Ok(()) = generate(&catalog(), &orders, &output, &sink));
        let content = std::fs::read_to_string(&output).unwrap();
        insta::assert_snapshot!(content.trim_end(), @r"
        id,euros
        1,30
        2,11.0
        ");
        assert_eq!(
            vec![
                format!("Try to remove {}", output.display()),
                format!("Removed {}", output.display()),
                format!("Successfully created the file {}", output.display()),
            ],
            sink.events()
        );
    }

    #[test]
    fn generate_without_orders_writes_the_header_only() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join(crate::report::ORDER_PRICES_FILE);
        let sink = RecordingSink::default();

        assert2::let_assert!(Ok(()) = generate(&catalog(), &OrderSource::new(vec![]), &output, &sink));
        assert_eq!("id,euros\n", std::fs::read_to_string(&output).unwrap());
    }
}
