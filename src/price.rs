use crate::catalog::Catalog;
use crate::catalog::CatalogError;
use crate::model::Euros;
use crate::model::ProductIds;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PriceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("overflow while adding cost={cost} to total={total}")]
    Overflow { total: Euros, cost: Euros },
}

/// Sums the catalog cost of every product referenced by an order.
///
/// Each occurrence of a product is priced on its own, so `"112"` costs twice product `1` plus
/// product `2`.
///
/// # Errors
///
/// Returns an error if:
/// - A referenced product is missing from the catalog ([`PriceError::Catalog`]).
/// - The sum overflows ([`PriceError::Overflow`]).
pub fn order_total(catalog: &Catalog, product_ids: &ProductIds) -> Result<Euros, PriceError> {
    product_ids.iter().try_fold(Euros::ZERO, |total, product_id| {
        let cost = catalog.cost_of(product_id)?;
        total.checked_add(cost).ok_or(PriceError::Overflow { total, cost })
    })
}
