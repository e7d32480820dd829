//! Read-only lookups over the products and customers tables.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::model::CustomerId;
use crate::model::Euros;
use crate::model::ProductId;
use crate::source::CUSTOMERS_FILE;
use crate::source::PRODUCTS_FILE;
use crate::source::SourceError;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub cost: Euros,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub firstname: String,
    pub lastname: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Firstname,
    Lastname,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product not found id={id}")]
    ProductNotFound { id: ProductId },
    #[error("customer not found id={id}")]
    CustomerNotFound { id: CustomerId },
}

/// Products and customers indexed by id.
///
/// Both tables are loaded once and never mutated afterwards. When a table holds the same id more
/// than once the first row wins, which is what a top-down scan of the table would return.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    costs: HashMap<ProductId, Euros>,
    customers: HashMap<CustomerId, Customer>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, customers: Vec<Customer>) -> Self {
        let mut costs = HashMap::with_capacity(products.len());
        for product in &products {
            costs.entry(product.id).or_insert(product.cost);
        }

        let mut customers_by_id = HashMap::with_capacity(customers.len());
        for customer in customers {
            customers_by_id.entry(customer.id).or_insert(customer);
        }

        Self {
            products,
            costs,
            customers: customers_by_id,
        }
    }

    /// Loads `products.csv` and `customers.csv` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unreadable`] if either table cannot be read.
    pub fn load(dir: &Path) -> Result<Self, SourceError> {
        let products = crate::source::read_table(&dir.join(PRODUCTS_FILE))?;
        let customers = crate::source::read_table(&dir.join(CUSTOMERS_FILE))?;
        Ok(Self::new(products, customers))
    }

    /// Products in table order, duplicates included.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if no product has the supplied id.
    pub fn cost_of(&self, id: ProductId) -> Result<Euros, CatalogError> {
        self.costs.get(&id).copied().ok_or(CatalogError::ProductNotFound { id })
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::CustomerNotFound`] if no customer has the supplied id.
    pub fn customer(&self, id: CustomerId) -> Result<&Customer, CatalogError> {
        self.customers.get(&id).ok_or(CatalogError::CustomerNotFound { id })
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::CustomerNotFound`] if no customer has the supplied id.
    pub fn field_of(&self, id: CustomerId, field: CustomerField) -> Result<&str, CatalogError> {
        let customer = self.customer(id)?;
        Ok(match field {
            CustomerField::Firstname => &customer.firstname,
            CustomerField::Lastname => &customer.lastname,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_fixtures::customer;
    use crate::test_fixtures::product;

    #[test]
    fn cost_of_returns_the_first_matching_product_cost() {
        let catalog = Catalog::new(vec![product(1, "10"), product(2, "20"), product(1, "99")], vec![]);
        assert_eq!(Ok(Euros::from_str("10").unwrap()), catalog.cost_of(product_id(1)));
        assert_eq!(Ok(Euros::from_str("20").unwrap()), catalog.cost_of(product_id(2)));
    }

    #[test]
    fn cost_of_unknown_product_returns_not_found() {
        let catalog = Catalog::new(vec![product(1, "10")], vec![]);
        assert_eq!(
            Err(CatalogError::ProductNotFound { id: product_id(7) }),
            catalog.cost_of(product_id(7))
        );
    }

    #[rstest]
    #[case(CustomerField::Firstname, "Ada")]
    #[case(CustomerField::Lastname, "Lovelace")]
    fn field_of_returns_the_first_matching_customer_field(#[case] field: CustomerField, #[case] expected: &str) {
        let catalog = Catalog::new(
            vec![],
            vec![customer(5, "Ada", "Lovelace"), customer(5, "Someone", "Else")],
        );
        assert_eq!(Ok(expected), catalog.field_of(CustomerId(5), field));
    }

    #[test]
    fn field_of_unknown_customer_returns_not_found() {
        let catalog = Catalog::new(vec![], vec![customer(5, "Ada", "Lovelace")]);
        assert_eq!(
            Err(CatalogError::CustomerNotFound { id: CustomerId(6) }),
            catalog.field_of(CustomerId(6), CustomerField::Lastname)
        );
    }

    #[test]
    fn products_keeps_table_order() {
        let catalog = Catalog::new(vec![product(3, "1"), product(1, "2"), product(2, "3")], vec![]);
        let ids: Vec<u8> = catalog.products().iter().map(|p| p.id.as_inner()).collect();
        assert_eq!(vec![3, 1, 2], ids);
    }

    #[test]
    fn load_reads_products_and_customers_from_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), "id,cost\n1,10.5\n").unwrap();
        std::fs::write(dir.path().join(CUSTOMERS_FILE), "id,firstname,lastname\n5,Ada,Lovelace\n").unwrap();

        assert2::let_assert!(Ok(catalog) = Catalog::load(dir.path()));
        assert_eq!(Ok(Euros::from_str("10.5").unwrap()), catalog.cost_of(product_id(1)));
        assert_eq!(Ok("Ada"), catalog.field_of(CustomerId(5), CustomerField::Firstname));
    }

    #[test]
    fn load_accepts_negative_customer_ids() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), "id,cost\n1,10\n").unwrap();
        std::fs::write(dir.path().join(CUSTOMERS_FILE), "id,firstname,lastname\n-3,Ada,Lovelace\n").unwrap();

        assert2::let_assert!(Ok(catalog) = Catalog::load(dir.path()));
        assert_eq!(Ok("Lovelace"), catalog.field_of(CustomerId(-3), CustomerField::Lastname));
    }

    fn product_id(id: u8) -> ProductId {
        ProductId::try_from(id).unwrap()
    }
}
