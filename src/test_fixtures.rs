use std::str::FromStr;

use crate::catalog::Catalog;
use crate::catalog::Customer;
use crate::catalog::Product;
use crate::model::CustomerId;
use crate::model::Euros;
use crate::model::OrderId;
use crate::model::ProductId;
use crate::model::ProductIds;
use crate::order::Order;

pub fn product(id: u8, cost: &str) -> Product {
    Product {
        id: ProductId::try_from(id).unwrap(),
        cost: euros(cost),
    }
}

pub fn customer(id: i64, firstname: &str, lastname: &str) -> Customer {
    Customer {
        id: CustomerId(id),
        firstname: firstname.into(),
        lastname: lastname.into(),
    }
}

pub fn order(id: i64, customer_id: i64, products: &str) -> Order {
    Order {
        id: OrderId(id),
        customer_id: CustomerId(customer_id),
        product_ids: ProductIds::from_str(products).unwrap(),
    }
}

pub fn euros(amount: &str) -> Euros {
    Euros::from_str(amount).unwrap()
}

/// Products `1 => 10`, `2 => 20`, `3 => 5.5` and customers 5, 7 and 9.
pub fn catalog() -> Catalog {
    Catalog::new(
        vec![product(1, "10"), product(2, "20"), product(3, "5.5")],
        vec![
            customer(5, "Ada", "Lovelace"),
            customer(7, "Alan", "Turing"),
            customer(9, "Grace", "Hopper"),
        ],
    )
}
