//! Reports derived from the products, customers and orders tables.
//!
//! [`catalog`] and [`order`] expose the source tables, [`price`] prices an order against the
//! catalog and [`report`] holds the three reporters built on top of them.

pub mod catalog;
pub mod cleanup;
pub mod config;
pub mod events;
pub mod model;
pub mod order;
pub mod price;
pub mod report;
pub mod source;

#[cfg(test)]
mod test_fixtures;
