//! Domain types and the capability traits an order is composed from.

pub mod method;
pub mod ports;
pub mod product;
