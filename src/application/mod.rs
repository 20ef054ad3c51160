//! Application layer composing the domain capabilities into an order.
//!
//! `Order` is the only orchestration point: it reads the product price and
//! drives payment and notification in sequence.

pub mod order;
