//! CSV input for batch order placement.

pub mod order_reader;
