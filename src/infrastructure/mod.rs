//! Concrete payment processors and notification services.

pub mod notification;
pub mod payment;
