use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

/// Read-only view of a product, all an order needs to know about it.
pub trait ProductDetails {
    fn name(&self) -> &str;
    fn price(&self) -> Decimal;
}

/// Charges an amount through one payment method.
///
/// Implementations report what they processed as a single line on `out`.
pub trait PaymentProcessor {
    fn process_payment(&self, amount: Decimal, out: &mut dyn Write) -> Result<()>;
}

/// Delivers a message through one notification channel.
///
/// Implementations report what they sent as a single line on `out`.
pub trait NotificationService {
    fn send_notification(&self, message: &str, out: &mut dyn Write) -> Result<()>;
}

pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
pub type NotificationServiceBox = Box<dyn NotificationService>;
