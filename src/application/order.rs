use crate::domain::ports::{NotificationService, PaymentProcessor, ProductDetails};
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

/// A single purchase of one product.
///
/// `Order` borrows its collaborators rather than owning them, so the caller
/// can keep using the same product, processor and notifier afterwards. It
/// depends only on the capability traits, never on a concrete variant.
pub struct Order<'a> {
    product: &'a dyn ProductDetails,
    payment_processor: &'a dyn PaymentProcessor,
    notification_service: &'a dyn NotificationService,
}

impl<'a> Order<'a> {
    /// Creates a new `Order`.
    ///
    /// # Arguments
    ///
    /// * `product` - The product being bought.
    /// * `payment_processor` - Charges the order total.
    /// * `notification_service` - Announces the order once paid.
    pub fn new(
        product: &'a dyn ProductDetails,
        payment_processor: &'a dyn PaymentProcessor,
        notification_service: &'a dyn NotificationService,
    ) -> Self {
        Self {
            product,
            payment_processor,
            notification_service,
        }
    }

    pub fn product(&self) -> &'a dyn ProductDetails {
        self.product
    }

    /// The amount to charge, read from the product on every call.
    pub fn total_amount(&self) -> Decimal {
        self.product.price()
    }

    /// Charges the total, then sends the confirmation message.
    ///
    /// There is no "already placed" state: every call pays and notifies again.
    /// If payment fails the notification is not sent.
    pub fn place_order(&self, out: &mut dyn Write) -> Result<()> {
        let total = self.total_amount();
        tracing::debug!(product = self.product.name(), %total, "placing order");

        self.payment_processor.process_payment(total, out)?;
        self.notification_service.send_notification(
            &format!("Order placed for product: {}", self.product.name()),
            out,
        )?;
        Ok(())
    }
}
