use crate::domain::method::{NotificationChannel, PaymentMethod};
use crate::domain::product::Product;
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One order to place, as read from a CSV row.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderRequest {
    pub product: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub payment: PaymentMethod,
    pub notification: NotificationChannel,
}

impl OrderRequest {
    pub fn product(&self) -> Product {
        Product::new(self.product.clone(), self.price)
    }
}

/// Reads order requests from a CSV source.
///
/// Expects a `product,price,payment,notification` header. Whitespace around
/// fields is trimmed.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// A malformed row yields an error for that row; later rows are still read.
    pub fn requests(self) -> impl Iterator<Item = Result<OrderRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "product, price, payment, notification\n\
                    Laptop, 999.99, credit-card, email\n\
                    Phone, 499.00, upi, sms";
        let reader = OrderReader::new(data.as_bytes());
        let results: Vec<Result<OrderRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.product, "Laptop");
        assert_eq!(first.price.to_string(), "999.99");
        assert_eq!(first.payment, PaymentMethod::CreditCard);
        assert_eq!(first.notification, NotificationChannel::Email);

        let second = results[1].as_ref().unwrap();
        assert_eq!(second.payment, PaymentMethod::Upi);
        assert_eq!(second.notification, NotificationChannel::Sms);
        assert_eq!(second.product().price().to_string(), "499.00");
    }

    #[test]
    fn test_reader_keeps_price_scale_and_precision() {
        let data = "product, price, payment, notification\n\
                    Server, 12345678901234567.89, credit-card, email\n\
                    Sticker, 0.10, upi, sms";
        let reader = OrderReader::new(data.as_bytes());
        let prices: Vec<String> = reader
            .requests()
            .map(|request| request.unwrap().price.to_string())
            .collect();

        assert_eq!(prices, vec!["12345678901234567.89", "0.10"]);
        assert_ne!(prices[0], dec!(12345678901234568).to_string());
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "product, price, payment, notification\n\
                    Laptop, 999.99, cash, email\n\
                    Mouse, 25, paytm, sms";
        let reader = OrderReader::new(data.as_bytes());
        let results: Vec<Result<OrderRequest>> = reader.requests().collect();

        assert!(matches!(results[0], Err(OrderError::CsvError(_))));
        assert_eq!(results[1].as_ref().unwrap().product, "Mouse");
    }
}
