use super::ports::ProductDetails;
use rust_decimal::Decimal;

/// A named item for sale.
///
/// Fields are private so a product cannot change once built. Name and price
/// are taken as given; nothing is validated.
#[derive(Debug)]
pub struct Product {
    name: String,
    price: Decimal,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl ProductDetails for Product {
    fn name(&self) -> &str {
        Product::name(self)
    }

    fn price(&self) -> Decimal {
        Product::price(self)
    }
}
