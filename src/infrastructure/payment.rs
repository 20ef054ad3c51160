use crate::domain::method::PaymentMethod;
use crate::domain::ports::{PaymentProcessor, PaymentProcessorBox};
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

/// Card payments.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPaymentProcessor;

impl PaymentProcessor for CreditCardPaymentProcessor {
    fn process_payment(&self, amount: Decimal, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(%amount, method = "credit-card", "processing payment");
        writeln!(out, "Processing credit card payment of ${amount}")?;
        Ok(())
    }
}

/// Paytm wallet payments.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaytmPaymentProcessor;

impl PaymentProcessor for PaytmPaymentProcessor {
    fn process_payment(&self, amount: Decimal, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(%amount, method = "paytm", "processing payment");
        writeln!(out, "Processing Paytm payment of ${amount}")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UpiPaymentProcessor;

impl PaymentProcessor for UpiPaymentProcessor {
    fn process_payment(&self, amount: Decimal, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(%amount, method = "upi", "processing payment");
        writeln!(out, "Processing payment using UPI of ${amount}")?;
        Ok(())
    }
}

/// Builds the processor for `method`.
pub fn payment_processor(method: PaymentMethod) -> PaymentProcessorBox {
    match method {
        PaymentMethod::CreditCard => Box::new(CreditCardPaymentProcessor),
        PaymentMethod::Paytm => Box::new(PaytmPaymentProcessor),
        PaymentMethod::Upi => Box::new(UpiPaymentProcessor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use rust_decimal_macros::dec;

    fn run(processor: &dyn PaymentProcessor, amount: Decimal) -> String {
        let mut out = Vec::new();
        processor.process_payment(amount, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_credit_card_line() {
        let output = run(&CreditCardPaymentProcessor, dec!(999.99));
        assert_eq!(output, "Processing credit card payment of $999.99\n");
    }

    #[test]
    fn test_paytm_line() {
        let output = run(&PaytmPaymentProcessor, dec!(10.50));
        assert_eq!(output, "Processing Paytm payment of $10.50\n");
    }

    #[test]
    fn test_upi_line() {
        let output = run(&UpiPaymentProcessor, dec!(42));
        assert_eq!(output, "Processing payment using UPI of $42\n");
    }

    #[test]
    fn test_zero_amount_writes_one_line() {
        for method in PaymentMethod::value_variants().iter().copied() {
            let output = run(payment_processor(method).as_ref(), Decimal::ZERO);
            assert_eq!(output.lines().count(), 1);
            assert!(output.trim_end().ends_with("$0"), "got {output:?}");
        }
    }

    #[test]
    fn test_factory_picks_matching_variant() {
        let cases = [
            (PaymentMethod::CreditCard, "credit card"),
            (PaymentMethod::Paytm, "Paytm"),
            (PaymentMethod::Upi, "UPI"),
        ];
        for (method, label) in cases {
            let output = run(payment_processor(method).as_ref(), dec!(1));
            assert!(output.contains(label), "{method:?} wrote {output:?}");
        }
    }
}
