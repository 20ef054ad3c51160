use clap::Parser;
use miette::{IntoDiagnostic, Result};
use orderflow::application::order::Order;
use orderflow::domain::method::{NotificationChannel, PaymentMethod};
use orderflow::domain::product::Product;
use orderflow::infrastructure::notification::notification_service;
use orderflow::infrastructure::payment::payment_processor;
use orderflow::interfaces::csv::order_reader::OrderReader;
use orderflow::logging;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the product to order
    #[arg(long, default_value = "Laptop")]
    product: String,

    /// Price of the product
    #[arg(long, default_value_t = dec!(999.99), allow_negative_numbers = true)]
    price: Decimal,

    /// How the order is paid
    #[arg(long, value_enum, default_value_t)]
    payment: PaymentMethod,

    /// How the customer is notified
    #[arg(long, value_enum, default_value_t)]
    notification: NotificationChannel,

    /// CSV file of orders to place instead of the single order above
    #[arg(long)]
    orders: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn place(
    product: &Product,
    payment: PaymentMethod,
    notification: NotificationChannel,
    out: &mut dyn Write,
) -> Result<()> {
    let processor = payment_processor(payment);
    let notifier = notification_service(notification);
    let order = Order::new(product, processor.as_ref(), notifier.as_ref());

    order.place_order(out).into_diagnostic()?;
    writeln!(out, "Order processed successfully.").into_diagnostic()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.orders {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            let reader = OrderReader::new(file);
            for request in reader.requests() {
                match request {
                    Ok(request) => place(
                        &request.product(),
                        request.payment,
                        request.notification,
                        &mut out,
                    )?,
                    Err(e) => {
                        eprintln!("Error reading order: {}", e);
                    }
                }
            }
        }
        None => {
            let product = Product::new(cli.product, cli.price);
            place(&product, cli.payment, cli.notification, &mut out)?;
        }
    }

    Ok(())
}
