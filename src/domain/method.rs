use clap::ValueEnum;
use serde::Deserialize;

#[derive(Debug, Deserialize, ValueEnum, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Paytm,
    Upi,
}

#[derive(Debug, Deserialize, ValueEnum, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationChannel {
    #[default]
    Email,
    Sms,
}
