use crate::domain::method::NotificationChannel;
use crate::domain::ports::{NotificationService, NotificationServiceBox};
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotificationService;

impl NotificationService for EmailNotificationService {
    fn send_notification(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(channel = "email", "sending notification");
        writeln!(out, "Sending email notification : {message}")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SmsNotificationService;

impl NotificationService for SmsNotificationService {
    fn send_notification(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(channel = "sms", "sending notification");
        writeln!(out, "Sending SMS notification : {message}")?;
        Ok(())
    }
}

/// Builds the notification service for `channel`.
pub fn notification_service(channel: NotificationChannel) -> NotificationServiceBox {
    match channel {
        NotificationChannel::Email => Box::new(EmailNotificationService),
        NotificationChannel::Sms => Box::new(SmsNotificationService),
    }
}
