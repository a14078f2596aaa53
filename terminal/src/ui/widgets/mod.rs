//! # Reusable Widgets

pub mod header;
pub mod notifications;
pub mod price_panel;

pub use notifications::NotificationManager;
