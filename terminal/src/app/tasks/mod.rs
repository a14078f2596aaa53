//! # Async Tasks
//!
//! Background work driven from the Tokio runtime.

pub mod market;

pub use market::{PriceFeed, PriceFeedState};
