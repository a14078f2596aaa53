//! # Screen Modules
//!
//! One module per wallet screen.
//!
//! - **[`landing`]**: first run, offers account creation
//! - **[`main`]**: header, menu, price card, send and receive
//! - **[`token_details`]**: full address, balance, explorer link
//! - **[`recover`]**: numbered recovery words
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, view: &MainView, app: &mut App, theme: &Theme) {
//!     // Read from the view snapshot
//!     // Call app intents for user actions
//! }
//! ```
//!
//! Screens draw from the [`crate::app::WalletView`] built at the start of
//! the frame. Intents called mid-frame take effect on the next one.

pub mod landing;
pub mod main;
pub mod recover;
pub mod token_details;
