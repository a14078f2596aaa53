//! # Services Module
//!
//! Concrete adapters for the seams declared in [`crate::core::service`].
//!
//! ```text
//! services/
//! ├── api/          - Market data HTTP client      (PriceSource)
//! ├── storage.rs    - File and in-memory stores    (KeyValueStore)
//! ├── clipboard.rs  - egui and in-memory clipboard (ClipboardSink)
//! └── account.rs    - Demo account generation      (AccountCreator)
//! ```
//!
//! ## Thread Safety
//!
//! - **ApiClient**: wraps `reqwest::Client`, shared across tasks via `Arc`
//! - **FileStore / MemoryStore**: `Send + Sync`, called from the UI thread
//! - **Clipboards**: owned by the coordinator, UI thread only

pub mod account;
pub mod api;
pub mod clipboard;
pub mod storage;

pub use account::DemoAccountCreator;
pub use api::ApiClient;
pub use clipboard::{EguiClipboard, MemoryClipboard};
pub use storage::{FileStore, MemoryStore};
