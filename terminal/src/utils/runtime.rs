//! Global Tokio runtime for background work.
//!
//! eframe owns the main thread and runs no async executor, but reqwest and
//! the price poller need a Tokio context. Tasks are spawned here and report
//! back to the UI thread over the `AppEvent` channel.
//!
//! ```rust,no_run
//! use wallet_terminal::utils::runtime::TOKIO_RT;
//!
//! let handle = TOKIO_RT.handle().clone();
//! handle.spawn(async move {
//!     // network I/O
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

/// Worker count for the background runtime; the app runs one poller and
/// the occasional one-shot request.
const WORKER_THREADS: usize = 2;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .worker_threads(WORKER_THREADS)
        .thread_name("wallet-rt")
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime for background tasks")
});
