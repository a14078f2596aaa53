//! # Price Feed Poller
//!
//! Periodically fetches quotes for every tracked asset and keeps the latest
//! successful board.
//!
//! ## Schedule
//!
//! Activation fetches immediately, then once per interval. Each fetch is
//! awaited inside the poll loop and missed ticks are skipped, so at most one
//! fetch is in flight and results apply in the order they were requested.
//!
//! ## Cancellation
//!
//! Every activation gets a generation number. A completion is applied only
//! while its generation is current, and the check happens under the board's
//! write lock. [`PriceFeed::deactivate`] bumps the generation under the same
//! lock before aborting the task, so once it returns no fetch can touch the
//! board.

use async_channel::Sender;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::app::events::AppEvent;
use crate::app::state::{Asset, FeedStatus, PriceBoard};
use crate::core::error::Result;
use crate::core::service::PriceSource;
use crate::debug::error_aggregator;

const FALLBACK_INTERVAL: Duration = Duration::from_secs(10);

/// Board plus feed health, read together by the renderers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceFeedState {
    pub board: PriceBoard,
    pub status: FeedStatus,
}

struct PollerHandle {
    generation: u64,
    task: JoinHandle<()>,
}

/// Owner of the price board and the poller that refreshes it.
pub struct PriceFeed {
    source: Arc<dyn PriceSource>,
    interval: Duration,
    shared: Arc<RwLock<PriceFeedState>>,
    generation: Arc<AtomicU64>,
    poller: Option<PollerHandle>,
}

impl PriceFeed {
    /// Inactive feed showing the zero placeholder board.
    pub fn new(source: Arc<dyn PriceSource>, interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            tracing::warn!(fallback_secs = FALLBACK_INTERVAL.as_secs(), "Zero poll interval, using fallback");
            FALLBACK_INTERVAL
        } else {
            interval
        };

        Self {
            source,
            interval,
            shared: Arc::new(RwLock::new(PriceFeedState::default())),
            generation: Arc::new(AtomicU64::new(0)),
            poller: None,
        }
    }

    /// Start polling on `runtime`. No-op while already active.
    pub fn activate(&mut self, runtime: &Handle, events: Sender<AppEvent>) {
        if self.poller.is_some() {
            tracing::debug!("Price poller already active");
            return;
        }

        // A new activation starts a fresh failure streak; the board is kept.
        let generation = {
            let mut state = self.shared.write();
            state.status = FeedStatus::default();
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let poller = Poller {
            source: Arc::clone(&self.source),
            shared: Arc::clone(&self.shared),
            current_generation: Arc::clone(&self.generation),
            generation,
            interval: self.interval,
            events,
        };
        let task = runtime.spawn(poller.run());

        tracing::info!(
            generation = generation,
            interval_secs = self.interval.as_secs_f64(),
            "Price poller activated"
        );
        self.poller = Some(PollerHandle { generation, task });
    }

    /// Stop polling. After this returns, no in-flight fetch can change the board.
    pub fn deactivate(&mut self) {
        let Some(poller) = self.poller.take() else {
            return;
        };

        {
            let _state = self.shared.write();
            self.generation.fetch_add(1, Ordering::SeqCst);
        }
        poller.task.abort();

        tracing::info!(generation = poller.generation, "Price poller deactivated");
    }

    pub fn is_active(&self) -> bool {
        self.poller.is_some()
    }

    /// Generation of the running poller, `None` while inactive.
    pub fn active_generation(&self) -> Option<u64> {
        self.poller.as_ref().map(|p| p.generation)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Consistent copy of board and status.
    pub fn snapshot(&self) -> PriceFeedState {
        self.shared.read().clone()
    }

    pub fn board(&self) -> PriceBoard {
        self.shared.read().board
    }
}

impl Drop for PriceFeed {
    fn drop(&mut self) {
        self.deactivate();
    }
}

struct Poller {
    source: Arc<dyn PriceSource>,
    shared: Arc<RwLock<PriceFeedState>>,
    current_generation: Arc<AtomicU64>,
    generation: u64,
    interval: Duration,
    events: Sender<AppEvent>,
}

impl Poller {
    async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let start = std::time::Instant::now();
            let result = self.source.fetch_board(&Asset::ALL).await;
            let duration = start.elapsed();

            match apply_fetch_result(&self.shared, &self.current_generation, self.generation, result) {
                Some(event) => {
                    if let AppEvent::PricesUpdated(_) = event {
                        tracing::debug!(
                            asset_count = Asset::ALL.len(),
                            duration_ms = duration.as_millis(),
                            "Prices fetched successfully"
                        );
                    }
                    if self.events.send(event).await.is_err() {
                        tracing::debug!(generation = self.generation, "Event channel closed, stopping price poller");
                        break;
                    }
                }
                None => break,
            }
        }
    }
}

/// Apply one fetch outcome if `generation` is still current.
///
/// Returns the event to publish, or `None` when the completion is stale and
/// was discarded.
pub(crate) fn apply_fetch_result(
    shared: &RwLock<PriceFeedState>,
    current_generation: &AtomicU64,
    generation: u64,
    result: Result<PriceBoard>,
) -> Option<AppEvent> {
    let mut state = shared.write();

    if current_generation.load(Ordering::SeqCst) != generation {
        tracing::debug!(generation = generation, "Discarding stale price completion");
        return None;
    }

    match result {
        Ok(board) => {
            if state.status.consecutive_failures > 0 {
                tracing::info!(
                    failures = state.status.consecutive_failures,
                    "Price feed recovered"
                );
            }
            state.board = board;
            state.status = FeedStatus {
                last_success: Some(Utc::now()),
                consecutive_failures: 0,
                last_error: None,
            };
            Some(AppEvent::PricesUpdated(board))
        }
        Err(e) => {
            let error = e.to_string();
            state.status.consecutive_failures = state.status.consecutive_failures.saturating_add(1);
            state.status.last_error = Some(error.clone());
            let consecutive_failures = state.status.consecutive_failures;
            drop(state);

            tracing::warn!(
                error = %error,
                consecutive_failures = consecutive_failures,
                "Price fetch failed, keeping last known prices"
            );
            error_aggregator::record_error(
                format!("Price fetch failed: {}", error),
                Some("app::tasks::market".to_string()),
            );
            Some(AppEvent::PriceFetchFailed { generation, error, consecutive_failures })
        }
    }
}
