//! Error aggregation and storm detection
//!
//! The observability sink for recoverable failures: price fetch errors,
//! storage problems, clipboard failures. Keeps a bounded history for the
//! status line and warns when errors arrive faster than the storm threshold.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

const MAX_ERRORS: usize = 100;
const STORM_THRESHOLD: usize = 10;
const STORM_WINDOW: Duration = Duration::from_secs(1);
const STORM_WARNING_INTERVAL: Duration = Duration::from_secs(5);

/// Global error aggregator
static ERROR_AGGREGATOR: Lazy<Mutex<ErrorAggregator>> = Lazy::new(|| Mutex::new(ErrorAggregator::new(MAX_ERRORS)));

/// Error entry
#[derive(Debug, Clone)]
pub struct ErrorEntry {
    pub timestamp: Instant,
    pub level: ErrorLevel,
    pub message: String,
    pub location: Option<String>,
}

/// Error level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorLevel {
    Error,
    Warning,
    Panic,
}

impl std::fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorLevel::Error => write!(f, "ERROR"),
            ErrorLevel::Warning => write!(f, "WARN"),
            ErrorLevel::Panic => write!(f, "PANIC"),
        }
    }
}

/// Bounded error history with per-level counts.
pub struct ErrorAggregator {
    recent_errors: VecDeque<ErrorEntry>,
    max_errors: usize,
    error_counts: HashMap<ErrorLevel, u64>,
    last_storm_warning: Option<Instant>,
}

impl ErrorAggregator {
    pub fn new(max_errors: usize) -> Self {
        Self {
            recent_errors: VecDeque::with_capacity(max_errors),
            max_errors: max_errors.max(1),
            error_counts: HashMap::new(),
            last_storm_warning: None,
        }
    }

    /// Add an entry; returns true when this entry tipped an error storm warning.
    pub fn add(&mut self, entry: ErrorEntry) -> bool {
        *self.error_counts.entry(entry.level).or_insert(0) += 1;

        if self.recent_errors.len() >= self.max_errors {
            self.recent_errors.pop_front();
        }
        let now = entry.timestamp;
        self.recent_errors.push_back(entry);

        self.check_error_storm(now)
    }

    fn check_error_storm(&mut self, now: Instant) -> bool {
        let recent_count = self
            .recent_errors
            .iter()
            .rev()
            .take_while(|e| now.saturating_duration_since(e.timestamp) < STORM_WINDOW)
            .count();

        if recent_count < STORM_THRESHOLD {
            return false;
        }

        let should_warn = self
            .last_storm_warning
            .map(|t| now.saturating_duration_since(t) >= STORM_WARNING_INTERVAL)
            .unwrap_or(true);

        if should_warn {
            tracing::error!(
                errors_per_second = recent_count,
                threshold = STORM_THRESHOLD,
                "Error storm detected"
            );
            self.last_storm_warning = Some(now);
        }
        should_warn
    }

    /// Most recent entries first.
    pub fn recent(&self, count: usize) -> Vec<ErrorEntry> {
        self.recent_errors.iter().rev().take(count).cloned().collect()
    }

    pub fn stats(&self) -> HashMap<ErrorLevel, u64> {
        self.error_counts.clone()
    }

    pub fn total(&self) -> u64 {
        self.error_counts.values().sum()
    }
}

fn record(level: ErrorLevel, message: String, location: Option<String>) {
    ERROR_AGGREGATOR.lock().add(ErrorEntry {
        timestamp: Instant::now(),
        level,
        message,
        location,
    });
}

/// Record an error
pub fn record_error(message: String, location: Option<String>) {
    match &location {
        Some(loc) => tracing::error!(location = %loc, message = %message, "Error recorded"),
        None => tracing::error!(message = %message, "Error recorded"),
    }
    record(ErrorLevel::Error, message, location);
}

/// Record a warning
pub fn record_warning(message: String, location: Option<String>) {
    match &location {
        Some(loc) => tracing::warn!(location = %loc, message = %message, "Warning recorded"),
        None => tracing::warn!(message = %message, "Warning recorded"),
    }
    record(ErrorLevel::Warning, message, location);
}

/// Record a panic. The panic hook logs it separately.
pub fn record_panic(message: String, location: Option<String>) {
    record(ErrorLevel::Panic, message, location);
}

/// Get recent errors, newest first
pub fn get_recent_errors(count: usize) -> Vec<ErrorEntry> {
    ERROR_AGGREGATOR.lock().recent(count)
}

/// Get error statistics
pub fn get_error_stats() -> HashMap<ErrorLevel, u64> {
    ERROR_AGGREGATOR.lock().stats()
}

/// Get total error count
pub fn total_error_count() -> u64 {
    ERROR_AGGREGATOR.lock().total()
}

/// Log error statistics
pub fn log_error_stats() {
    let stats = get_error_stats();
    tracing::info!(
        total_errors = total_error_count(),
        errors = stats.get(&ErrorLevel::Error).unwrap_or(&0),
        warnings = stats.get(&ErrorLevel::Warning).unwrap_or(&0),
        panics = stats.get(&ErrorLevel::Panic).unwrap_or(&0),
        "Error aggregation statistics"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: ErrorLevel, at: Instant, message: &str) -> ErrorEntry {
        ErrorEntry { timestamp: at, level, message: message.to_string(), location: None }
    }

    #[test]
    fn test_ring_buffer_keeps_newest() {
        let mut aggregator = ErrorAggregator::new(3);
        let start = Instant::now();
        for i in 0..5 {
            aggregator.add(entry(ErrorLevel::Error, start + Duration::from_secs(i * 2), &format!("e{}", i)));
        }

        let recent: Vec<String> = aggregator.recent(10).into_iter().map(|e| e.message).collect();
        assert_eq!(recent, vec!["e4", "e3", "e2"]);
        assert_eq!(aggregator.total(), 5);
    }

    #[test]
    fn test_counts_by_level() {
        let mut aggregator = ErrorAggregator::new(10);
        let now = Instant::now();
        aggregator.add(entry(ErrorLevel::Error, now, "a"));
        aggregator.add(entry(ErrorLevel::Warning, now, "b"));
        aggregator.add(entry(ErrorLevel::Warning, now, "c"));

        let stats = aggregator.stats();
        assert_eq!(stats.get(&ErrorLevel::Warning), Some(&2));
        assert_eq!(stats.get(&ErrorLevel::Panic), None);
    }

    #[test]
    fn test_storm_detection_is_rate_limited() {
        let mut aggregator = ErrorAggregator::new(100);
        let start = Instant::now();

        let storms: Vec<bool> = (0..STORM_THRESHOLD + 3)
            .map(|i| aggregator.add(entry(ErrorLevel::Error, start + Duration::from_millis(i as u64), "boom")))
            .collect();
        assert_eq!(storms.iter().filter(|s| **s).count(), 1);
        assert!(storms[STORM_THRESHOLD - 1]);

        // Spread-out errors never form a storm.
        let mut calm = ErrorAggregator::new(100);
        let tripped = (0..20).any(|i| calm.add(entry(ErrorLevel::Error, start + Duration::from_secs(i), "slow")));
        assert!(!tripped);
    }

    #[test]
    fn test_global_sink_records() {
        let before = total_error_count();
        record_warning("price feed slow".to_string(), Some("tasks::market".to_string()));
        assert!(total_error_count() > before);
        assert!(get_recent_errors(100).iter().any(|e| e.message == "price feed slow"));
    }
}
