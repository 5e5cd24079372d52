// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for credential acquisitions.
#[derive(Debug, Default)]
pub struct AcquireMetrics {
	attempts: AtomicU64,
	hits: AtomicU64,
	refreshes: AtomicU64,
	failures: AtomicU64,
}
impl AcquireMetrics {
	/// Returns the total number of acquisitions.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of acquisitions served from the cache.
	pub fn hits(&self) -> u64 {
		self.hits.load(Ordering::Relaxed)
	}

	/// Returns the number of successful remote fetches.
	pub fn refreshes(&self) -> u64 {
		self.refreshes.load(Ordering::Relaxed)
	}

	/// Returns the number of failed acquisitions.
	pub fn failures(&self) -> u64 {
		self.failures.load(Ordering::Relaxed)
	}

	pub(crate) fn record_attempt(&self) {
		self.attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_hit(&self) {
		self.hits.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_refresh(&self) {
		self.refreshes.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.failures.fetch_add(1, Ordering::Relaxed);
	}
}
