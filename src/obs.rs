//! Optional observability helpers for credential acquisition.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `wxkit.credential` with the `kind`
//!   (credential kind) and `stage` (call site) fields, plus `warn` events for unreadable or
//!   unwritable cache entries.
//! - Enable `metrics` to increment the `wxkit_credential_total` counter for every
//!   attempt/hit/refresh/failure, labeled by `kind` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AcquireOutcome {
	/// Entry to the cache component.
	Attempt,
	/// A cached credential was still valid.
	CacheHit,
	/// The remote provider issued a new credential.
	Refreshed,
	/// Failure propagated back to the caller.
	Failure,
}
impl AcquireOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AcquireOutcome::Attempt => "attempt",
			AcquireOutcome::CacheHit => "cache_hit",
			AcquireOutcome::Refreshed => "refreshed",
			AcquireOutcome::Failure => "failure",
		}
	}
}
impl Display for AcquireOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
