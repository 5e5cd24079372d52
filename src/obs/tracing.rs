// self
use crate::{_prelude::*, auth::CredentialKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// A span builder used around credential acquisition.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a new span tagged with the provided credential kind + stage.
	pub fn new(kind: CredentialKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("wxkit.credential", kind = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Reports a cache entry that could not be read or trusted; the caller treats it as a miss.
pub fn cache_read_discarded(key: &str, reason: &dyn Display) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(key, reason = %reason, "Discarding unusable credential cache entry.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (key, reason);
	}
}

/// Reports a cache write failure; the credential is still handed to the caller.
pub fn cache_write_failed(key: &str, reason: &dyn Display) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(key, reason = %reason, "Failed to persist refreshed credential.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (key, reason);
	}
}

/// Emits a debug event describing where a credential came from.
pub fn credential_resolved(key: &str, source: &'static str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(key, source, "Credential resolved.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (key, source);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn helpers_accept_any_display_reason() {
		cache_read_discarded("wx:ww:access_token", &"parse failure");
		cache_write_failed("wx:ww:access_token", &42);
		credential_resolved("wx:ww:access_token", "cache");
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = FlowSpan::new(CredentialKind::AccessToken, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
