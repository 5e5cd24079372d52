// self
use crate::{auth::CredentialKind, obs::AcquireOutcome};

/// Records an acquisition outcome via the global metrics recorder (when enabled).
pub fn record_acquire_outcome(kind: CredentialKind, outcome: AcquireOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"wxkit_credential_total",
			"kind" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_acquire_outcome_without_recorder() {
		record_acquire_outcome(CredentialKind::AgentJsApiTicket, AcquireOutcome::Failure);
	}
}
