//! Callback server addresses and network checks.

// crates.io
use serde_json::{Value, json};
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(CallbackApi, mp_callback, "Callback server endpoints.");

/// Probe performed by [`CallbackApi::check`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckAction {
	/// Resolve the callback domain.
	Dns,
	/// Ping the callback host.
	Ping,
	/// Both probes.
	#[default]
	All,
}

/// Carrier the probe egresses through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckOperator {
	/// China Telecom.
	Chinanet,
	/// China Unicom.
	Unicom,
	/// Tencent's own egress.
	Cap,
	/// Picked from the callback IP.
	#[default]
	Default,
}

impl<C> CallbackApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the IP addresses callbacks are sent from.
	pub async fn callback_ip(&self) -> Result<Value> {
		self.client.get_json(&endpoint::MP_CALLBACK_IP, &[]).await
	}

	/// Asks the platform to probe the configured callback URL.
	pub async fn check(&self, action: CheckAction, operator: CheckOperator) -> Result<Value> {
		self.client
			.post_json(
				&endpoint::MP_CALLBACK_CHECK,
				&[],
				&json!({ "action": action, "check_operator": operator }),
			)
			.await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn probe_labels_match_platform_values() {
		assert_eq!(json!(CheckAction::default()), json!("all"));
		assert_eq!(json!(CheckOperator::Chinanet), json!("CHINANET"));
		assert_eq!(json!(CheckOperator::default()), json!("DEFAULT"));
	}
}
