//! Auto-reply rules.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(AutoReplyApi, mp_auto_reply, "Auto-reply rule endpoints.");

impl<C> AutoReplyApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches the account's current auto-reply rules.
	pub async fn current(&self) -> Result<Value> {
		self.client.get_json(&endpoint::MP_AUTO_REPLY_INFO, &[]).await
	}
}
