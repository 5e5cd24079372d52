//! Platform network information.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(MiscApi, qy_misc, "Platform network information endpoints.");

impl<C> MiscApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the egress IP ranges of the WeCom API domain.
	pub async fn api_domain_ip(&self) -> Result<Value> {
		self.client.get_json(&endpoint::QY_API_DOMAIN_IP, &[]).await
	}
}
