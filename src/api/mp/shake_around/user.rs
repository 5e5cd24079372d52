//! Shake events.

// crates.io
use serde_json::{Value, json};
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(ShakeUserApi, mp_shake_user, "Shake-around event endpoints.");

impl<C> ShakeUserApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Resolves the device and user behind a shake `ticket`.
	///
	/// With `need_poi` the response also carries the store location of the device.
	pub async fn shake_info(&self, ticket: &str, need_poi: bool) -> Result<Value> {
		let body = json!({ "ticket": ticket, "need_poi": u8::from(need_poi) });

		self.client.post_json(&endpoint::MP_SHAKE_USER_INFO, &[], &body).await
	}
}
