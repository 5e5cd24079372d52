//! Long-to-short URL conversion.

// crates.io
use serde_json::{Value, json};
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(ShortUrlApi, mp_short_url, "Short URL endpoints.");

impl<C> ShortUrlApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Converts a long URL into a `w.url.cn` short link.
	pub async fn long_to_short(&self, long_url: &str) -> Result<Value> {
		self.client
			.post_json(
				&endpoint::MP_SHORT_URL,
				&[],
				&json!({ "action": "long2short", "long_url": long_url }),
			)
			.await
	}
}
