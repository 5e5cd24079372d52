//! Semantic query understanding.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(SemanticApi, mp_semantic, "Semantic query endpoints.");

impl<C> SemanticApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Runs a semantic query; `query` carries `query`, `category`, `uid`, and location hints.
	pub async fn search<B>(&self, query: &B) -> Result<Value>
	where
		B: ?Sized + Serialize,
	{
		self.client.post_json(&endpoint::MP_SEMANTIC_SEARCH, &[], query).await
	}
}
