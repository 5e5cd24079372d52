//! Pages shown to users after a shake.

// crates.io
use serde_json::{Value, json};
// self
use super::{page_count, page_offset};
use crate::{_prelude::*, api::endpoint, error::ConfigError, http::ApiHttpClient};

def_api!(ShakePageApi, mp_shake_page, "Shake-around page endpoints.");

/// Content of a shake page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PageContent {
	/// Main title, at most 6 characters.
	pub title: String,
	/// Subtitle, at most 7 characters.
	pub description: String,
	/// Link opened on tap.
	pub page_url: String,
	/// Icon URL returned by [`ShakeAroundApi::add_material`](super::ShakeAroundApi::add_material).
	pub icon_url: String,
	/// Private note.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub comment: Option<String>,
}

impl<C> ShakePageApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a page.
	pub async fn add(&self, page: &PageContent) -> Result<Value> {
		self.client.post_json(&endpoint::MP_SHAKE_PAGE_ADD, &[], page).await
	}

	/// Replaces a page's content.
	pub async fn update(&self, page_id: i64, page: &PageContent) -> Result<Value> {
		let mut body = serde_json::to_value(page).map_err(ConfigError::RequestBody)?;

		body["page_id"] = page_id.into();

		self.client.post_json(&endpoint::MP_SHAKE_PAGE_UPDATE, &[], &body).await
	}

	/// Looks up specific pages.
	pub async fn search_by_ids(&self, page_ids: &[i64]) -> Result<Value> {
		let body = json!({ "type": 1, "page_ids": page_ids });

		self.client.post_json(&endpoint::MP_SHAKE_PAGE_SEARCH, &[], &body).await
	}

	/// Pages through every page; `count` is clamped to `1..=50`.
	pub async fn search(&self, begin: i64, count: i64) -> Result<Value> {
		let body = json!({ "type": 2, "begin": page_offset(begin), "count": page_count(count) });

		self.client.post_json(&endpoint::MP_SHAKE_PAGE_SEARCH, &[], &body).await
	}

	/// Deletes a page; it must be unbound from every device first.
	pub async fn delete(&self, page_id: i64) -> Result<Value> {
		self.client
			.post_json(&endpoint::MP_SHAKE_PAGE_DELETE, &[], &json!({ "page_id": page_id }))
			.await
	}
}
