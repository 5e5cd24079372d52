//! Device groups.

// crates.io
use serde_json::{Value, json};
// self
use super::{DeviceIdentifier, group_page_count, page_offset};
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(ShakeGroupApi, mp_shake_group, "Shake-around device group endpoints.");

impl<C> ShakeGroupApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a device group.
	pub async fn add(&self, group_name: &str) -> Result<Value> {
		self.client
			.post_json(&endpoint::MP_SHAKE_GROUP_ADD, &[], &json!({ "group_name": group_name }))
			.await
	}

	/// Renames a device group.
	pub async fn update(&self, group_id: i64, group_name: &str) -> Result<Value> {
		let body = json!({ "group_id": group_id, "group_name": group_name });

		self.client.post_json(&endpoint::MP_SHAKE_GROUP_UPDATE, &[], &body).await
	}

	/// Deletes a device group.
	pub async fn delete(&self, group_id: i64) -> Result<Value> {
		self.client
			.post_json(&endpoint::MP_SHAKE_GROUP_DELETE, &[], &json!({ "group_id": group_id }))
			.await
	}

	/// Pages through groups; `count` is clamped to `1..=1000`.
	pub async fn list(&self, begin: i64, count: i64) -> Result<Value> {
		let body = json!({ "begin": page_offset(begin), "count": group_page_count(count) });

		self.client.post_json(&endpoint::MP_SHAKE_GROUP_LIST, &[], &body).await
	}

	/// Fetches a group with a page of its devices; `count` is clamped to `1..=1000`.
	pub async fn detail(&self, group_id: i64, begin: i64, count: i64) -> Result<Value> {
		let body =
			json!({ "group_id": group_id, "begin": page_offset(begin), "count": group_page_count(count) });

		self.client.post_json(&endpoint::MP_SHAKE_GROUP_DETAIL, &[], &body).await
	}

	/// Adds devices to a group.
	pub async fn add_devices(
		&self,
		group_id: i64,
		devices: &[DeviceIdentifier],
	) -> Result<Value> {
		let body = json!({ "group_id": group_id, "device_identifiers": devices });

		self.client.post_json(&endpoint::MP_SHAKE_GROUP_ADD_DEVICE, &[], &body).await
	}

	/// Removes devices from a group.
	pub async fn remove_devices(
		&self,
		group_id: i64,
		devices: &[DeviceIdentifier],
	) -> Result<Value> {
		let body = json!({ "group_id": group_id, "device_identifiers": devices });

		self.client.post_json(&endpoint::MP_SHAKE_GROUP_DELETE_DEVICE, &[], &body).await
	}
}
