//! Device quota, metadata, location, and page bindings.

// crates.io
use serde_json::{Value, json};
// self
use super::{DeviceIdentifier, page_count, page_offset};
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(ShakeDeviceApi, mp_shake_device, "Shake-around device endpoints.");

impl<C> ShakeDeviceApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Requests `quantity` new device ids; the request is reviewed by the platform.
	pub async fn apply_id(
		&self,
		quantity: u32,
		apply_reason: &str,
		comment: Option<&str>,
		poi_id: Option<i64>,
	) -> Result<Value> {
		let mut body = json!({ "quantity": quantity, "apply_reason": apply_reason });

		if let Some(comment) = comment {
			body["comment"] = comment.into();
		}
		if let Some(poi_id) = poi_id {
			body["poi_id"] = poi_id.into();
		}

		self.client.post_json(&endpoint::MP_SHAKE_DEVICE_APPLY_ID, &[], &body).await
	}

	/// Fetches the review status of a device id request.
	pub async fn apply_status(&self, apply_id: i64) -> Result<Value> {
		self.client
			.post_json(&endpoint::MP_SHAKE_DEVICE_APPLY_STATUS, &[], &json!({ "apply_id": apply_id }))
			.await
	}

	/// Updates a device comment.
	pub async fn update(&self, device: &DeviceIdentifier, comment: &str) -> Result<Value> {
		let body = json!({ "device_identifier": device, "comment": comment });

		self.client.post_json(&endpoint::MP_SHAKE_DEVICE_UPDATE, &[], &body).await
	}

	/// Binds a device to a store location.
	///
	/// `poi_app_id` is required when the location belongs to another official account.
	pub async fn bind_location(
		&self,
		device: &DeviceIdentifier,
		poi_id: i64,
		poi_app_id: Option<&str>,
	) -> Result<Value> {
		let mut body = json!({ "device_identifier": device, "poi_id": poi_id });

		if let Some(poi_app_id) = poi_app_id {
			body["type"] = 2.into();
			body["poi_appid"] = poi_app_id.into();
		}

		self.client.post_json(&endpoint::MP_SHAKE_DEVICE_BIND_LOCATION, &[], &body).await
	}

	/// Looks up specific devices.
	pub async fn search_by_devices(&self, devices: &[DeviceIdentifier]) -> Result<Value> {
		let body = json!({ "type": 1, "device_identifiers": devices });

		self.client.post_json(&endpoint::MP_SHAKE_DEVICE_SEARCH, &[], &body).await
	}

	/// Pages through every device; `count` is clamped to `1..=50`.
	pub async fn search_page(&self, last_seen: i64, count: i64) -> Result<Value> {
		let body = json!({ "type": 2, "last_seen": page_offset(last_seen), "count": page_count(count) });

		self.client.post_json(&endpoint::MP_SHAKE_DEVICE_SEARCH, &[], &body).await
	}

	/// Pages through the devices granted by one request; `count` is clamped to `1..=50`.
	pub async fn search_by_apply_id(
		&self,
		apply_id: i64,
		last_seen: i64,
		count: i64,
	) -> Result<Value> {
		let body = json!({
			"type": 3,
			"apply_id": apply_id,
			"last_seen": page_offset(last_seen),
			"count": page_count(count),
		});

		self.client.post_json(&endpoint::MP_SHAKE_DEVICE_SEARCH, &[], &body).await
	}

	/// Replaces the pages bound to a device; an empty list unbinds everything.
	pub async fn bind_page(&self, device: &DeviceIdentifier, page_ids: &[i64]) -> Result<Value> {
		let body = json!({ "device_identifier": device, "page_ids": page_ids });

		self.client.post_json(&endpoint::MP_SHAKE_DEVICE_BIND_PAGE, &[], &body).await
	}

	/// Lists the pages bound to a device.
	pub async fn relation_by_device(&self, device: &DeviceIdentifier) -> Result<Value> {
		let body = json!({ "type": 1, "device_identifier": device });

		self.client.post_json(&endpoint::MP_SHAKE_RELATION_SEARCH, &[], &body).await
	}

	/// Lists the devices bound to a page; `count` is clamped to `1..=50`.
	pub async fn relation_by_page(&self, page_id: i64, begin: i64, count: i64) -> Result<Value> {
		let body = json!({
			"type": 2,
			"page_id": page_id,
			"begin": page_offset(begin),
			"count": page_count(count),
		});

		self.client.post_json(&endpoint::MP_SHAKE_RELATION_SEARCH, &[], &body).await
	}
}
