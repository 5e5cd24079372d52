//! Shake-around (iBeacon) accounts, devices, groups, pages, and shake events.

pub mod device;
pub mod group;
pub mod page;
pub mod user;

pub use device::*;
pub use group::*;
pub use page::*;
pub use user::*;

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	api::endpoint,
	http::{ApiHttpClient, UploadFile},
};

def_api!(ShakeAroundApi, mp_shake_around, "Shake-around endpoints.");

const MAX_PAGE_COUNT: i64 = 50;
const MAX_GROUP_PAGE_COUNT: i64 = 1000;

/// Identifies a device either by its id or by its beacon triple.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentifier {
	/// Platform-assigned device id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub device_id: Option<i64>,
	/// Beacon UUID.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uuid: Option<String>,
	/// Beacon major.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub major: Option<i64>,
	/// Beacon minor.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub minor: Option<i64>,
}
impl DeviceIdentifier {
	/// Identifies a device by id.
	pub fn by_id(device_id: i64) -> Self {
		Self { device_id: Some(device_id), ..Default::default() }
	}

	/// Identifies a device by `uuid`, `major`, and `minor`.
	pub fn by_beacon(uuid: impl Into<String>, major: i64, minor: i64) -> Self {
		Self { uuid: Some(uuid.into()), major: Some(major), minor: Some(minor), device_id: None }
	}
}

/// Merchant registration submitted for review.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Registration {
	/// Contact name.
	pub name: String,
	/// Contact phone number.
	pub phone_number: String,
	/// Contact email.
	pub email: String,
	/// Industry qualification media id.
	pub industry_id: String,
	/// Qualification document URLs uploaded through [`ShakeAroundApi::add_material`].
	pub qualification_cert_urls: Vec<String>,
	/// Free-form notes for the reviewer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub apply_reason: Option<String>,
}

/// Kind of material uploaded through [`ShakeAroundApi::add_material`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialType {
	/// Page icon, square JPG or PNG up to 200 KB.
	#[default]
	Icon,
	/// Qualification document, up to 2 MB.
	License,
}
impl MaterialType {
	/// Returns the `type` form value.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Icon => "Icon",
			Self::License => "License",
		}
	}
}

impl<C> ShakeAroundApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Submits the merchant registration.
	pub async fn register(&self, registration: &Registration) -> Result<Value> {
		self.client.post_json(&endpoint::MP_SHAKE_ACCOUNT_REGISTER, &[], registration).await
	}

	/// Fetches the registration review status.
	pub async fn audit_status(&self) -> Result<Value> {
		self.client.get_json(&endpoint::MP_SHAKE_ACCOUNT_AUDIT_STATUS, &[]).await
	}

	/// Uploads an icon or qualification document.
	pub async fn add_material(&self, kind: MaterialType, file: UploadFile) -> Result<Value> {
		let form = vec![("type".to_owned(), kind.as_str().to_owned())];

		self.client.upload(&endpoint::MP_SHAKE_MATERIAL_ADD, &[], file, form).await
	}
}

/// Clamps a page size to the accepted `1..=50` range.
pub(crate) fn page_count(count: i64) -> i64 {
	count.clamp(1, MAX_PAGE_COUNT)
}

/// Clamps a group page size to the accepted `1..=1000` range.
pub(crate) fn group_page_count(count: i64) -> i64 {
	count.clamp(1, MAX_GROUP_PAGE_COUNT)
}

/// Clamps a page offset to be non-negative.
pub(crate) fn page_offset(offset: i64) -> i64 {
	offset.max(0)
}
