//! Temporary media upload and download.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	api::endpoint,
	http::{ApiHttpClient, UploadFile},
};

def_api!(MediaApi, qy_media, "Temporary media endpoints.");

/// Temporary media categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
	/// Image (jpg, png).
	Image,
	/// Voice (amr).
	Voice,
	/// Video (mp4).
	Video,
	/// Any other file.
	File,
}
impl MediaType {
	/// Returns the value of the `type` query parameter.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Image => "image",
			Self::Voice => "voice",
			Self::Video => "video",
			Self::File => "file",
		}
	}
}

impl<C> MediaApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Uploads a temporary media file; the response carries its `media_id`.
	pub async fn upload(&self, kind: MediaType, file: UploadFile) -> Result<Value> {
		self.client.upload(&endpoint::QY_MEDIA_UPLOAD, &[kind.as_str()], file, Vec::new()).await
	}

	/// Uploads an image for use inside message bodies; the response carries its `url`.
	pub async fn upload_image(&self, file: UploadFile) -> Result<Value> {
		self.client.upload(&endpoint::QY_MEDIA_UPLOAD_IMAGE, &[], file, Vec::new()).await
	}

	/// Downloads a temporary media file.
	pub async fn get(&self, media_id: &str) -> Result<Vec<u8>> {
		self.client.get_bytes(&endpoint::QY_MEDIA_GET, &[media_id]).await
	}

	/// Downloads a high-definition voice recording captured through the JS-SDK.
	pub async fn get_jssdk(&self, media_id: &str) -> Result<Vec<u8>> {
		self.client.get_bytes(&endpoint::QY_MEDIA_GET_JSSDK, &[media_id]).await
	}
}
