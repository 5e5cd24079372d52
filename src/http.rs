//! HTTP collaborator used by the API client.
//!
//! [`ApiHttpClient`] is the client's only dependency on an HTTP stack. It executes a fully
//! rendered URL and hands back the raw body plus [`ResponseMetadata`], leaving JSON decoding and
//! `errcode` classification to the caller. [`ReqwestHttpClient`] is the default implementation.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
use std::path::Path;
// crates.io
#[cfg(feature = "reqwest")]
use reqwest::{
	RequestBuilder,
	header::{CONTENT_TYPE, HeaderMap, RETRY_AFTER},
	multipart::{Form, Part},
};
#[cfg(feature = "reqwest")] use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, error::TransportError};

/// Multipart field name the platform expects uploaded files under.
pub const UPLOAD_FIELD: &str = "media";

/// Boxed future returned by [`ApiHttpClient`] operations.
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing platform API calls.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared across
/// clients behind an [`Arc`]. Non-2xx responses are returned as regular [`ApiResponse`]
/// values; only failures to obtain a response at all surface as [`TransportError`].
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Issues a `GET` request.
	fn get<'a>(&'a self, url: Url) -> HttpFuture<'a, ApiResponse>;

	/// Issues a `POST` request with a JSON body.
	fn post_json<'a>(&'a self, url: Url, body: String) -> HttpFuture<'a, ApiResponse>;

	/// Issues a multipart `POST` carrying `file` under [`UPLOAD_FIELD`] plus extra text fields.
	fn upload<'a>(
		&'a self,
		url: Url,
		file: UploadFile,
		form: Vec<(String, String)>,
	) -> HttpFuture<'a, ApiResponse>;
}

/// Metadata captured from an HTTP response.
///
/// Additional metadata fields may be added in future releases, so downstream code
/// should construct values using field names instead of struct update syntax.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// HTTP status code, if available.
	pub status: Option<u16>,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
	/// Raw `Content-Type` header.
	pub content_type: Option<String>,
}

/// Raw response returned by an [`ApiHttpClient`].
#[derive(Clone, Debug, Default)]
pub struct ApiResponse {
	/// Status and header details.
	pub metadata: ResponseMetadata,
	/// Undecoded response body.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Builds a response with a status and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self {
			metadata: ResponseMetadata { status: Some(status), ..Default::default() },
			body: body.into(),
		}
	}

	/// Returns `true` for 2xx statuses, or when the transport reported none.
	pub fn is_success(&self) -> bool {
		self.metadata.status.is_none_or(|status| (200..300).contains(&status))
	}
}

/// File payload for multipart uploads.
#[derive(Clone)]
pub struct UploadFile {
	/// File name reported in the multipart part.
	pub file_name: String,
	/// MIME type of the part, if known.
	pub content_type: Option<String>,
	/// File contents.
	pub bytes: Vec<u8>,
}
impl UploadFile {
	/// Wraps in-memory contents.
	pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
		Self { file_name: file_name.into(), content_type: None, bytes: bytes.into() }
	}

	/// Reads a file from disk, naming the part after the file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TransportError> {
		let path = path.as_ref();
		let bytes = std::fs::read(path)?;
		let file_name = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| "upload".into());

		Ok(Self::new(file_name, bytes))
	}

	/// Sets the MIME type of the part.
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());

		self
	}
}
impl Debug for UploadFile {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("UploadFile")
			.field("file_name", &self.file_name)
			.field("content_type", &self.content_type)
			.field("len", &self.bytes.len())
			.finish()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse, TransportError> {
		let response = request.send().await?;
		let status = response.status();
		let retry_after = parse_retry_after(response.headers());
		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
			.map(str::to_owned);
		let body = response.bytes().await?.to_vec();

		Ok(ApiResponse {
			metadata: ResponseMetadata { status: Some(status.as_u16()), retry_after, content_type },
			body,
		})
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	fn get<'a>(&'a self, url: Url) -> HttpFuture<'a, ApiResponse> {
		Box::pin(self.execute(self.0.get(url)))
	}

	fn post_json<'a>(&'a self, url: Url, body: String) -> HttpFuture<'a, ApiResponse> {
		Box::pin(self.execute(self.0.post(url).header(CONTENT_TYPE, "application/json").body(body)))
	}

	fn upload<'a>(
		&'a self,
		url: Url,
		file: UploadFile,
		form: Vec<(String, String)>,
	) -> HttpFuture<'a, ApiResponse> {
		Box::pin(async move {
			let mut part = Part::bytes(file.bytes).file_name(file.file_name);

			if let Some(content_type) = file.content_type.as_deref() {
				part = part.mime_str(content_type)?;
			}

			let form = form
				.into_iter()
				.fold(Form::new().part(UPLOAD_FIELD, part), |form, (name, value)| form.text(name, value));

			self.execute(self.0.post(url).multipart(form)).await
		})
	}
}

#[cfg(feature = "reqwest")]
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(secs as i64));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
