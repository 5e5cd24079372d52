//! API client that ties configuration, the credential cache, and the HTTP collaborator together.
//!
//! [`Client::access_token`] and [`Client::js_ticket`] are the two credential providers. Both
//! run through [`CredentialCache::acquire`], so repeated calls reuse the cached value until it
//! expires. The generic helpers ([`Client::get_json`], [`Client::post_json`],
//! [`Client::get_bytes`], [`Client::upload`]) render an [`Endpoint`] with the access token as
//! its first argument and decode the platform's `errcode` envelope.

// crates.io
use serde::de::DeserializeOwned;
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	api::{Endpoint, Method, endpoint},
	auth::{Credential, CredentialKind, IssuedCredential},
	cache::CredentialCache,
	config::{ApiConfig, Platform},
	error::{ApiError, ConfigError, TransientError},
	http::{ApiHttpClient, ApiResponse, UploadFile},
};
#[cfg(feature = "reqwest")]
use crate::{http::ReqwestHttpClient, store::CacheStore};

const BODY_SNIPPET_LEN: usize = 256;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestHttpClient>;

/// JS-SDK ticket flavors issued by WeCom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsApiTicketType {
	/// Corp-level ticket used by `wx.config`.
	Corp,
	/// Agent-level ticket used by `wx.agentConfig`.
	Agent,
}
impl JsApiTicketType {
	/// Credential kind the ticket is cached under.
	pub const fn kind(self) -> CredentialKind {
		match self {
			Self::Corp => CredentialKind::CorpJsApiTicket,
			Self::Agent => CredentialKind::AgentJsApiTicket,
		}
	}

	/// Endpoint issuing the ticket.
	pub const fn endpoint(self) -> &'static Endpoint {
		match self {
			Self::Corp => &endpoint::QY_CORP_JSAPI_TICKET,
			Self::Agent => &endpoint::QY_AGENT_JSAPI_TICKET,
		}
	}
}

#[derive(Deserialize)]
struct AccessTokenResponse {
	access_token: String,
	expires_in: i64,
}

#[derive(Deserialize)]
struct TicketResponse {
	ticket: String,
	expires_in: i64,
}

/// Calls the platform on behalf of a single application.
///
/// The client owns the HTTP transport, the credential cache, and the application
/// configuration. Clones share the transport and the cache store, so one client per
/// application can be handed to every task that needs it.
#[derive(Clone)]
pub struct Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP client used for every outbound request.
	pub http_client: Arc<C>,
	/// Application credentials and host routing.
	pub config: ApiConfig,
	/// Cache holding access tokens and JS-SDK tickets.
	pub cache: CredentialCache,
}
impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client over a caller-provided transport.
	pub fn with_http_client(
		config: ApiConfig,
		cache: CredentialCache,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), config, cache }
	}

	/// Returns a valid access token, fetching a new one only when the cached one is stale.
	pub async fn access_token(&self) -> Result<Credential> {
		let key = self.config.scope_key(CredentialKind::AccessToken);

		self.cache.acquire(&key, || self.fetch_access_token()).await
	}

	/// Returns a valid WeCom JS-SDK ticket of the requested flavor.
	pub async fn js_ticket(&self, ticket: JsApiTicketType) -> Result<Credential> {
		self.ensure_platform(ticket.endpoint())?;

		let key = self.config.scope_key(ticket.kind());

		self.cache.acquire(&key, || self.fetch_ticket(ticket)).await
	}

	/// Renders an endpoint after checking it belongs to the configured platform.
	pub fn render(&self, endpoint: &Endpoint, args: &[&str]) -> Result<Url> {
		self.ensure_platform(endpoint)?;

		endpoint.render(&self.config.hosts, args)
	}

	/// Calls a `GET` endpoint with the access token prepended to `args`.
	pub async fn get_json(&self, endpoint: &Endpoint, args: &[&str]) -> Result<Value> {
		ensure_method(endpoint, Method::Get, "get_json")?;

		let url = self.render_with_token(endpoint, args).await?;
		let response = self.http_client.get(url).await?;

		decode(response)
	}

	/// Calls a `GET` endpoint that does not take an access token.
	pub async fn get_json_without_token(&self, endpoint: &Endpoint, args: &[&str]) -> Result<Value> {
		ensure_method(endpoint, Method::Get, "get_json_without_token")?;

		let url = self.render(endpoint, args)?;
		let response = self.http_client.get(url).await?;

		decode(response)
	}

	/// Calls a `POST` endpoint with `body` serialized as JSON.
	pub async fn post_json<B>(&self, endpoint: &Endpoint, args: &[&str], body: &B) -> Result<Value>
	where
		B: ?Sized + Serialize,
	{
		ensure_method(endpoint, Method::Post, "post_json")?;

		let body = serde_json::to_string(body).map_err(ConfigError::RequestBody)?;
		let url = self.render_with_token(endpoint, args).await?;
		let response = self.http_client.post_json(url, body).await?;

		decode(response)
	}

	/// Downloads a binary resource.
	///
	/// The body is returned unchanged unless it is a JSON object carrying a non-zero `errcode`,
	/// whatever the declared content type.
	pub async fn get_bytes(&self, endpoint: &Endpoint, args: &[&str]) -> Result<Vec<u8>> {
		ensure_method(endpoint, Method::Get, "get_bytes")?;

		let url = self.render_with_token(endpoint, args).await?;
		let response = self.http_client.get(url).await?;

		ensure_success(&response)?;

		if let Some(error) = error_envelope(&response.body) {
			#[cfg(feature = "tracing")]
			tracing::debug!(code = error.code, kind = ?error.kind, "Download returned an error code.");

			return Err(error.into());
		}

		Ok(response.body)
	}

	/// Uploads a file to a multipart endpoint, adding `form` as extra text fields.
	pub async fn upload(
		&self,
		endpoint: &Endpoint,
		args: &[&str],
		file: UploadFile,
		form: Vec<(String, String)>,
	) -> Result<Value> {
		ensure_method(endpoint, Method::Upload, "upload")?;

		let url = self.render_with_token(endpoint, args).await?;
		let response = self.http_client.upload(url, file, form).await?;

		decode(response)
	}

	async fn render_with_token(&self, endpoint: &Endpoint, args: &[&str]) -> Result<Url> {
		self.ensure_platform(endpoint)?;

		let token = self.access_token().await?;
		let mut full = Vec::with_capacity(args.len() + 1);

		full.push(token.value.expose());
		full.extend_from_slice(args);

		endpoint.render(&self.config.hosts, &full)
	}

	async fn fetch_access_token(&self) -> Result<IssuedCredential> {
		let (endpoint, principal) = match self.config.platform {
			Platform::Work => (&endpoint::QY_GET_TOKEN, self.config.tenant.as_ref()),
			Platform::OfficialAccount => (&endpoint::MP_GET_TOKEN, self.config.app_id.as_ref()),
		};
		let url = endpoint.render(&self.config.hosts, &[principal, self.config.secret.expose()])?;
		let response = self.http_client.get(url).await?;
		let body: AccessTokenResponse = decode(response)?;

		Ok(IssuedCredential::from_secs(body.access_token, body.expires_in))
	}

	async fn fetch_ticket(&self, ticket: JsApiTicketType) -> Result<IssuedCredential> {
		let url = self.render_with_token(ticket.endpoint(), &[]).await?;
		let response = self.http_client.get(url).await?;
		let body: TicketResponse = decode(response)?;

		Ok(IssuedCredential::from_secs(body.ticket, body.expires_in))
	}

	fn ensure_platform(&self, endpoint: &Endpoint) -> Result<(), ConfigError> {
		let expected = endpoint.host.platform();

		if expected == self.config.platform {
			Ok(())
		} else {
			Err(ConfigError::PlatformMismatch { endpoint: endpoint.name, expected })
		}
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client with its own reqwest transport and a cache over `store`.
	pub fn new(config: ApiConfig, store: Arc<dyn CacheStore>) -> Self {
		Self::with_http_client(config, CredentialCache::new(store), ReqwestHttpClient::default())
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("app_id", &self.config.app_id)
			.field("tenant", &self.config.tenant)
			.field("platform", &self.config.platform)
			.field("cache", &self.cache)
			.finish()
	}
}

fn ensure_method(
	endpoint: &Endpoint,
	expected: Method,
	helper: &'static str,
) -> Result<(), ConfigError> {
	if endpoint.method == expected {
		Ok(())
	} else {
		Err(ConfigError::UnsupportedMethod { endpoint: endpoint.name, helper })
	}
}

fn ensure_success(response: &ApiResponse) -> Result<(), TransientError> {
	if response.is_success() {
		return Ok(());
	}

	let status = response.metadata.status;
	let snippet = String::from_utf8_lossy(&response.body);
	let snippet = snippet.chars().take(BODY_SNIPPET_LEN).collect::<String>();

	Err(TransientError::Endpoint {
		message: format!("HTTP {} {}", status.unwrap_or_default(), snippet.trim()),
		status,
		retry_after: response.metadata.retry_after,
	})
}

/// Decodes a response through status check, JSON parse, `errcode` check, and typed mapping.
fn decode<T>(response: ApiResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	ensure_success(&response)?;

	let status = response.metadata.status;
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
	let value: Value = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| TransientError::ResponseParse { source, status })?;

	if let Some(error) = api_error(&value) {
		#[cfg(feature = "tracing")]
		tracing::debug!(code = error.code, kind = ?error.kind, "Platform returned an error code.");

		return Err(error.into());
	}

	serde_path_to_error::deserialize(value)
		.map_err(|source| TransientError::ResponseParse { source, status }.into())
}

fn error_envelope(body: &[u8]) -> Option<ApiError> {
	let value = serde_json::from_slice::<Value>(body).ok()?;

	api_error(&value)
}

fn api_error(value: &Value) -> Option<ApiError> {
	let code = value.get("errcode")?.as_i64()?;

	if code == 0 {
		return None;
	}

	let message = value.get("errmsg").and_then(Value::as_str).unwrap_or_default();

	Some(ApiError::new(code, message))
}
