//! Crate-level error types shared by the credential cache, stores, and API wrappers.

// self
use crate::{_prelude::*, config::Platform};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Temporary upstream failure; retry with backoff.
	#[error(transparent)]
	Transient(#[from] TransientError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The platform answered with a non-zero `errcode`.
	#[error(transparent)]
	Api(#[from] ApiError),
}
impl Error {
	/// Returns the platform error code when the failure came from an `errcode` payload.
	pub fn api_code(&self) -> Option<i64> {
		match self {
			Self::Api(e) => Some(e.code),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised locally.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// API configuration failed validation.
	#[error(transparent)]
	InvalidConfig(#[from] crate::config::ApiConfigError),
	/// Identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
	/// Rendered endpoint could not be parsed as a URL.
	#[error("Endpoint `{endpoint}` rendered an invalid URL.")]
	InvalidUrl {
		/// Endpoint name from the endpoint table.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoint template placeholders and supplied arguments disagree.
	#[error("Endpoint `{endpoint}` expects {expected} arguments but received {actual}.")]
	TemplateArity {
		/// Endpoint name from the endpoint table.
		endpoint: &'static str,
		/// Placeholder count in the template.
		expected: usize,
		/// Supplied argument count.
		actual: usize,
	},
	/// Endpoint belongs to a different platform than the configured one.
	#[error("Endpoint `{endpoint}` requires a {expected} configuration.")]
	PlatformMismatch {
		/// Endpoint name from the endpoint table.
		endpoint: &'static str,
		/// Platform the endpoint is served for.
		expected: Platform,
	},
	/// Endpoint cannot be dispatched through the requested helper.
	#[error("Endpoint `{endpoint}` cannot be called through `{helper}`.")]
	UnsupportedMethod {
		/// Endpoint name from the endpoint table.
		endpoint: &'static str,
		/// Client helper that was used.
		helper: &'static str,
	},
	/// Request body could not be serialized.
	#[error("Request body could not be serialized.")]
	RequestBody(#[source] serde_json::Error),
	/// Remote endpoint returned a non-positive lifetime.
	#[error("The expires_in value must be positive.")]
	NonPositiveExpiresIn,
	/// Remote endpoint returned an excessively large lifetime.
	#[error("The expires_in value exceeds the supported range.")]
	ExpiresInOutOfRange,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Temporary failure variants (safe to retry).
#[derive(Debug, ThisError)]
pub enum TransientError {
	/// Endpoint returned a non-success HTTP status.
	#[error("Endpoint returned an unexpected response: {message}.")]
	Endpoint {
		/// Summary of the failure.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Endpoint responded with malformed JSON that could not be parsed.
	#[error("Endpoint returned malformed JSON.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the platform.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the platform.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Coarse classification of platform `errcode` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
	/// App id, corp id, or secret was rejected.
	InvalidClient,
	/// Access token is missing, invalid, or expired.
	InvalidToken,
	/// Call frequency or quota limits were hit; also covers the generic busy code `-1`.
	RateLimited,
	/// Any other business error.
	Other,
}
impl ApiErrorKind {
	/// Maps a platform `errcode` onto a kind.
	pub fn classify(code: i64) -> Self {
		match code {
			40001 | 40013 | 40125 | 41002 | 41004 => Self::InvalidClient,
			40014 | 41001 | 42001 => Self::InvalidToken,
			-1 | 45009 | 45011 | 45033 => Self::RateLimited,
			_ => Self::Other,
		}
	}
}

/// Error payload (`errcode` + `errmsg`) returned by the platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Platform rejected the call with errcode {code}: {message}.")]
pub struct ApiError {
	/// Raw `errcode` value.
	pub code: i64,
	/// Raw `errmsg` value.
	pub message: String,
	/// Classification derived from `code`.
	pub kind: ApiErrorKind,
}
impl ApiError {
	/// Builds an error and classifies its code.
	pub fn new(code: i64, message: impl Into<String>) -> Self {
		Self { code, message: message.into(), kind: ApiErrorKind::classify(code) }
	}

	/// Returns `true` when retrying later may succeed.
	pub fn is_retryable(&self) -> bool {
		matches!(self.kind, ApiErrorKind::RateLimited)
	}
}
