//! Time-bounded credentials and their cache form.

// self
use crate::{
	_prelude::*,
	auth::{CredentialKind, CredentialSecret},
	error::ConfigError,
	store::StoreError,
};

/// Reasons a stored cache entry cannot be trusted.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CacheEntryError {
	/// Entry is not a JSON credential document.
	#[error("Cache entry is not a credential document: {message}.")]
	Parse {
		/// Decoder message.
		message: String,
	},
	/// Entry holds an empty value.
	#[error("Cache entry holds an empty credential value.")]
	EmptyValue,
	/// Entry expires at or before its issue instant.
	#[error("Cache entry expires before it was issued.")]
	InvertedLifetime,
	/// Entry belongs to a different credential kind.
	#[error("Cache entry holds a {found} credential, expected {expected}.")]
	KindMismatch {
		/// Kind implied by the scope key.
		expected: CredentialKind,
		/// Kind found in the entry.
		found: CredentialKind,
	},
}

/// Freshly issued credential as returned by a remote fetch.
#[derive(Clone)]
pub struct IssuedCredential {
	/// Opaque credential value.
	pub value: CredentialSecret,
	/// Lifetime granted at issuance.
	pub expires_in: Duration,
}
impl IssuedCredential {
	/// Wraps a value issued with the provided lifetime.
	pub fn new(value: impl Into<String>, expires_in: Duration) -> Self {
		Self { value: CredentialSecret::new(value), expires_in }
	}

	/// Wraps a value issued with an `expires_in` expressed in seconds.
	pub fn from_secs(value: impl Into<String>, expires_in: i64) -> Self {
		Self::new(value, Duration::seconds(expires_in))
	}
}
impl Debug for IssuedCredential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("IssuedCredential")
			.field("value", &"<redacted>")
			.field("expires_in", &self.expires_in)
			.finish()
	}
}

/// Access token or API ticket valid until `expires_at`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
	/// Kind of credential.
	pub kind: CredentialKind,
	/// Opaque credential value; callers must avoid logging it.
	pub value: CredentialSecret,
	/// Instant the credential was obtained.
	pub issued_at: OffsetDateTime,
	/// Instant after which the credential must not be used.
	pub expires_at: OffsetDateTime,
}
impl Credential {
	/// Stamps an issued credential at `now`.
	pub fn from_issued(
		kind: CredentialKind,
		issued: IssuedCredential,
		now: OffsetDateTime,
	) -> Result<Self, ConfigError> {
		if !issued.expires_in.is_positive() {
			return Err(ConfigError::NonPositiveExpiresIn);
		}

		let expires_at = now.checked_add(issued.expires_in).ok_or(ConfigError::ExpiresInOutOfRange)?;

		Ok(Self { kind, value: issued.value, issued_at: now, expires_at })
	}

	/// Returns `true` if the credential can still be handed out at `instant`, keeping `skew` of
	/// lifetime in reserve.
	pub fn is_valid_at(&self, instant: OffsetDateTime, skew: Duration) -> bool {
		match instant.checked_add(skew) {
			Some(deadline) => deadline < self.expires_at,
			None => false,
		}
	}

	/// Serializes the credential into its cache form.
	pub fn to_cache_entry(&self) -> Result<String, StoreError> {
		serde_json::to_string(self).map_err(|e| StoreError::Serialization {
			message: format!("Failed to serialize {} credential: {e}", self.kind),
		})
	}

	/// Decodes and shape-checks a cache entry written by [`Credential::to_cache_entry`].
	pub fn from_cache_entry(raw: &str, expected: CredentialKind) -> Result<Self, CacheEntryError> {
		let credential: Self = serde_json::from_str(raw)
			.map_err(|e| CacheEntryError::Parse { message: e.to_string() })?;

		if credential.kind != expected {
			return Err(CacheEntryError::KindMismatch { expected, found: credential.kind });
		}
		if credential.value.is_empty() {
			return Err(CacheEntryError::EmptyValue);
		}
		if credential.expires_at <= credential.issued_at {
			return Err(CacheEntryError::InvertedLifetime);
		}

		Ok(credential)
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credential")
			.field("kind", &self.kind)
			.field("value", &"<redacted>")
			.field("issued_at", &self.issued_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}
