//! Credential kinds and the composite scope key that selects a cache slot.

// self
use crate::{
	_prelude::*,
	auth::{AppId, TenantId},
};

/// Delimiter joining scope key components; identifiers may not contain it.
pub const SCOPE_KEY_DELIMITER: char = ':';

/// Kinds of time-bounded credentials issued by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKind {
	/// API access token.
	AccessToken,
	/// WeCom corp-level JS-SDK ticket.
	CorpJsApiTicket,
	/// WeCom agent-level (`agent_config`) JS-SDK ticket.
	AgentJsApiTicket,
}
impl CredentialKind {
	/// Returns a stable label used in cache keys, spans, and metric labels.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::AccessToken => "access_token",
			Self::CorpJsApiTicket => "corp_jsapi",
			Self::AgentJsApiTicket => "agent_config",
		}
	}
}
impl Display for CredentialKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Composite `(application, tenant, kind)` identity of a cached credential.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeKey {
	/// Application component.
	pub application: AppId,
	/// Tenant component.
	pub tenant: TenantId,
	/// Credential kind discriminator.
	pub kind: CredentialKind,
}
impl ScopeKey {
	/// Creates a key for the provided components.
	pub fn new(application: AppId, tenant: TenantId, kind: CredentialKind) -> Self {
		Self { application, tenant, kind }
	}

	/// Renders the store key as `application:tenant:kind`.
	pub fn cache_key(&self) -> String {
		format!(
			"{}{SCOPE_KEY_DELIMITER}{}{SCOPE_KEY_DELIMITER}{}",
			self.application,
			self.tenant,
			self.kind.as_str()
		)
	}
}
impl Display for ScopeKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.cache_key())
	}
}
