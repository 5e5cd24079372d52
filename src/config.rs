//! Per-application API configuration and host overrides.

// self
use crate::{
	_prelude::*,
	auth::{AppId, CredentialKind, CredentialSecret, ScopeKey, TenantId},
};

/// Default WeCom API host.
pub const WORK_HOST: &str = "https://qyapi.weixin.qq.com";
/// Default official-account API host.
pub const OFFICIAL_HOST: &str = "https://api.weixin.qq.com";
/// Default host serving browser-facing authorization pages.
pub const OPEN_HOST: &str = "https://open.weixin.qq.com";

/// Errors raised while constructing or validating an [`ApiConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ApiConfigError {
	/// Application secret is required to fetch access tokens.
	#[error("Missing application secret.")]
	MissingSecret,
	/// WeCom configurations must name their corp id.
	#[error("WeCom configurations require a corp id tenant.")]
	MissingTenant,
	/// Host override is not a bare `http`/`https` origin.
	#[error("The {host} host must be an http(s) origin without path or query: {url}.")]
	InvalidHost {
		/// Which host failed validation.
		host: &'static str,
		/// Value that failed validation.
		url: String,
	},
}

/// Platform family an application belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
	/// WeCom (enterprise WeChat) application.
	Work,
	/// WeChat official account.
	OfficialAccount,
}
impl Platform {
	/// Returns a stable label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Work => "work",
			Self::OfficialAccount => "official_account",
		}
	}
}
impl Display for Platform {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Origins that endpoint templates are rendered against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHosts {
	/// WeCom API origin.
	pub work: String,
	/// Official-account API origin.
	pub official: String,
	/// Authorization page origin.
	pub open: String,
}
impl ApiHosts {
	/// Points every host at the same origin, e.g. a local mock server.
	pub fn with_base(base: impl Into<String>) -> Self {
		let base = base.into();

		Self { work: base.clone(), official: base.clone(), open: base }
	}

	/// Validates and normalizes every origin, dropping trailing slashes.
	pub fn validate(&mut self) -> Result<(), ApiConfigError> {
		self.work = normalize_host("work", &self.work)?;
		self.official = normalize_host("official", &self.official)?;
		self.open = normalize_host("open", &self.open)?;

		Ok(())
	}
}
impl Default for ApiHosts {
	fn default() -> Self {
		Self { work: WORK_HOST.into(), official: OFFICIAL_HOST.into(), open: OPEN_HOST.into() }
	}
}

/// Credentials and routing for a single application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
	/// Application identifier (`appid`, or the agent's own id on WeCom).
	pub app_id: AppId,
	/// Tenant identifier: the corp id on WeCom, the app id on official accounts.
	pub tenant: TenantId,
	/// Application secret (`corpsecret` or `secret`).
	pub secret: CredentialSecret,
	/// Platform the application belongs to.
	pub platform: Platform,
	/// Host origins; defaults to the production hosts.
	#[serde(default)]
	pub hosts: ApiHosts,
}
impl ApiConfig {
	/// Starts a builder for the provided platform and application.
	pub fn builder(platform: Platform, app_id: AppId) -> ApiConfigBuilder {
		ApiConfigBuilder::new(platform, app_id)
	}

	/// Builds the cache scope key of a credential kind for this application.
	pub fn scope_key(&self, kind: CredentialKind) -> ScopeKey {
		ScopeKey::new(self.app_id.clone(), self.tenant.clone(), kind)
	}

	/// Re-checks invariants, e.g. after deserialization.
	pub fn validate(&mut self) -> Result<(), ApiConfigError> {
		if self.secret.is_empty() {
			return Err(ApiConfigError::MissingSecret);
		}

		self.hosts.validate()
	}
}

/// Builder for [`ApiConfig`].
#[derive(Debug)]
pub struct ApiConfigBuilder {
	platform: Platform,
	app_id: AppId,
	tenant: Option<TenantId>,
	secret: Option<CredentialSecret>,
	hosts: ApiHosts,
}
impl ApiConfigBuilder {
	fn new(platform: Platform, app_id: AppId) -> Self {
		Self { platform, app_id, tenant: None, secret: None, hosts: ApiHosts::default() }
	}

	/// Sets the tenant (corp id on WeCom).
	pub fn tenant(mut self, tenant: TenantId) -> Self {
		self.tenant = Some(tenant);

		self
	}

	/// Sets the application secret.
	pub fn secret(mut self, secret: impl Into<String>) -> Self {
		self.secret = Some(CredentialSecret::new(secret));

		self
	}

	/// Overrides the host origins.
	pub fn hosts(mut self, hosts: ApiHosts) -> Self {
		self.hosts = hosts;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ApiConfig, ApiConfigError> {
		let secret = self.secret.ok_or(ApiConfigError::MissingSecret)?;
		let tenant = match (self.tenant, self.platform) {
			(Some(tenant), _) => tenant,
			(None, Platform::Work) => return Err(ApiConfigError::MissingTenant),
			(None, Platform::OfficialAccount) => TenantId::from(self.app_id.clone()),
		};
		let mut config =
			ApiConfig { app_id: self.app_id, tenant, secret, platform: self.platform, hosts: self.hosts };

		config.validate()?;

		Ok(config)
	}
}

fn normalize_host(host: &'static str, raw: &str) -> Result<String, ApiConfigError> {
	let invalid = || ApiConfigError::InvalidHost { host, url: raw.to_owned() };
	let url = Url::parse(raw).map_err(|_| invalid())?;

	if !matches!(url.scheme(), "http" | "https")
		|| url.path() != "/"
		|| url.query().is_some()
		|| url.fragment().is_some()
	{
		return Err(invalid());
	}

	Ok(url.as_str().trim_end_matches('/').to_owned())
}
