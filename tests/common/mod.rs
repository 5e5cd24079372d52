//! Shared fixtures for the reqwest-backed integration tests.

#![allow(dead_code)]

// std
use std::sync::Arc;
// self
use wxkit::{
	auth::{AppId, TenantId},
	cache::CredentialCache,
	client::Client,
	config::{ApiConfig, ApiHosts, Platform},
	http::ReqwestHttpClient,
	store::{CacheStore, MemoryStore},
};

/// Application id used by official-account test clients.
pub const MP_APP_ID: &str = "wx-app";
/// Agent id used by WeCom test clients.
pub const QY_AGENT_ID: &str = "1000002";
/// Corp id used by WeCom test clients.
pub const QY_CORP_ID: &str = "ww-corp";
/// Secret shared by every test client.
pub const SECRET: &str = "s3cr3t";

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = wxkit::reqwest::Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

/// Builds the test configuration of `platform` with every host pointed at `base_url`.
pub fn test_config(platform: Platform, base_url: &str) -> ApiConfig {
	let builder = match platform {
		Platform::Work => ApiConfig::builder(
			platform,
			AppId::new(QY_AGENT_ID).expect("Agent id fixture should be valid."),
		)
		.tenant(TenantId::new(QY_CORP_ID).expect("Corp id fixture should be valid.")),
		Platform::OfficialAccount => ApiConfig::builder(
			platform,
			AppId::new(MP_APP_ID).expect("App id fixture should be valid."),
		),
	};

	builder
		.secret(SECRET)
		.hosts(ApiHosts::with_base(base_url))
		.build()
		.expect("Test configuration should be valid.")
}

/// Constructs a [`Client`] over `store` using the test transport.
pub fn build_client_with_store(
	platform: Platform,
	base_url: &str,
	store: Arc<dyn CacheStore>,
) -> Client<ReqwestHttpClient> {
	Client::with_http_client(
		test_config(platform, base_url),
		CredentialCache::new(store),
		test_reqwest_http_client(),
	)
}

/// Constructs a [`Client`] backed by an in-memory store.
pub fn build_reqwest_test_client(
	platform: Platform,
	base_url: &str,
) -> (Client<ReqwestHttpClient>, Arc<MemoryStore>) {
	let store = Arc::new(MemoryStore::default());
	let client = build_client_with_store(platform, base_url, store.clone());

	(client, store)
}
