//! Agent (application) management and agent menus.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(AgentApi, qy_agent, "Agent management endpoints.");

/// Settings accepted by [`AgentApi::set`]; unset fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AgentSettings {
	/// Agent id.
	#[serde(rename = "agentid")]
	pub agent_id: String,
	/// Display name, at most 32 UTF-8 characters.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Description, 4 to 120 UTF-8 characters.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Trusted redirect domain.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub redirect_domain: Option<String>,
	/// Whether user-enter events are reported (`0` or `1`).
	#[serde(rename = "isreportenter", skip_serializing_if = "Option::is_none")]
	pub report_enter: Option<u8>,
	/// Whether location is reported on session entry (`0` or `1`).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub report_location_flag: Option<u8>,
	/// Media id of the agent avatar.
	#[serde(rename = "logo_mediaid", skip_serializing_if = "Option::is_none")]
	pub logo_media_id: Option<String>,
	/// Home page URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub home_url: Option<String>,
}
impl AgentSettings {
	/// Starts an update for `agent_id` with every field unchanged.
	pub fn new(agent_id: impl Into<String>) -> Self {
		Self { agent_id: agent_id.into(), ..Default::default() }
	}
}

impl<C> AgentApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches an agent's details.
	pub async fn get(&self, agent_id: &str) -> Result<Value> {
		self.client.get_json(&endpoint::QY_AGENT_GET, &[agent_id]).await
	}

	/// Lists the agents visible to the access token.
	pub async fn list(&self) -> Result<Value> {
		self.client.get_json(&endpoint::QY_AGENT_LIST, &[]).await
	}

	/// Updates agent settings.
	pub async fn set(&self, settings: &AgentSettings) -> Result<Value> {
		self.client.post_json(&endpoint::QY_AGENT_SET, &[], settings).await
	}

	/// Replaces the agent menu with `menu` (a `{"button": [...]}` document).
	pub async fn create_menu<B>(&self, agent_id: &str, menu: &B) -> Result<Value>
	where
		B: ?Sized + Serialize,
	{
		self.client.post_json(&endpoint::QY_MENU_CREATE, &[agent_id], menu).await
	}

	/// Fetches the agent menu.
	pub async fn get_menu(&self, agent_id: &str) -> Result<Value> {
		self.client.get_json(&endpoint::QY_MENU_GET, &[agent_id]).await
	}

	/// Removes the agent menu.
	pub async fn delete_menu(&self, agent_id: &str) -> Result<Value> {
		self.client.get_json(&endpoint::QY_MENU_DELETE, &[agent_id]).await
	}
}
