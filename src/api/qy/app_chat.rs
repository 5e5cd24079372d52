//! Group chats created by an application, plus linked-corp messages.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(AppChatApi, qy_app_chat, "Group chat endpoints.");

/// Group chat to create.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewAppChat {
	/// Members, between 2 and 500.
	#[serde(rename = "userlist")]
	pub user_list: Vec<String>,
	/// Owner; picked at random from the members when unset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub owner: Option<String>,
	/// Chat name, truncated past 50 UTF-8 characters.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Chat id (`[0-9a-zA-Z]{1,32}`); generated when unset.
	#[serde(rename = "chatid", skip_serializing_if = "Option::is_none")]
	pub chat_id: Option<String>,
}

/// Changes applied by [`AppChatApi::update`].
#[derive(Clone, Debug, Default, Serialize)]
pub struct AppChatUpdate {
	/// Chat id.
	#[serde(rename = "chatid")]
	pub chat_id: String,
	/// New chat name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// New owner.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub owner: Option<String>,
	/// Members to add.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub add_user_list: Vec<String>,
	/// Members to remove.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub del_user_list: Vec<String>,
}

impl<C> AppChatApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a group chat.
	pub async fn create(&self, chat: &NewAppChat) -> Result<Value> {
		self.client.post_json(&endpoint::QY_APPCHAT_CREATE, &[], chat).await
	}

	/// Updates a group chat.
	pub async fn update(&self, update: &AppChatUpdate) -> Result<Value> {
		self.client.post_json(&endpoint::QY_APPCHAT_UPDATE, &[], update).await
	}

	/// Fetches a group chat.
	pub async fn get(&self, chat_id: &str) -> Result<Value> {
		self.client.get_json(&endpoint::QY_APPCHAT_GET, &[chat_id]).await
	}

	/// Sends a message into a group chat; `payload` must name its `chatid`.
	pub async fn send<B>(&self, payload: &B) -> Result<Value>
	where
		B: ?Sized + Serialize,
	{
		self.client.post_json(&endpoint::QY_APPCHAT_SEND, &[], payload).await
	}

	/// Sends a message to users of linked corps.
	pub async fn send_linked_corp<B>(&self, payload: &B) -> Result<Value>
	where
		B: ?Sized + Serialize,
	{
		self.client.post_json(&endpoint::QY_LINKEDCORP_MESSAGE_SEND, &[], payload).await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn update_omits_empty_member_lists() {
		let update = AppChatUpdate {
			chat_id: "ops".into(),
			add_user_list: vec!["zhangsan".into()],
			..Default::default()
		};

		assert_eq!(
			serde_json::to_value(&update).expect("Update should serialize."),
			serde_json::json!({ "chatid": "ops", "add_user_list": ["zhangsan"] })
		);
	}
}
