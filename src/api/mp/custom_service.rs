//! Customer-service accounts and customer-service messages.

// crates.io
use serde_json::{Value, json};
// self
use crate::{
	_prelude::*,
	api::endpoint,
	error::ConfigError,
	http::{ApiHttpClient, UploadFile},
};

def_api!(CustomServiceApi, mp_custom_service, "Customer-service endpoints.");

/// Article in a `news` message.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewsArticle {
	/// Title.
	pub title: String,
	/// Summary.
	pub description: String,
	/// Link opened on tap.
	pub url: String,
	/// Cover image URL.
	#[serde(rename = "picurl")]
	pub pic_url: String,
}

/// Music message body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Music {
	/// Title.
	pub title: String,
	/// Description.
	pub description: String,
	/// Standard-quality stream URL.
	#[serde(rename = "musicurl")]
	pub music_url: String,
	/// High-quality stream URL, used on Wi-Fi.
	#[serde(rename = "hqmusicurl")]
	pub hq_music_url: String,
	/// Thumbnail media id.
	pub thumb_media_id: String,
}

/// Option in a `msgmenu` message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MenuOption {
	/// Option id echoed back when tapped.
	pub id: String,
	/// Option label.
	pub content: String,
}

/// Mini program card body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MiniProgramPage {
	/// Card title.
	pub title: String,
	/// Mini program app id; it must be linked to the account.
	#[serde(rename = "appid")]
	pub app_id: String,
	/// Page path inside the mini program.
	#[serde(rename = "pagepath")]
	pub page_path: String,
	/// Card image media id (520x416 recommended).
	pub thumb_media_id: String,
}

/// Typing indicator command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypingCommand {
	/// Show "typing".
	Typing,
	/// Hide "typing".
	CancelTyping,
}

impl<C> CustomServiceApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a customer-service account.
	pub async fn add_account(&self, kf_account: &str, nickname: &str, password: &str) -> Result<Value> {
		let body = json!({ "kf_account": kf_account, "nickname": nickname, "password": password });

		self.client.post_json(&endpoint::MP_KF_ACCOUNT_ADD, &[], &body).await
	}

	/// Updates a customer-service account.
	pub async fn update_account(
		&self,
		kf_account: &str,
		nickname: &str,
		password: &str,
	) -> Result<Value> {
		let body = json!({ "kf_account": kf_account, "nickname": nickname, "password": password });

		self.client.post_json(&endpoint::MP_KF_ACCOUNT_UPDATE, &[], &body).await
	}

	/// Deletes a customer-service account.
	pub async fn delete_account(&self, kf_account: &str) -> Result<Value> {
		self.client.get_json(&endpoint::MP_KF_ACCOUNT_DELETE, &[kf_account]).await
	}

	/// Uploads a customer-service avatar.
	pub async fn upload_head_image(&self, kf_account: &str, file: UploadFile) -> Result<Value> {
		self.client
			.upload(&endpoint::MP_KF_ACCOUNT_UPLOAD_HEAD_IMAGE, &[kf_account], file, Vec::new())
			.await
	}

	/// Lists customer-service accounts.
	pub async fn list(&self) -> Result<Value> {
		self.client.get_json(&endpoint::MP_KF_LIST, &[]).await
	}

	/// Lists customer-service accounts currently online.
	pub async fn online_list(&self) -> Result<Value> {
		self.client.get_json(&endpoint::MP_KF_ONLINE_LIST, &[]).await
	}

	/// Invites a WeChat user to operate a customer-service account.
	pub async fn invite_worker(&self, kf_account: &str, invite_wx: &str) -> Result<Value> {
		let body = json!({ "kf_account": kf_account, "invite_wx": invite_wx });

		self.client.post_json(&endpoint::MP_KF_ACCOUNT_INVITE_WORKER, &[], &body).await
	}

	/// Sends a customer-service message, optionally as a specific account.
	///
	/// `payload` must serialize to a JSON object (`touser`, `msgtype`, and the body).
	pub async fn send<B>(&self, payload: &B, kf_account: Option<&str>) -> Result<Value>
	where
		B: ?Sized + Serialize,
	{
		let body = with_kf_account(payload, kf_account)?;

		self.client.post_json(&endpoint::MP_CUSTOM_MESSAGE_SEND, &[], &body).await
	}

	/// Sends a text message.
	pub async fn send_text(&self, open_id: &str, text: &str, kf_account: Option<&str>) -> Result<Value> {
		self.send_typed(open_id, "text", json!({ "content": text }), kf_account).await
	}

	/// Sends an image message.
	pub async fn send_image(
		&self,
		open_id: &str,
		media_id: &str,
		kf_account: Option<&str>,
	) -> Result<Value> {
		self.send_typed(open_id, "image", json!({ "media_id": media_id }), kf_account).await
	}

	/// Sends a voice message.
	pub async fn send_voice(
		&self,
		open_id: &str,
		media_id: &str,
		kf_account: Option<&str>,
	) -> Result<Value> {
		self.send_typed(open_id, "voice", json!({ "media_id": media_id }), kf_account).await
	}

	/// Sends a video message.
	pub async fn send_video(
		&self,
		open_id: &str,
		media_id: &str,
		title: &str,
		description: &str,
		kf_account: Option<&str>,
	) -> Result<Value> {
		let video = json!({ "media_id": media_id, "title": title, "description": description });

		self.send_typed(open_id, "video", video, kf_account).await
	}

	/// Sends a music message.
	pub async fn send_music(
		&self,
		open_id: &str,
		music: &Music,
		kf_account: Option<&str>,
	) -> Result<Value> {
		self.send_typed(open_id, "music", json!(music), kf_account).await
	}

	/// Sends an external-link news message (one article).
	pub async fn send_news(
		&self,
		open_id: &str,
		articles: &[NewsArticle],
		kf_account: Option<&str>,
	) -> Result<Value> {
		self.send_typed(open_id, "news", json!({ "articles": articles }), kf_account).await
	}

	/// Sends a news message stored on the platform.
	pub async fn send_mp_news(
		&self,
		open_id: &str,
		media_id: &str,
		kf_account: Option<&str>,
	) -> Result<Value> {
		self.send_typed(open_id, "mpnews", json!({ "media_id": media_id }), kf_account).await
	}

	/// Sends a menu message whose options the user can tap.
	pub async fn send_menu(
		&self,
		open_id: &str,
		head_content: &str,
		options: &[MenuOption],
		tail_content: &str,
		kf_account: Option<&str>,
	) -> Result<Value> {
		let menu =
			json!({ "head_content": head_content, "list": options, "tail_content": tail_content });

		self.send_typed(open_id, "msgmenu", menu, kf_account).await
	}

	/// Sends a card (coupon) message.
	pub async fn send_card(
		&self,
		open_id: &str,
		card_id: &str,
		kf_account: Option<&str>,
	) -> Result<Value> {
		self.send_typed(open_id, "wxcard", json!({ "card_id": card_id }), kf_account).await
	}

	/// Sends a mini program card.
	pub async fn send_mini_program_page(
		&self,
		open_id: &str,
		page: &MiniProgramPage,
		kf_account: Option<&str>,
	) -> Result<Value> {
		self.send_typed(open_id, "miniprogrampage", json!(page), kf_account).await
	}

	/// Shows or hides the typing indicator.
	pub async fn typing(&self, open_id: &str, command: TypingCommand) -> Result<Value> {
		self.client
			.post_json(
				&endpoint::MP_CUSTOM_TYPING,
				&[],
				&json!({ "touser": open_id, "command": command }),
			)
			.await
	}

	async fn send_typed(
		&self,
		open_id: &str,
		msg_type: &str,
		content: Value,
		kf_account: Option<&str>,
	) -> Result<Value> {
		let mut payload = serde_json::Map::new();

		payload.insert("touser".into(), open_id.into());
		payload.insert("msgtype".into(), msg_type.into());
		payload.insert(msg_type.into(), content);

		self.send(&payload, kf_account).await
	}
}

fn with_kf_account<B>(payload: &B, kf_account: Option<&str>) -> Result<Value, ConfigError>
where
	B: ?Sized + Serialize,
{
	let mut body = serde_json::to_value(payload).map_err(ConfigError::RequestBody)?;

	if let (Some(kf_account), Some(object)) = (kf_account, body.as_object_mut()) {
		object.insert("customservice".into(), json!({ "kf_account": kf_account }));
	}

	Ok(body)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn kf_account_is_attached_when_present() {
		let payload = json!({ "touser": "o-1", "msgtype": "text", "text": { "content": "hi" } });
		let plain = with_kf_account(&payload, None).expect("Payload should serialize.");

		assert_eq!(plain, payload);

		let tagged =
			with_kf_account(&payload, Some("kf2001@gh_test")).expect("Payload should serialize.");

		assert_eq!(tagged["customservice"]["kf_account"], "kf2001@gh_test");
		assert_eq!(tagged["text"]["content"], "hi");
	}

	#[test]
	fn typing_commands_use_platform_spelling() {
		assert_eq!(json!(TypingCommand::CancelTyping), json!("CancelTyping"));
	}
}
