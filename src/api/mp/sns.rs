//! Web page authorization (`snsapi_*`) for official accounts.
//!
//! These calls run on behalf of an end user and never touch the application access token.
//! User tokens are returned to the caller as-is and are not cached.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(SnsApi, mp_sns, "Web page authorization endpoints.");

const REDIRECT_FRAGMENT: &str = "wechat_redirect";

/// Authorization scope requested from the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnsScope {
	/// Silent authorization, yields the `openid` only.
	#[default]
	#[serde(rename = "snsapi_base")]
	Base,
	/// Explicit consent, also unlocks [`SnsApi::user_info`].
	#[serde(rename = "snsapi_userinfo")]
	UserInfo,
}
impl SnsScope {
	/// Returns the `scope` query value.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Base => "snsapi_base",
			Self::UserInfo => "snsapi_userinfo",
		}
	}
}

/// Language of localized profile fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
	/// Simplified Chinese.
	#[default]
	#[serde(rename = "zh_CN")]
	ZhCn,
	/// Traditional Chinese.
	#[serde(rename = "zh_TW")]
	ZhTw,
	/// English.
	#[serde(rename = "en")]
	En,
}
impl Lang {
	/// Returns the `lang` query value.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::ZhCn => "zh_CN",
			Self::ZhTw => "zh_TW",
			Self::En => "en",
		}
	}
}

impl<C> SnsApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Builds the authorization page URL users are redirected to.
	pub fn authorize_url(
		&self,
		redirect_uri: &str,
		scope: SnsScope,
		state: Option<&str>,
	) -> Result<Url> {
		let config = &self.client.config;
		let mut url = self.client.render(
			&endpoint::MP_SNS_AUTHORIZE,
			&[config.app_id.as_ref(), redirect_uri, scope.as_str()],
		)?;

		if let Some(state) = state {
			url.query_pairs_mut().append_pair("state", state);
		}

		url.set_fragment(Some(REDIRECT_FRAGMENT));

		Ok(url)
	}

	/// Exchanges an authorization `code` for a user access token.
	pub async fn access_token(&self, code: &str) -> Result<Value> {
		let config = &self.client.config;

		self.client
			.get_json_without_token(
				&endpoint::MP_SNS_ACCESS_TOKEN,
				&[config.app_id.as_ref(), config.secret.expose(), code],
			)
			.await
	}

	/// Refreshes a user access token.
	pub async fn refresh(&self, refresh_token: &str) -> Result<Value> {
		self.client
			.get_json_without_token(
				&endpoint::MP_SNS_REFRESH_TOKEN,
				&[self.client.config.app_id.as_ref(), refresh_token],
			)
			.await
	}

	/// Checks whether a user access token is still valid.
	pub async fn check(&self, access_token: &str, open_id: &str) -> Result<Value> {
		self.client.get_json_without_token(&endpoint::MP_SNS_CHECK, &[access_token, open_id]).await
	}

	/// Fetches the user's profile; requires [`SnsScope::UserInfo`].
	pub async fn user_info(&self, access_token: &str, open_id: &str, lang: Lang) -> Result<Value> {
		self.client
			.get_json_without_token(&endpoint::MP_SNS_USER_INFO, &[access_token, open_id, lang.as_str()])
			.await
	}
}
