//! Application messages and task cards.

// crates.io
use serde_json::{Value, json};
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(MessageApi, qy_message, "Application message endpoints.");

/// Which day [`MessageApi::statistics`] reports on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatisticsDay {
	/// Today.
	#[default]
	Today,
	/// Yesterday.
	Yesterday,
}
impl StatisticsDay {
	const fn time_type(self) -> u8 {
		match self {
			Self::Today => 0,
			Self::Yesterday => 1,
		}
	}
}

/// Task card state change applied by [`MessageApi::update_task_card`].
#[derive(Clone, Debug, Serialize)]
pub struct TaskCardUpdate {
	/// Recipients whose card changes, at most 1000.
	#[serde(rename = "userids")]
	pub user_ids: Vec<String>,
	/// Agent that sent the card.
	#[serde(rename = "agentid")]
	pub agent_id: String,
	/// Task id given when the card was sent.
	pub task_id: String,
	/// Button key to mark as selected.
	pub clicked_key: String,
}

impl<C> MessageApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Sends an application message; `payload` is any message document (`text`, `news`, ...).
	pub async fn send<B>(&self, payload: &B) -> Result<Value>
	where
		B: ?Sized + Serialize,
	{
		self.client.post_json(&endpoint::QY_MESSAGE_SEND, &[], payload).await
	}

	/// Fetches per-agent delivery statistics.
	pub async fn statistics(&self, day: StatisticsDay) -> Result<Value> {
		self.client
			.post_json(&endpoint::QY_MESSAGE_STATISTICS, &[], &json!({ "time_type": day.time_type() }))
			.await
	}

	/// Marks a task card button as clicked for the listed users.
	pub async fn update_task_card(&self, update: &TaskCardUpdate) -> Result<Value> {
		self.client.post_json(&endpoint::QY_MESSAGE_UPDATE_TASK_CARD, &[], update).await
	}
}
