mod common;

// std
use std::{fs, path::PathBuf, sync::Arc, time::SystemTime};
// crates.io
use httpmock::prelude::*;
// self
use common::*;
use wxkit::{config::Platform, store::FileStore};

fn scratch_path(label: &str) -> PathBuf {
	let nanos = SystemTime::now()
		.duration_since(SystemTime::UNIX_EPOCH)
		.expect("Clock should be after the epoch.")
		.as_nanos();

	std::env::temp_dir().join(format!("wxkit-{label}-{}-{nanos}", std::process::id())).join("cache.json")
}

#[tokio::test]
async fn file_store_shares_tokens_across_clients() {
	let server = MockServer::start_async().await;
	let path = scratch_path("share");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/cgi-bin/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"persisted\",\"expires_in\":7200}");
		})
		.await;

	{
		let store = Arc::new(FileStore::open(&path).expect("File store should open."));
		let client = build_client_with_store(Platform::OfficialAccount, &server.base_url(), store);
		let token = client.access_token().await.expect("Token call should succeed.");

		assert_eq!(token.value.expose(), "persisted");
	}

	let reopened = Arc::new(FileStore::open(&path).expect("File store should reopen."));
	let client = build_client_with_store(Platform::OfficialAccount, &server.base_url(), reopened);
	let token = client.access_token().await.expect("Reloaded token should be served.");

	assert_eq!(token.value.expose(), "persisted");

	mock.assert_calls_async(1).await;

	let snapshot = fs::read_to_string(&path).expect("Snapshot should exist.");

	assert!(snapshot.contains("wx-app:wx-app:access_token"));

	if let Some(dir) = path.parent() {
		let _ = fs::remove_dir_all(dir);
	}
}

#[tokio::test]
async fn corrupted_snapshot_is_rejected_on_open() {
	let path = scratch_path("corrupt");

	fs::create_dir_all(path.parent().expect("Scratch path should have a parent."))
		.expect("Scratch directory should be created.");
	fs::write(&path, "not json").expect("Fixture should be written.");

	assert!(FileStore::open(&path).is_err());

	if let Some(dir) = path.parent() {
		let _ = fs::remove_dir_all(dir);
	}
}
