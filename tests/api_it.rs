mod common;

// crates.io
use httpmock::prelude::*;
// self
use common::*;
use wxkit::{
	api::mp::SnsScope,
	config::Platform,
	error::{ConfigError, Error},
	http::UploadFile,
	serde_json::json,
};

async fn mock_token<'a>(server: &'a MockServer, platform: Platform) -> httpmock::Mock<'a> {
	let path = match platform {
		Platform::Work => "/cgi-bin/gettoken",
		Platform::OfficialAccount => "/cgi-bin/token",
	};

	server
		.mock_async(|when, then| {
			when.method(GET).path(path);
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"tok\",\"expires_in\":7200}");
		})
		.await
}

#[tokio::test]
async fn agent_lookup_injects_token_and_arguments() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(Platform::Work, &server.base_url());
	let token = mock_token(&server, Platform::Work).await;
	let agent = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/cgi-bin/agent/get")
				.query_param("access_token", "tok")
				.query_param("agentid", QY_AGENT_ID);
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"errcode\":0,\"errmsg\":\"ok\",\"agentid\":1000002,\"name\":\"HR\"}");
		})
		.await;

	for _ in 0..2 {
		let value = client.qy_agent().get(QY_AGENT_ID).await.expect("Agent lookup should succeed.");

		assert_eq!(value["name"], "HR");
	}

	token.assert_calls_async(1).await;
	agent.assert_calls_async(2).await;
}

#[tokio::test]
async fn business_errors_are_returned_as_api_errors() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(Platform::Work, &server.base_url());
	let _token = mock_token(&server, Platform::Work).await;
	let _send = server
		.mock_async(|when, then| {
			when.method(POST).path("/cgi-bin/message/send");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"errcode\":81013,\"errmsg\":\"user & party & tag all invalid\"}");
		})
		.await;
	let err = client
		.qy_message()
		.send(&json!({ "touser": "nobody", "msgtype": "text", "agentid": 1000002 }))
		.await
		.expect_err("Invalid recipients must fail.");

	assert_eq!(err.api_code(), Some(81013));
}

#[tokio::test]
async fn custom_service_text_carries_kf_account() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(Platform::OfficialAccount, &server.base_url());
	let _token = mock_token(&server, Platform::OfficialAccount).await;
	let send = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/cgi-bin/message/custom/send")
				.query_param("access_token", "tok")
				.header("content-type", "application/json")
				.json_body(json!({
					"touser": "o-user",
					"msgtype": "text",
					"text": { "content": "hello" },
					"customservice": { "kf_account": "kf2001@gh_test" },
				}));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"errcode\":0,\"errmsg\":\"ok\"}");
		})
		.await;

	client
		.mp_custom_service()
		.send_text("o-user", "hello", Some("kf2001@gh_test"))
		.await
		.expect("Customer-service message should be accepted.");

	send.assert_calls_async(1).await;
}

#[tokio::test]
async fn shake_page_search_clamps_paging() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(Platform::OfficialAccount, &server.base_url());
	let _token = mock_token(&server, Platform::OfficialAccount).await;
	let search = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/shakearound/page/search")
				.json_body(json!({ "type": 2, "begin": 0, "count": 50 }));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"errcode\":0,\"errmsg\":\"success.\",\"data\":{\"pages\":[],\"total_count\":0}}");
		})
		.await;
	let value = client
		.mp_shake_page()
		.search(-5, 500)
		.await
		.expect("Page search should succeed.");

	assert_eq!(value["data"]["total_count"], 0);

	search.assert_calls_async(1).await;
}

#[tokio::test]
async fn media_download_returns_raw_bytes() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(Platform::Work, &server.base_url());
	let _token = mock_token(&server, Platform::Work).await;
	let _media = server
		.mock_async(|when, then| {
			when.method(GET).path("/cgi-bin/media/get").query_param("media_id", "m-1");
			then.status(200).header("content-type", "image/png").body([0x89_u8, b'P', b'N', b'G']);
		})
		.await;
	let _missing = server
		.mock_async(|when, then| {
			when.method(GET).path("/cgi-bin/media/get").query_param("media_id", "m-404");
			then.status(200)
				.header("content-type", "text/plain")
				.body("{\"errcode\":40007,\"errmsg\":\"invalid media_id\"}");
		})
		.await;
	let bytes = client.qy_media().get("m-1").await.expect("Media download should succeed.");

	assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);

	let err = client.qy_media().get("m-404").await.expect_err("Unknown media must fail.");

	assert_eq!(err.api_code(), Some(40007));
}

#[tokio::test]
async fn text_attachments_download_unchanged() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(Platform::Work, &server.base_url());
	let _token = mock_token(&server, Platform::Work).await;
	let _media = server
		.mock_async(|when, then| {
			when.method(GET).path("/cgi-bin/media/get").query_param("media_id", "txt-1");
			then.status(200)
				.header("content-type", "text/plain")
				.body("hello from a text attachment");
		})
		.await;
	let bytes = client.qy_media().get("txt-1").await.expect("Text attachment should download.");

	assert_eq!(bytes, b"hello from a text attachment");
}

#[tokio::test]
async fn shake_group_listing_allows_large_pages() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(Platform::OfficialAccount, &server.base_url());
	let _token = mock_token(&server, Platform::OfficialAccount).await;
	let list = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/shakearound/device/group/getlist")
				.json_body(json!({ "begin": 0, "count": 1000 }));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"errcode\":0,\"errmsg\":\"success.\",\"data\":{\"groups\":[],\"total_count\":0}}");
		})
		.await;

	client.mp_shake_group().list(0, 1000).await.expect("Group listing should succeed.");

	list.assert_calls_async(1).await;
}

#[tokio::test]
async fn image_upload_is_sent_as_multipart() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(Platform::Work, &server.base_url());
	let _token = mock_token(&server, Platform::Work).await;
	let upload = server
		.mock_async(|when, then| {
			when.method(POST).path("/cgi-bin/media/uploadimg").body_includes("name=\"media\"");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"errcode\":0,\"errmsg\":\"ok\",\"url\":\"https://wework.qpic.cn/x.png\"}");
		})
		.await;
	let file = UploadFile::new("x.png", vec![1_u8, 2, 3]).with_content_type("image/png");
	let value = client.qy_media().upload_image(file).await.expect("Upload should succeed.");

	assert_eq!(value["url"], "https://wework.qpic.cn/x.png");

	upload.assert_calls_async(1).await;
}

#[tokio::test]
async fn sns_authorize_url_is_built_locally() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(Platform::OfficialAccount, &server.base_url());
	let url = client
		.mp_sns()
		.authorize_url("https://example.com/cb?x=1", SnsScope::UserInfo, Some("st"))
		.expect("Authorize URL should render.");
	let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();

	assert_eq!(url.path(), "/connect/oauth2/authorize");
	assert_eq!(url.fragment(), Some("wechat_redirect"));
	assert_eq!(
		pairs,
		vec![
			("appid".to_owned(), MP_APP_ID.to_owned()),
			("redirect_uri".to_owned(), "https://example.com/cb?x=1".to_owned()),
			("response_type".to_owned(), "code".to_owned()),
			("scope".to_owned(), "snsapi_userinfo".to_owned()),
			("state".to_owned(), "st".to_owned()),
		]
	);
}

#[tokio::test]
async fn sns_code_exchange_skips_application_token() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(Platform::OfficialAccount, &server.base_url());
	let token = mock_token(&server, Platform::OfficialAccount).await;
	let exchange = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/sns/oauth2/access_token")
				.query_param("appid", MP_APP_ID)
				.query_param("secret", SECRET)
				.query_param("code", "c-1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"user-tok\",\"openid\":\"o-1\",\"expires_in\":7200}");
		})
		.await;
	let value = client.mp_sns().access_token("c-1").await.expect("Code exchange should succeed.");

	assert_eq!(value["openid"], "o-1");
	assert!(store.is_empty());

	token.assert_calls_async(0).await;
	exchange.assert_calls_async(1).await;
}

#[tokio::test]
async fn wrappers_reject_the_other_platform() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(Platform::Work, &server.base_url());
	let token = mock_token(&server, Platform::Work).await;
	let err = client.mp_callback().callback_ip().await.expect_err("WeCom clients cannot call MP.");

	assert!(matches!(
		err,
		Error::Config(ConfigError::PlatformMismatch { expected: Platform::OfficialAccount, .. })
	));

	token.assert_calls_async(0).await;
}
