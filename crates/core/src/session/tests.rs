use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value, json};
use wd_protocol::{Cookie, ElementKey, LocatorStrategy, Timeouts, W3C_ELEMENT_KEY};
use wd_runtime::Error;
use wd_runtime::testing::ScriptedClient;

use super::*;
use crate::script::ScriptArg;

fn session() -> (Arc<ScriptedClient>, Session) {
	let client = Arc::new(ScriptedClient::new("session-1"));
	let session = Session::new(client.clone()).unwrap();
	(client, session)
}

fn no_such_element() -> Error {
	Error::Remote {
		name: "no such element".to_string(),
		message: "Unable to locate element".to_string(),
		stacktrace: None,
	}
}

#[test]
fn test_accessors() {
	let mut caps = Map::new();
	caps.insert("platformName".to_string(), json!("Android"));
	let client = Arc::new(ScriptedClient::new("abc").with_capabilities(caps));
	let session = Session::new(client).unwrap();

	assert_eq!(session.session_id(), "abc");
	assert_eq!(session.capabilities()["platformName"], "Android");
	assert_eq!(session.connected_url(), "http://localhost:4444/");
	assert_eq!(session.direct_connect(), &DirectConnect::Absent);
	assert_eq!(session.config(), &SessionConfig::default());
	assert!(session.commands().session_command("getTitle").is_some());
}

#[tokio::test]
async fn test_find_element_sends_strategy_and_value() {
	let (client, session) = session();
	client.respond("findElement", Ok(json!({ W3C_ELEMENT_KEY: "e1" })));

	let element = session.find_element(LocatorStrategy::Id, "login").await.unwrap();

	assert_eq!(element.key(), ElementKey::Modern);
	assert_eq!(element.id(), "e1");
	assert_eq!(client.calls()[0].args, vec![json!("id"), json!("login")]);
}

#[tokio::test]
async fn test_find_element_malformed_and_remote_errors() {
	let (client, session) = session();
	client.respond("findElement", Ok(json!({ "foo": "bar" })));
	client.respond("findElement", Err(no_such_element()));

	assert!(matches!(session.find_element("id", "x").await, Err(Error::MalformedElementResponse { .. })));
	assert!(session.find_element("id", "x").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_find_elements_empty() {
	let (client, session) = session();
	client.respond("findElements", Ok(json!([])));

	assert!(session.find_elements("css selector", ".none").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_wait_for_element_retries_not_found() {
	let (client, session) = session();
	client.respond("findElement", Err(no_such_element()));
	client.respond("findElement", Err(no_such_element()));
	client.respond("findElement", Ok(json!({ "ELEMENT": "3rd" })));

	let element = session.wait_for_element(Duration::from_secs(5), "id", "late").await.unwrap();

	assert_eq!(element.id(), "3rd");
	assert_eq!(client.calls_to("findElement").len(), 3);
}

#[tokio::test]
async fn test_wait_for_element_propagates_other_errors() {
	let (client, session) = session();
	client.respond("findElement", Err(Error::Transport("connection refused".to_string())));

	let err = session.wait_for_element(Duration::from_secs(5), "id", "x").await.unwrap_err();

	assert!(matches!(err, Error::Transport(_)));
	assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn test_wait_for_element_times_out() {
	let client = Arc::new(ScriptedClient::new("s"));
	client.respond_with("findElement", |_| Err(no_such_element()));
	let config = SessionConfig::new().poll_interval(Duration::from_millis(5));
	let session = Session::with_config(client.clone(), CommandTable::standard().unwrap(), config);

	let err = session.wait_for_element(Duration::from_millis(30), "id", "missing").await.unwrap_err();

	match err {
		Error::ElementNotFoundTimeout { strategy, value, timeout_ms } => {
			assert_eq!(strategy, "id");
			assert_eq!(value, "missing");
			assert_eq!(timeout_ms, 30);
		}
		other => panic!("unexpected error: {other:?}"),
	}
	assert!(client.calls_to("findElement").len() >= 2);
}

#[tokio::test]
async fn test_wait_for_elements_loops_while_empty() {
	let (client, session) = session();
	client.respond("findElements", Ok(json!([])));
	client.respond("findElements", Ok(json!([{ "ELEMENT": "a" }, { "ELEMENT": "b" }])));

	let elements = session.wait_for_elements(Duration::from_secs(5), "xpath", "//li").await.unwrap();

	assert_eq!(elements.len(), 2);
	assert_eq!(client.calls_to("findElements").len(), 2);
}

#[tokio::test]
async fn test_wait_for_elements_propagates_not_found() {
	let (client, session) = session();
	client.respond("findElements", Err(no_such_element()));

	let err = session.wait_for_elements(Duration::from_secs(5), "xpath", "//li").await.unwrap_err();

	assert!(err.is_not_found());
}

#[tokio::test]
async fn test_execute_script_marshals_elements() {
	let (client, session) = session();
	client.respond("findElement", Ok(json!({ "ELEMENT": "7" })));
	client.respond("executeAsyncScript", Ok(json!({ "done": true })));
	let element = session.find_element("id", "x").await.unwrap();

	session
		.execute_script("return 1", vec![ScriptArg::from(&element), json!(42).into()])
		.await
		.unwrap();
	let result = session.execute_async_script("arguments[0]()", vec![]).await.unwrap();

	let calls = client.calls();
	assert_eq!(calls[1].command, "executeScript");
	assert_eq!(calls[1].args, vec![json!("return 1"), json!([{ "ELEMENT": "7" }, 42])]);
	assert_eq!(calls[2].args, vec![json!("arguments[0]()"), json!([])]);
	assert_eq!(result, json!({ "done": true }));
}

#[tokio::test]
async fn test_quit_dispatches_delete_session() {
	let (client, session) = session();

	session.quit().await.unwrap();

	assert_eq!(client.calls()[0].command, "deleteSession");
	assert!(matches!(
		session.command("deleteSession", vec![]).await,
		Err(Error::UnknownCommand { scope: "session", .. })
	));
}

#[tokio::test]
async fn test_generic_command() {
	let (client, session) = session();
	client.respond("shake", Ok(Value::Null));

	session.command("shake", vec![]).await.unwrap();

	assert_eq!(client.calls()[0].command, "shake");
	assert!(matches!(session.command("findElement", vec![]).await, Err(Error::UnknownCommand { .. })));
}

#[tokio::test]
async fn test_typed_navigation() {
	let (client, session) = session();
	client.respond("getTitle", Ok(json!("Example Domain")));
	client.respond("getWindowHandles", Ok(json!(["w1", "w2"])));

	session.navigate_to("https://example.com").await.unwrap();
	assert_eq!(session.get_title().await.unwrap(), "Example Domain");
	assert_eq!(session.get_window_handles().await.unwrap(), vec!["w1", "w2"]);

	assert_eq!(client.calls()[0].command, "navigateTo");
	assert_eq!(client.calls()[0].args, vec![json!("https://example.com")]);
}

#[tokio::test]
async fn test_take_screenshot_decodes_base64() {
	let (client, session) = session();
	client.respond("takeScreenshot", Ok(json!("iVBORw0KGgo=")));
	client.respond("takeScreenshot", Ok(json!("not base64!")));

	assert_eq!(session.take_screenshot().await.unwrap(), b"\x89PNG\r\n\x1a\n".to_vec());
	assert!(matches!(session.take_screenshot().await, Err(Error::Protocol(_))));
}

#[tokio::test]
async fn test_cookies_and_timeouts() {
	let (client, session) = session();
	client.respond("getAllCookies", Ok(json!([{ "name": "sid", "value": "1" }])));
	client.respond("getTimeouts", Ok(json!({ "implicit": 0, "pageLoad": 300000, "script": 30000 })));

	let cookies = session.get_all_cookies().await.unwrap();
	session.add_cookie(&Cookie::new("theme", "dark")).await.unwrap();
	let timeouts = session.get_timeouts().await.unwrap();
	session.set_timeouts(Timeouts::new().implicit(500)).await.unwrap();

	assert_eq!(cookies, vec![Cookie::new("sid", "1")]);
	assert_eq!(timeouts.page_load, Some(300_000));
	let calls = client.calls();
	assert_eq!(calls[1].args, vec![json!({ "name": "theme", "value": "dark" })]);
	assert_eq!(calls[3].command, "setTimeouts");
	assert_eq!(calls[3].args, vec![json!({ "implicit": 500 })]);
}

#[tokio::test]
async fn test_add_cookie_requires_name() {
	let (client, session) = session();

	let err = session.add_cookie(&Cookie::new("", "v")).await.unwrap_err();

	assert!(matches!(err, Error::InvalidArgument(_)));
	assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_wait_for_element_with_unbounded_timeout() {
	let (client, session) = session();
	client.respond("findElement", Err(no_such_element()));
	client.respond("findElement", Ok(json!({ "ELEMENT": "1" })));

	let element = session.wait_for_element(Duration::MAX, "id", "x").await.unwrap();

	assert_eq!(element.id(), "1");
	assert_eq!(client.calls_to("findElement").len(), 2);
}

#[tokio::test]
async fn test_wait_for_elements_with_unbounded_timeout() {
	let (client, session) = session();
	client.respond("findElements", Ok(json!([])));
	client.respond("findElements", Ok(json!([{ "ELEMENT": "1" }])));

	let elements = session.wait_for_elements(Duration::MAX, "id", "x").await.unwrap();

	assert_eq!(elements.len(), 1);
	assert_eq!(client.calls_to("findElements").len(), 2);
}

#[tokio::test]
async fn test_zero_timeout_still_attempts_once() {
	let (client, session) = session();
	client.respond("findElement", Ok(json!({ "ELEMENT": "now" })));
	client.respond_with("findElements", |_| Ok(json!([])));

	let element = session.wait_for_element(Duration::ZERO, "id", "x").await.unwrap();
	let err = session.wait_for_elements(Duration::ZERO, "id", "y").await.unwrap_err();

	assert_eq!(element.id(), "now");
	assert!(matches!(err, Error::ElementNotFoundTimeout { timeout_ms: 0, .. }));
	assert_eq!(client.calls_to("findElements").len(), 1);
}
