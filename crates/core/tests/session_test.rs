// Session construction, element round-trips and script marshalling.

mod common;

use serde_json::json;
use wd::{CommandClient, ConnectionTarget, DirectConnect, ElementKey, ScriptArg};

use common::*;

#[tokio::test]
async fn test_direct_connect_rewrites_every_field() {
	let client = client_with_caps(json!({
		"platformName": "iOS",
		"directConnectProtocol": "https",
		"directConnectHost": "device-farm-12.internal",
		"directConnectPort": 8443,
		"directConnectPath": "/appium",
	}));

	let session = session(&client);

	let expected = ConnectionTarget {
		protocol: "https".to_string(),
		hostname: "device-farm-12.internal".to_string(),
		port: 8443,
		path: "/appium".to_string(),
	};
	assert_eq!(session.direct_connect(), &DirectConnect::Resolved(expected.clone()));
	assert_eq!(client.options().target(), expected);
	assert_eq!(session.connected_url(), "https://device-farm-12.internal:8443/appium");
}

#[tokio::test]
async fn test_direct_connect_with_two_fields_leaves_target_alone() {
	let client = client_with_caps(json!({
		"directConnectHost": "device-farm-12.internal",
		"directConnectPort": 8443,
	}));

	let session = session(&client);

	assert!(matches!(session.direct_connect(), DirectConnect::Partial { .. }));
	assert_eq!(session.connected_url(), "http://localhost:4444/");
}

#[tokio::test]
async fn test_prefixed_direct_connect() {
	let client = client_with_caps(json!({
		"appium:directConnectProtocol": "http",
		"appium:directConnectHost": "10.1.2.3",
		"appium:directConnectPort": "4723",
		"appium:directConnectPath": "/wd/hub",
	}));

	let session = session(&client);

	assert_eq!(session.connected_url(), "http://10.1.2.3:4723/wd/hub");
}

#[tokio::test]
async fn test_execute_script_with_element_and_literal() {
	let client = client();
	client.respond("findElement", Ok(w3c_element("btn")));
	client.respond("executeScript", Ok(json!("clicked")));
	let session = session(&client);
	let button = session.find_element("css selector", "#go").await.unwrap();

	let result = session
		.execute_script("arguments[0].click(); return 'clicked';", vec![ScriptArg::from(&button), json!(42).into()])
		.await
		.unwrap();

	assert_eq!(result, json!("clicked"));
	let call = &client.calls_to("executeScript")[0];
	assert_eq!(call.args[1], json!([{ "element-6066-11e4-a52e-4f735466cecf": "btn" }, 42]));
}

#[tokio::test]
async fn test_element_keeps_server_convention_across_requests() {
	let client = client();
	client.respond("findElement", Ok(legacy_element("legacy-1")));
	client.respond("findElementFromElement", Ok(w3c_element("modern-2")));
	let session = session(&client);

	let parent = session.find_element("xpath", "//form").await.unwrap();
	let child = parent.find_element("name", "q").await.unwrap();
	session
		.execute_script("return 0", vec![parent.clone().into(), child.clone().into()])
		.await
		.unwrap();

	assert_eq!(parent.key(), ElementKey::Legacy);
	assert_eq!(child.key(), ElementKey::Modern);
	let script_args = &client.calls_to("executeScript")[0].args[1];
	assert_eq!(
		script_args,
		&json!([{ "ELEMENT": "legacy-1" }, { "element-6066-11e4-a52e-4f735466cecf": "modern-2" }])
	);
}

#[tokio::test]
async fn test_wire_form_round_trips_through_find() {
	let client = client();
	client.respond("findElement", Ok(legacy_element("7")));
	let session = session(&client);
	let first = session.find_element("id", "a").await.unwrap();

	client.respond("findElement", Ok(first.to_argument()));
	let second = session.find_element("id", "a").await.unwrap();

	assert_eq!(first, second);
	assert_eq!(second.key(), ElementKey::Legacy);
	assert_eq!(second.id(), "7");
}

#[tokio::test]
async fn test_element_commands_go_through_same_client() {
	let client = client();
	client.respond("findElement", Ok(w3c_element("field")));
	client.respond("getElementText", Ok(json!("hello")));
	let session = session(&client);

	let field = session.find_element("id", "field").await.unwrap();
	field.clear().await.unwrap();
	field.send_keys("hello").await.unwrap();
	assert_eq!(field.text().await.unwrap(), "hello");

	let commands: Vec<_> = client.calls().into_iter().map(|call| call.command).collect();
	assert_eq!(commands, ["findElement", "elementClear", "elementSendKeys", "getElementText"]);
	assert!(client.calls()[1..].iter().all(|call| call.args[0] == json!("field")));
}

#[tokio::test]
async fn test_quit() -> anyhow::Result<()> {
	let client = client();
	let session = wd::Session::new(client.clone())?;

	session.quit().await?;

	assert_eq!(client.calls()[0].command, "deleteSession");
	assert!(client.calls()[0].args.is_empty());
	assert_eq!(session.session_id(), SESSION_ID);
	Ok(())
}
