use std::io;
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value, json};
use wd_protocol::ConnectionTarget;
use wd_runtime::CommandClient;
use wd_runtime::testing::ScriptedClient;

use super::*;

fn caps(value: Value) -> Map<String, Value> {
	match value {
		Value::Object(map) => map,
		_ => unreachable!("capabilities must be an object"),
	}
}

fn target(protocol: &str, hostname: &str, port: u16, path: &str) -> ConnectionTarget {
	ConnectionTarget {
		protocol: protocol.to_string(),
		hostname: hostname.to_string(),
		port,
		path: path.to_string(),
	}
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl Captured {
	fn text(&self) -> String {
		String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
	}
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
	let captured = Captured::default();
	let writer = captured.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_writer(move || writer.clone())
		.with_ansi(false)
		.with_max_level(tracing::Level::TRACE)
		.finish();
	let result = tracing::subscriber::with_default(subscriber, f);
	(result, captured.text())
}

#[test]
fn test_absent() {
	assert_eq!(negotiate(&caps(json!({ "browserName": "chrome" }))), DirectConnect::Absent);
}

#[test]
fn test_unprefixed_complete() {
	let outcome = negotiate(&caps(json!({
		"directConnectProtocol": "https",
		"directConnectHost": "node-3.grid",
		"directConnectPort": 443,
		"directConnectPath": "/wd/hub",
	})));

	assert_eq!(outcome, DirectConnect::Resolved(target("https", "node-3.grid", 443, "/wd/hub")));
}

#[test]
fn test_prefixed_wins_with_more_keys() {
	let outcome = negotiate(&caps(json!({
		"directConnectHost": "ignored",
		"appium:directConnectProtocol": "http",
		"appium:directConnectHost": "10.0.0.5",
		"appium:directConnectPort": "4723",
		"appium:directConnectPath": "/",
	})));

	assert_eq!(outcome, DirectConnect::Resolved(target("http", "10.0.0.5", 4723, "/")));
}

#[test]
fn test_tie_goes_to_unprefixed() {
	let outcome = negotiate(&caps(json!({
		"directConnectHost": "a",
		"directConnectPort": 1,
		"appium:directConnectHost": "b",
		"appium:directConnectPort": 2,
	})));

	assert_eq!(
		outcome,
		DirectConnect::Partial {
			family: DirectConnectFamily::Unprefixed,
			present: vec!["directConnectHost", "directConnectPort"],
		}
	);
}

#[test]
fn test_unusable_port_is_partial() {
	for port in [json!(null), json!("http"), json!(70000), json!(-1), json!(4.5)] {
		let outcome = negotiate(&caps(json!({
			"directConnectProtocol": "http",
			"directConnectHost": "h",
			"directConnectPort": port,
			"directConnectPath": "/",
		})));

		assert_eq!(
			outcome,
			DirectConnect::Partial {
				family: DirectConnectFamily::Unprefixed,
				present: vec!["directConnectProtocol", "directConnectHost", "directConnectPath"],
			}
		);
	}
}

#[test]
fn test_apply_rewrites_target() {
	let client = ScriptedClient::new("s1").with_capabilities(caps(json!({
		"directConnectProtocol": "https",
		"directConnectHost": "node-3.grid",
		"directConnectPort": 8443,
		"directConnectPath": "/hub",
	})));

	let (outcome, logs) = with_captured_logs(|| apply(&client));

	assert!(matches!(outcome, DirectConnect::Resolved(_)));
	assert_eq!(client.options().target(), target("https", "node-3.grid", 8443, "/hub"));
	assert_eq!(client.options().connected_url(), "https://node-3.grid:8443/hub");
	assert!(logs.contains("INFO"));
	assert!(logs.contains("will send subsequent requests to new host"));
}

#[test]
fn test_apply_partial_warns_and_keeps_target() {
	let client = ScriptedClient::new("s1").with_capabilities(caps(json!({
		"directConnectHost": "node-3.grid",
		"directConnectPort": 8443,
	})));
	let before = client.options().target();

	let (outcome, logs) = with_captured_logs(|| apply(&client));

	assert!(matches!(outcome, DirectConnect::Partial { .. }));
	assert_eq!(client.options().target(), before);
	assert!(logs.contains("WARN"));
	assert!(logs.contains("not all were present"));
}
