// Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use wd::{Error, Session};
use wd_runtime::testing::ScriptedClient;

pub const SESSION_ID: &str = "0b1c2d3e";

/// A scripted client with no capabilities.
pub fn client() -> Arc<ScriptedClient> {
	Arc::new(ScriptedClient::new(SESSION_ID))
}

/// A scripted client whose session-creation response carried `caps`.
pub fn client_with_caps(caps: Value) -> Arc<ScriptedClient> {
	let caps = match caps {
		Value::Object(map) => map,
		other => panic!("capabilities must be an object, got {other}"),
	};
	Arc::new(ScriptedClient::new(SESSION_ID).with_capabilities(caps))
}

pub fn session(client: &Arc<ScriptedClient>) -> Session {
	Session::new(client.clone()).expect("standard command table compiles")
}

pub fn no_such_element() -> Error {
	Error::Remote {
		name: "no such element".to_string(),
		message: "An element could not be located on the page using the given search parameters.".to_string(),
		stacktrace: None,
	}
}

pub fn w3c_element(id: &str) -> Value {
	json!({ "element-6066-11e4-a52e-4f735466cecf": id })
}

pub fn legacy_element(id: &str) -> Value {
	json!({ "ELEMENT": id })
}
