//! In-memory [`CommandClient`] for tests.
//!
//! [`ScriptedClient`] records every invocation and answers from a per-command
//! script, so sessions and elements can be exercised without a remote end.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use serde_json::json;
//! use wd_runtime::testing::ScriptedClient;
//!
//! let client = Arc::new(ScriptedClient::new("session-1"));
//! client.respond("getTitle", Ok(json!("Example Domain")));
//! client.respond_with("findElement", |_| Ok(json!({ "ELEMENT": "42" })));
//!
//! let session = wd::Session::new(client.clone())?;
//! assert_eq!(session.get_title().await?, "Example Domain");
//! assert_eq!(client.calls()[0].command, "getTitle");
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};
use wd_protocol::ConnectionTarget;

use crate::client::{ClientOptions, CommandClient, CommandFuture, SharedOptions};
use crate::error::Result;

/// Handler computing a response from the invocation arguments.
pub type Responder = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// One recorded [`CommandClient::invoke`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
	pub command: String,
	pub args: Vec<Value>,
}

/// Scripted, recording [`CommandClient`].
///
/// Responses are looked up per command id: queued one-shot responses first
/// (in the order they were added), then a persistent responder, and finally
/// `Ok(Value::Null)`.
pub struct ScriptedClient {
	session_id: String,
	options: SharedOptions,
	queued: Mutex<HashMap<String, VecDeque<Result<Value>>>>,
	responders: Mutex<HashMap<String, Responder>>,
	calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
	/// Creates a client for `session_id` with default options.
	pub fn new(session_id: impl Into<String>) -> Self {
		Self {
			session_id: session_id.into(),
			options: SharedOptions::default(),
			queued: Mutex::new(HashMap::new()),
			responders: Mutex::new(HashMap::new()),
			calls: Mutex::new(Vec::new()),
		}
	}

	/// Sets the connection target.
	pub fn with_target(self, target: ConnectionTarget) -> Self {
		self.options.set_target(target);
		self
	}

	/// Sets the capabilities the client reports.
	pub fn with_capabilities(self, capabilities: Map<String, Value>) -> Self {
		let options = ClientOptions {
			capabilities,
			..self.options.snapshot()
		};
		Self {
			options: SharedOptions::new(options),
			..self
		}
	}

	/// Queues a one-shot response for `command`.
	pub fn respond(&self, command: &str, response: Result<Value>) {
		self.queued.lock().entry(command.to_string()).or_default().push_back(response);
	}

	/// Installs a responder used once the queue for `command` is empty.
	pub fn respond_with<F>(&self, command: &str, responder: F)
	where
		F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
	{
		self.responders.lock().insert(command.to_string(), Arc::new(responder));
	}

	/// Returns every call made so far, oldest first.
	pub fn calls(&self) -> Vec<RecordedCall> {
		self.calls.lock().clone()
	}

	/// Returns the calls made for one command id.
	pub fn calls_to(&self, command: &str) -> Vec<RecordedCall> {
		self.calls.lock().iter().filter(|call| call.command == command).cloned().collect()
	}

	fn answer(&self, command: &str, args: &[Value]) -> Result<Value> {
		if let Some(response) = self.queued.lock().get_mut(command).and_then(VecDeque::pop_front) {
			return response;
		}
		let responder = self.responders.lock().get(command).cloned();
		match responder {
			Some(responder) => responder(args),
			None => Ok(Value::Null),
		}
	}
}

impl CommandClient for ScriptedClient {
	fn session_id(&self) -> &str {
		&self.session_id
	}

	fn options(&self) -> ClientOptions {
		self.options.snapshot()
	}

	fn set_target(&self, target: ConnectionTarget) {
		self.options.set_target(target);
	}

	fn invoke(&self, command: &str, args: Vec<Value>) -> CommandFuture<'_> {
		let command = command.to_string();
		Box::pin(async move {
			tracing::debug!(%command, ?args, "ScriptedClient invoke");
			let response = self.answer(&command, &args);
			self.calls.lock().push(RecordedCall { command, args });
			response
		})
	}
}
