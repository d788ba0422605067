//! The command client seam.
//!
//! Every command a [`Session`](https://docs.rs/wd-rs) or element issues ends
//! up in [`CommandClient::invoke`] as a protocol command id plus positional
//! arguments. Implementations map the id to its route (see
//! `wd_protocol::ProtocolSpec`), fill route parameters and the body from the
//! arguments, and return the `value` field of the response.

use std::future::Future;
use std::pin::Pin;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wd_protocol::ConnectionTarget;

use crate::error::Result;

/// Boxed future returned by [`CommandClient::invoke`].
pub type CommandFuture<'a> = Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;

/// Interface a session needs from its transport.
///
/// The client is shared between a session and every element it produces.
/// Only the session rewrites the connection target, once, while it is being
/// constructed; everything else only reads.
pub trait CommandClient: Send + Sync {
	/// Id of the remote session this client talks to.
	fn session_id(&self) -> &str;

	/// Snapshot of the current connection options.
	fn options(&self) -> ClientOptions;

	/// Points every subsequent command at a new endpoint.
	fn set_target(&self, target: ConnectionTarget);

	/// Sends one protocol command and awaits its result.
	///
	/// `command` is a protocol command id such as `"navigateTo"` or
	/// `"findElementFromElement"`. Element-scoped commands receive the
	/// element id as the first argument.
	fn invoke(&self, command: &str, args: Vec<Value>) -> CommandFuture<'_>;
}

/// Connection target and negotiated capabilities of a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientOptions {
	/// URL scheme (`http` or `https`)
	pub protocol: String,
	/// Host name or address
	pub hostname: String,
	/// TCP port
	pub port: u16,
	/// Base path for command routes
	pub path: String,
	/// Capabilities returned by the remote end at session creation
	#[serde(default)]
	pub capabilities: Map<String, Value>,
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self {
			protocol: "http".to_string(),
			hostname: "localhost".to_string(),
			port: 4444,
			path: "/".to_string(),
			capabilities: Map::new(),
		}
	}
}

impl ClientOptions {
	/// Creates options for the given target and capabilities.
	pub fn new(target: ConnectionTarget, capabilities: Map<String, Value>) -> Self {
		let ConnectionTarget { protocol, hostname, port, path } = target;
		Self {
			protocol,
			hostname,
			port,
			path,
			capabilities,
		}
	}

	/// Returns the current connection target.
	pub fn target(&self) -> ConnectionTarget {
		ConnectionTarget {
			protocol: self.protocol.clone(),
			hostname: self.hostname.clone(),
			port: self.port,
			path: self.path.clone(),
		}
	}

	/// Overwrites the connection target, leaving capabilities untouched.
	pub fn set_target(&mut self, target: ConnectionTarget) {
		self.protocol = target.protocol;
		self.hostname = target.hostname;
		self.port = target.port;
		self.path = target.path;
	}

	/// Renders the target as `protocol://hostname:port/path`.
	pub fn connected_url(&self) -> String {
		self.target().url()
	}
}

/// Interior-mutable [`ClientOptions`] for [`CommandClient`] implementations.
#[derive(Debug, Default)]
pub struct SharedOptions {
	inner: RwLock<ClientOptions>,
}

impl SharedOptions {
	pub fn new(options: ClientOptions) -> Self {
		Self {
			inner: RwLock::new(options),
		}
	}

	/// Returns a copy of the current options.
	pub fn snapshot(&self) -> ClientOptions {
		self.inner.read().clone()
	}

	/// Returns the current connection target.
	pub fn target(&self) -> ConnectionTarget {
		self.inner.read().target()
	}

	pub fn set_target(&self, target: ConnectionTarget) {
		tracing::debug!(url = %target.url(), "Connection target updated");
		self.inner.write().set_target(target);
	}
}
