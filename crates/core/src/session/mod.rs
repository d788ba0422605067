//! Session: the root of every command sent to one remote automation session.
//!
//! A [`Session`] wraps a shared [`CommandClient`] and the compiled
//! [`CommandTable`]. It exposes:
//!
//! - element lookup ([`find_element`](Session::find_element), waits),
//! - script execution with element marshalling,
//! - typed wrappers for common session commands (navigation, windows,
//!   cookies, timeouts, alerts),
//! - [`command`](Session::command) for everything else the table compiled.
//!
//! Construction runs direct-connect negotiation once, before any command is
//! sent, so every later request goes to the endpoint the server asked for.

mod commands;
mod execute;
mod find;
mod wait;

use std::sync::Arc;

use serde_json::{Map, Value};
use wd_runtime::{CommandClient, Result};

use crate::command_table::{CommandScope, CommandTable};
use crate::config::SessionConfig;
use crate::direct_connect::{self, DirectConnect};
use crate::dispatch::Dispatcher;

/// One remote automation session.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use wd::{LocatorStrategy, Session};
///
/// let session = Session::new(Arc::new(my_http_client))?;
/// session.navigate_to("https://example.com").await?;
/// let heading = session.find_element(LocatorStrategy::CssSelector, "h1").await?;
/// println!("{}", heading.text().await?);
/// session.quit().await?;
/// ```
#[derive(Clone)]
pub struct Session {
	dispatcher: Dispatcher,
	config: SessionConfig,
	direct_connect: DirectConnect,
}

impl Session {
	/// Creates a session over `client` using the standard command table and
	/// default configuration.
	///
	/// # Errors
	///
	/// Fails only if the built-in protocol tables cannot be compiled.
	pub fn new(client: Arc<dyn CommandClient>) -> Result<Self> {
		Ok(Self::with_config(client, CommandTable::standard()?, SessionConfig::default()))
	}

	/// Creates a session with an explicit command table and configuration.
	pub fn with_config(client: Arc<dyn CommandClient>, commands: Arc<CommandTable>, config: SessionConfig) -> Self {
		let direct_connect = direct_connect::apply(client.as_ref());
		tracing::debug!(
			session_id = client.session_id(),
			url = %client.options().connected_url(),
			"Session created"
		);
		Self {
			dispatcher: Dispatcher::new(client, commands),
			config,
			direct_connect,
		}
	}

	pub fn session_id(&self) -> &str {
		self.dispatcher.client().session_id()
	}

	/// Capabilities the remote end returned at session creation.
	pub fn capabilities(&self) -> Map<String, Value> {
		self.dispatcher.client().options().capabilities
	}

	/// URL commands are currently sent to, after direct connect.
	pub fn connected_url(&self) -> String {
		self.dispatcher.client().options().connected_url()
	}

	/// Outcome of direct-connect negotiation at construction.
	pub fn direct_connect(&self) -> &DirectConnect {
		&self.direct_connect
	}

	pub fn commands(&self) -> &Arc<CommandTable> {
		self.dispatcher.commands()
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	/// Invokes a session-scoped command by public name.
	///
	/// # Errors
	///
	/// Returns [`Error::UnknownCommand`](wd_runtime::Error::UnknownCommand) if
	/// the table has no such session command; transport errors pass through.
	pub async fn command(&self, name: &str, args: Vec<Value>) -> Result<Value> {
		self.dispatcher.dispatch(CommandScope::Session, name, args).await
	}
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("session_id", &self.session_id())
			.field("url", &self.connected_url())
			.field("config", &self.config)
			.finish()
	}
}

#[cfg(test)]
mod tests;
