//! Command dispatch shared by sessions and the elements they produce.
//!
//! A [`Dispatcher`] pairs the session's client with its compiled command
//! table. Every element handle carries a clone of the dispatcher of the
//! scope that found it, so all of them talk to the same client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use wd_runtime::{CommandClient, Result};

use crate::command_table::{CommandScope, CommandTable};

#[derive(Clone)]
pub(crate) struct Dispatcher {
	client: Arc<dyn CommandClient>,
	commands: Arc<CommandTable>,
}

impl Dispatcher {
	pub(crate) fn new(client: Arc<dyn CommandClient>, commands: Arc<CommandTable>) -> Self {
		Self { client, commands }
	}

	pub(crate) fn client(&self) -> &dyn CommandClient {
		self.client.as_ref()
	}

	pub(crate) fn commands(&self) -> &Arc<CommandTable> {
		&self.commands
	}

	/// Invokes a protocol command id directly, bypassing the table.
	pub(crate) async fn invoke(&self, command_id: &str, args: Vec<Value>) -> Result<Value> {
		tracing::debug!(command = command_id, args = args.len(), "Invoking command");
		self.client.invoke(command_id, args).await
	}

	/// Invokes a compiled command by public name.
	pub(crate) async fn dispatch(&self, scope: CommandScope, name: &str, args: Vec<Value>) -> Result<Value> {
		let entry = self.commands.resolve(scope, name)?;
		tracing::debug!(%scope, command_name = name, command = %entry.command_id, "Dispatching command");
		self.client.invoke(&entry.command_id, args).await
	}

	/// Dispatches and deserializes the result.
	pub(crate) async fn send<R: DeserializeOwned>(&self, scope: CommandScope, name: &str, args: Vec<Value>) -> Result<R> {
		let value = self.dispatch(scope, name, args).await?;
		serde_json::from_value(value).map_err(Into::into)
	}

	/// Dispatches a command whose result carries no information.
	pub(crate) async fn send_no_result(&self, scope: CommandScope, name: &str, args: Vec<Value>) -> Result<()> {
		let _: Value = self.dispatch(scope, name, args).await?;
		Ok(())
	}
}
