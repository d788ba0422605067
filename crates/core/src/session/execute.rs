use serde_json::{Value, json};
use wd_runtime::Result;

use super::Session;
use crate::script::ScriptArg;

impl Session {
	/// Runs synchronous JavaScript in the current browsing context.
	///
	/// Elements in `args` reach the script as live nodes. The result is
	/// returned exactly as the remote end sent it.
	///
	/// # Example
	///
	/// ```ignore
	/// let heading = session.find_element("css selector", "h1").await?;
	/// let text = session
	///     .execute_script("return arguments[0].textContent + arguments[1];", vec![heading.into(), json!("!").into()])
	///     .await?;
	/// ```
	pub async fn execute_script(&self, script: &str, args: Vec<ScriptArg>) -> Result<Value> {
		self.dispatcher.invoke("executeScript", script_args(script, args)).await
	}

	/// Runs asynchronous JavaScript; the script signals completion through
	/// the callback passed as its last argument.
	pub async fn execute_async_script(&self, script: &str, args: Vec<ScriptArg>) -> Result<Value> {
		self.dispatcher.invoke("executeAsyncScript", script_args(script, args)).await
	}
}

fn script_args(script: &str, args: Vec<ScriptArg>) -> Vec<Value> {
	let args = args.into_iter().map(ScriptArg::into_value).collect();
	vec![json!(script), Value::Array(args)]
}
