//! Error types for the WebDriver runtime.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while dispatching WebDriver commands.
#[derive(Debug, Error)]
pub enum Error {
	/// Transport-level failure (connection refused, broken pipe, bad status line).
	#[error("Transport error: {0}")]
	Transport(String),

	/// The remote end answered with something that is not a WebDriver response.
	#[error("Protocol error: {0}")]
	Protocol(String),

	/// Error reported by the remote end.
	#[error("{name}: {message}")]
	Remote {
		/// W3C error code (e.g. "no such element", "stale element reference")
		name: String,
		/// Human-readable error message
		message: String,
		/// Remote stack trace (if provided)
		stacktrace: Option<String>,
	},

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// A find response carried no usable element identifier.
	#[error("Bad find response; did not have element key. Response was: {response}")]
	MalformedElementResponse { response: Value },

	/// Polling for an element ran past its deadline.
	#[error("Could not find element using strategy {strategy} and value '{value}' after {timeout_ms}ms")]
	ElementNotFoundTimeout { strategy: String, value: String, timeout_ms: u64 },

	/// Two different commands resolved to the same public name in one scope.
	#[error("Command name collision in {scope} scope: '{name}' is claimed by both '{existing}' and '{incoming}'")]
	CommandNameCollision {
		scope: &'static str,
		name: String,
		existing: String,
		incoming: String,
	},

	/// No compiled command with this public name exists in the scope.
	#[error("Unknown {scope} command: '{name}'")]
	UnknownCommand { scope: &'static str, name: String },

	/// A built-in protocol table failed to parse.
	#[error("Invalid protocol specification '{name}': {source}")]
	ProtocolSpec {
		name: String,
		#[source]
		source: serde_json::Error,
	},

	/// Invalid argument provided to a method.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
}

impl Error {
	/// Builds an error from a WebDriver error body.
	///
	/// Accepts both the W3C shape (`{"value": {"error", "message", "stacktrace"}}`)
	/// and the JSONWP shape (`{"status": 7, "value": {"message"}}`), with or
	/// without the outer `value` wrapper.
	pub fn from_wire(body: &Value) -> Self {
		let status = body.get("status").and_then(Value::as_u64);
		let payload = body.get("value").filter(|v| v.is_object()).unwrap_or(body);

		let message = payload.get("message").and_then(Value::as_str).unwrap_or_default().to_string();
		let stacktrace = payload.get("stacktrace").and_then(Value::as_str).map(str::to_string);

		let name = match (payload.get("error").and_then(Value::as_str), status) {
			(Some(name), _) => name.to_string(),
			(None, Some(code)) if code != 0 => legacy_status_name(code).to_string(),
			_ => return Error::Protocol(format!("Unrecognized error response: {body}")),
		};

		Error::Remote { name, message, stacktrace }
	}

	/// Returns the error name if this is a Remote error.
	pub fn error_name(&self) -> Option<&str> {
		match self {
			Error::Remote { name, .. } => Some(name),
			_ => None,
		}
	}

	/// Returns true if the remote end reported that no element matched.
	pub fn is_not_found(&self) -> bool {
		match self {
			Error::Remote { name, .. } => name == "no such element" || name == "NoSuchElement",
			_ => false,
		}
	}

	/// Returns true if this is a timeout error.
	pub fn is_timeout(&self) -> bool {
		match self {
			Error::ElementNotFoundTimeout { .. } => true,
			Error::Remote { name, .. } => matches!(name.as_str(), "timeout" | "script timeout" | "Timeout" | "ScriptTimeout"),
			_ => false,
		}
	}
}

/// Maps JSONWP numeric status codes to their W3C error names.
fn legacy_status_name(code: u64) -> &'static str {
	match code {
		6 => "invalid session id",
		7 => "no such element",
		8 => "no such frame",
		9 => "unknown command",
		10 => "stale element reference",
		11 => "element not visible",
		12 => "invalid element state",
		17 => "javascript error",
		21 => "timeout",
		23 => "no such window",
		24 => "invalid cookie domain",
		26 => "unexpected alert open",
		27 => "no such alert",
		28 => "script timeout",
		32 => "invalid selector",
		_ => "unknown error",
	}
}
