//! Geometry, timeout and cookie types returned by element and session commands.

use serde::{Deserialize, Serialize};

/// Position and size of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

/// Size of an element (JSONWP `size` endpoint).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

/// Location of an element (JSONWP `location` and `location_in_view` endpoints).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Session timeouts in milliseconds.
///
/// Unset fields are left out of the request so the remote end keeps its
/// current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeouts {
	/// Implicit element-location wait
	#[serde(skip_serializing_if = "Option::is_none")]
	pub implicit: Option<u64>,
	/// Page load timeout
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_load: Option<u64>,
	/// Script timeout
	#[serde(skip_serializing_if = "Option::is_none")]
	pub script: Option<u64>,
}

impl Timeouts {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the implicit wait.
	pub fn implicit(mut self, ms: u64) -> Self {
		self.implicit = Some(ms);
		self
	}

	/// Sets the page load timeout.
	pub fn page_load(mut self, ms: u64) -> Self {
		self.page_load = Some(ms);
		self
	}

	/// Sets the script timeout.
	pub fn script(mut self, ms: u64) -> Self {
		self.script = Some(ms);
		self
	}
}

/// A cookie as sent and returned by the cookie commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
	pub name: String,
	pub value: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub path: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub domain: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub secure: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub http_only: Option<bool>,
	/// Expiry as seconds since the Unix epoch
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expiry: Option<u64>,
	/// `Strict`, `Lax` or `None`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub same_site: Option<String>,
}

impl Cookie {
	/// Creates a session cookie with only a name and value.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			..Self::default()
		}
	}
}
