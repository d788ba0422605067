//! Declarative protocol specification tables.
//!
//! A protocol specification maps each wire route to the HTTP methods it
//! accepts and, for every method, the command identifier and metadata
//! describing it:
//!
//! ```text
//! "/session/:sessionId/url": {
//!     "GET":  { "command": "getUrl", ... },
//!     "POST": { "command": "navigateTo", "parameters": [...] }
//! }
//! ```
//!
//! Route and method order is preserved exactly as written, because the
//! order in which tables are walked decides which definition of a command
//! wins when several tables declare it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const WEBDRIVER_JSON: &str = include_str!("../protocols/webdriver.json");
const JSONWP_JSON: &str = include_str!("../protocols/jsonwp.json");
const MJSONWP_JSON: &str = include_str!("../protocols/mjsonwp.json");
const APPIUM_JSON: &str = include_str!("../protocols/appium.json");

/// HTTP method of a protocol route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	Get,
	Post,
	Delete,
}

impl HttpMethod {
	/// Returns the upper-case method name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Delete => "DELETE",
		}
	}
}

impl std::fmt::Display for HttpMethod {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One body parameter of a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
	pub name: String,
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub required: bool,
}

/// Metadata for one (route, method) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDescriptor {
	/// Command identifier, unique per command across protocol tables
	pub command: String,
	#[serde(default)]
	pub description: String,
	/// Link to the defining section of the protocol document
	#[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
	pub reference: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub parameters: Vec<Parameter>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub returns: Option<serde_json::Value>,
}

/// Route table of a single protocol.
pub type RouteTable = IndexMap<String, IndexMap<HttpMethod, CommandDescriptor>>;

/// A named protocol specification.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolSpec {
	name: String,
	routes: RouteTable,
}

impl ProtocolSpec {
	/// Creates a specification from an already-built route table.
	pub fn new(name: impl Into<String>, routes: RouteTable) -> Self {
		Self { name: name.into(), routes }
	}

	/// Parses a `route -> method -> descriptor` JSON document.
	pub fn from_json(name: impl Into<String>, json: &str) -> serde_json::Result<Self> {
		let routes: RouteTable = serde_json::from_str(json)?;
		Ok(Self::new(name, routes))
	}

	/// The W3C WebDriver specification.
	pub fn webdriver() -> serde_json::Result<Self> {
		Self::from_json("webdriver", WEBDRIVER_JSON)
	}

	/// The legacy Selenium JSON Wire Protocol.
	pub fn jsonwp() -> serde_json::Result<Self> {
		Self::from_json("jsonwp", JSONWP_JSON)
	}

	/// The Mobile JSON Wire Protocol additions.
	pub fn mjsonwp() -> serde_json::Result<Self> {
		Self::from_json("mjsonwp", MJSONWP_JSON)
	}

	/// Appium's vendor extension commands.
	pub fn appium() -> serde_json::Result<Self> {
		Self::from_json("appium", APPIUM_JSON)
	}

	/// All built-in specifications in precedence order: W3C first, then
	/// JSONWP, MJSONWP and Appium. Later tables win for duplicated commands.
	pub fn standard() -> serde_json::Result<Vec<Self>> {
		Ok(vec![Self::webdriver()?, Self::jsonwp()?, Self::mjsonwp()?, Self::appium()?])
	}

	/// Returns the specification name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the raw route table.
	pub fn routes(&self) -> &RouteTable {
		&self.routes
	}

	/// Iterates `(route, method, descriptor)` in declaration order.
	pub fn commands(&self) -> impl Iterator<Item = (&str, HttpMethod, &CommandDescriptor)> {
		self.routes
			.iter()
			.flat_map(|(route, methods)| methods.iter().map(move |(method, descriptor)| (route.as_str(), *method, descriptor)))
	}

	/// Finds the first descriptor for `command`.
	pub fn find(&self, command: &str) -> Option<(&str, HttpMethod, &CommandDescriptor)> {
		self.commands().find(|(_, _, descriptor)| descriptor.command == command)
	}
}
