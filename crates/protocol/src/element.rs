//! Element references as they appear on the wire.
//!
//! A remote end identifies a UI node by an opaque id stored under one of two
//! keys. W3C servers use [`W3C_ELEMENT_KEY`]; JSONWP-era servers use
//! [`JWP_ELEMENT_KEY`]. Whichever key a server answered with must be the key
//! sent back in later requests.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Element identifier key defined by the W3C WebDriver specification.
pub const W3C_ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Element identifier key used by the legacy JSON Wire Protocol.
pub const JWP_ELEMENT_KEY: &str = "ELEMENT";

/// Which identifier convention a remote end used for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKey {
	/// `element-6066-11e4-a52e-4f735466cecf`
	Modern,
	/// `ELEMENT`
	Legacy,
}

impl ElementKey {
	/// Returns the JSON field name for this convention.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Modern => W3C_ELEMENT_KEY,
			Self::Legacy => JWP_ELEMENT_KEY,
		}
	}
}

impl std::fmt::Display for ElementKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A remote element id tagged with the convention that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementRef {
	/// Reference returned under the W3C key.
	Modern(String),
	/// Reference returned under the JSONWP key.
	Legacy(String),
}

impl ElementRef {
	/// Reads an element reference out of a raw find response.
	///
	/// The W3C key is checked first. A key whose value is missing, empty or
	/// not a string counts as absent, so an empty W3C value next to a usable
	/// legacy value yields a legacy reference.
	pub fn from_value(value: &Value) -> Option<Self> {
		let object = value.as_object()?;
		if let Some(id) = non_empty_str(object, W3C_ELEMENT_KEY) {
			return Some(Self::Modern(id.to_string()));
		}
		non_empty_str(object, JWP_ELEMENT_KEY).map(|id| Self::Legacy(id.to_string()))
	}

	/// Returns the identifier convention of this reference.
	pub fn key(&self) -> ElementKey {
		match self {
			Self::Modern(_) => ElementKey::Modern,
			Self::Legacy(_) => ElementKey::Legacy,
		}
	}

	/// Returns the opaque element id.
	pub fn id(&self) -> &str {
		match self {
			Self::Modern(id) | Self::Legacy(id) => id,
		}
	}

	/// Returns the `{ <key>: <id> }` object used when passing this element
	/// back to the remote end.
	pub fn to_value(&self) -> Value {
		let mut object = Map::with_capacity(1);
		object.insert(self.key().as_str().to_string(), Value::String(self.id().to_string()));
		Value::Object(object)
	}
}

fn non_empty_str<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
	object.get(key).and_then(Value::as_str).filter(|id| !id.is_empty())
}

impl Serialize for ElementRef {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(1))?;
		map.serialize_entry(self.key().as_str(), self.id())?;
		map.end()
	}
}
