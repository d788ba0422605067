//! Arguments passed to `executeScript` and `executeAsyncScript`.

use serde_json::Value;

use crate::element::Element;

/// One script argument.
///
/// Elements are sent in their wire form (`{ <key>: <id> }`) so the remote
/// end hands the script a live node; literals pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptArg {
	Literal(Value),
	Element(Element),
}

impl ScriptArg {
	/// Converts the argument to what goes on the wire.
	pub fn into_value(self) -> Value {
		match self {
			Self::Literal(value) => value,
			Self::Element(element) => element.to_argument(),
		}
	}
}

impl From<Value> for ScriptArg {
	fn from(value: Value) -> Self {
		Self::Literal(value)
	}
}

impl From<Element> for ScriptArg {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

impl From<&Element> for ScriptArg {
	fn from(element: &Element) -> Self {
		Self::Element(element.clone())
	}
}
