//! Turns raw find responses into [`Element`] handles.

use serde_json::Value;
use wd_protocol::ElementRef;
use wd_runtime::{Error, Result};

use super::Element;
use crate::dispatch::Dispatcher;

/// Resolves one find response into a handle owned by `scope`.
///
/// The W3C key is preferred whenever it is present; the handle remembers
/// which key was used so later requests echo the same convention.
pub(crate) fn resolve(raw: &Value, scope: &Dispatcher) -> Result<Element> {
	let reference = ElementRef::from_value(raw).ok_or_else(|| Error::MalformedElementResponse { response: raw.clone() })?;
	Ok(Element::new(reference, scope.clone()))
}

/// Resolves a `findElements` response. An empty array yields no handles.
pub(crate) fn resolve_all(raw: Value, scope: &Dispatcher) -> Result<Vec<Element>> {
	match raw {
		Value::Array(items) => items.iter().map(|item| resolve(item, scope)).collect(),
		other => Err(Error::MalformedElementResponse { response: other }),
	}
}
