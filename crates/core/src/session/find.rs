use serde_json::json;
use wd_protocol::LocatorStrategy;
use wd_runtime::Result;

use super::Session;
use crate::element::{Element, resolve, resolve_all};

impl Session {
	/// Finds the first element matching `value` under the document root.
	///
	/// # Errors
	///
	/// Returns [`Error::MalformedElementResponse`](wd_runtime::Error::MalformedElementResponse)
	/// if the response carries no element identifier. Remote errors such as
	/// `no such element` pass through unchanged.
	pub async fn find_element(&self, using: impl Into<LocatorStrategy>, value: &str) -> Result<Element> {
		let using = using.into();
		let raw = self.dispatcher.invoke("findElement", vec![json!(using), json!(value)]).await?;
		resolve(&raw, &self.dispatcher)
	}

	/// Finds every element matching `value`. No match is an empty vec.
	pub async fn find_elements(&self, using: impl Into<LocatorStrategy>, value: &str) -> Result<Vec<Element>> {
		let using = using.into();
		let raw = self.dispatcher.invoke("findElements", vec![json!(using), json!(value)]).await?;
		resolve_all(raw, &self.dispatcher)
	}
}
