//! [`Element`] handles for remote UI nodes.

mod resolve;

use serde_json::{Value, json};
use wd_protocol::{ElementKey, ElementRef, LocatorStrategy, Point, Rect, Size};
use wd_runtime::Result;

pub(crate) use self::resolve::{resolve, resolve_all};
use crate::command_table::CommandScope;
use crate::dispatch::Dispatcher;

/// A node in the remote document or UI hierarchy.
///
/// Handles are produced by [`Session::find_element`](crate::Session::find_element),
/// [`Element::find_element`] and their plural and waiting variants. A handle
/// keeps the identifier convention the server answered with and resends it
/// verbatim. Dropping a handle has no remote effect.
#[derive(Clone)]
pub struct Element {
	reference: ElementRef,
	dispatcher: Dispatcher,
}

impl Element {
	pub(crate) fn new(reference: ElementRef, dispatcher: Dispatcher) -> Self {
		Self { reference, dispatcher }
	}

	/// Returns the wire reference of this element.
	pub fn reference(&self) -> &ElementRef {
		&self.reference
	}

	/// Returns which identifier convention the server used.
	pub fn key(&self) -> ElementKey {
		self.reference.key()
	}

	/// Returns the opaque element id.
	pub fn id(&self) -> &str {
		self.reference.id()
	}

	/// Returns `{ <key>: <id> }`, the form used to pass this element as a
	/// script argument.
	pub fn to_argument(&self) -> Value {
		self.reference.to_value()
	}

	/// Invokes an element-scoped command by public name, with this element's
	/// id prepended to `args`.
	pub async fn command(&self, name: &str, args: Vec<Value>) -> Result<Value> {
		self.dispatcher.dispatch(CommandScope::Element, name, self.with_id(args)).await
	}

	fn with_id(&self, args: Vec<Value>) -> Vec<Value> {
		let mut full = Vec::with_capacity(args.len() + 1);
		full.push(Value::String(self.id().to_string()));
		full.extend(args);
		full
	}

	async fn send<R: serde::de::DeserializeOwned>(&self, name: &str, args: Vec<Value>) -> Result<R> {
		self.dispatcher.send(CommandScope::Element, name, self.with_id(args)).await
	}

	async fn send_no_result(&self, name: &str, args: Vec<Value>) -> Result<()> {
		self.dispatcher.send_no_result(CommandScope::Element, name, self.with_id(args)).await
	}

	/// Finds the first descendant matching `value`.
	pub async fn find_element(&self, using: impl Into<LocatorStrategy>, value: &str) -> Result<Element> {
		let using = using.into();
		let raw = self
			.dispatcher
			.invoke("findElementFromElement", vec![json!(self.id()), json!(using), json!(value)])
			.await?;
		resolve(&raw, &self.dispatcher)
	}

	/// Finds every descendant matching `value`; no match is an empty vec.
	pub async fn find_elements(&self, using: impl Into<LocatorStrategy>, value: &str) -> Result<Vec<Element>> {
		let using = using.into();
		let raw = self
			.dispatcher
			.invoke("findElementsFromElement", vec![json!(self.id()), json!(using), json!(value)])
			.await?;
		resolve_all(raw, &self.dispatcher)
	}

	pub async fn click(&self) -> Result<()> {
		self.send_no_result("click", vec![]).await
	}

	/// Submits the form this element belongs to (JSONWP).
	pub async fn submit(&self) -> Result<()> {
		self.send_no_result("submit", vec![]).await
	}

	pub async fn clear(&self) -> Result<()> {
		self.send_no_result("clear", vec![]).await
	}

	/// Types `text` into the element.
	pub async fn send_keys(&self, text: &str) -> Result<()> {
		self.send_no_result("sendKeys", vec![json!(text)]).await
	}

	/// Returns the rendered text.
	pub async fn text(&self) -> Result<String> {
		self.send("getText", vec![]).await
	}

	pub async fn tag_name(&self) -> Result<String> {
		self.send("getTagName", vec![]).await
	}

	/// Returns an attribute value, `None` if the attribute is absent.
	pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
		self.send("getAttribute", vec![json!(name)]).await
	}

	/// Returns a DOM property value.
	pub async fn property(&self, name: &str) -> Result<Value> {
		self.send("getProperty", vec![json!(name)]).await
	}

	/// Returns the computed value of a CSS property.
	pub async fn css_value(&self, property_name: &str) -> Result<String> {
		self.send("getCSSValue", vec![json!(property_name)]).await
	}

	pub async fn rect(&self) -> Result<Rect> {
		self.send("getRect", vec![]).await
	}

	pub async fn size(&self) -> Result<Size> {
		self.send("getSize", vec![]).await
	}

	pub async fn location(&self) -> Result<Point> {
		self.send("getLocation", vec![]).await
	}

	/// Location after scrolling the element into view.
	pub async fn location_in_view(&self) -> Result<Point> {
		self.send("getLocationInView", vec![]).await
	}

	pub async fn is_selected(&self) -> Result<bool> {
		self.send("isSelected", vec![]).await
	}

	pub async fn is_displayed(&self) -> Result<bool> {
		self.send("isDisplayed", vec![]).await
	}

	pub async fn is_enabled(&self) -> Result<bool> {
		self.send("isEnabled", vec![]).await
	}
}

impl PartialEq for Element {
	fn eq(&self, other: &Self) -> bool {
		self.reference == other.reference
	}
}

impl Eq for Element {}

impl std::fmt::Debug for Element {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Element").field("key", &self.key()).field("id", &self.id()).finish()
	}
}
