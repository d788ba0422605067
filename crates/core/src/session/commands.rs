//! Typed wrappers over common compiled session commands.
//!
//! Each wrapper dispatches by public name through the command table, so a
//! table compiled without one of these commands makes the wrapper fail with
//! [`Error::UnknownCommand`](wd_runtime::Error::UnknownCommand).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use wd_protocol::{Cookie, Timeouts};
use wd_runtime::{Error, Result};

use super::Session;
use crate::command_table::CommandScope;

impl Session {
	async fn send<R: DeserializeOwned>(&self, name: &str, args: Vec<Value>) -> Result<R> {
		self.dispatcher.send(CommandScope::Session, name, args).await
	}

	async fn send_no_result(&self, name: &str, args: Vec<Value>) -> Result<()> {
		self.dispatcher.send_no_result(CommandScope::Session, name, args).await
	}

	// Navigation

	/// Navigates the current browsing context to `url`.
	pub async fn navigate_to(&self, url: &str) -> Result<()> {
		self.send_no_result("navigateTo", vec![json!(url)]).await
	}

	pub async fn get_url(&self) -> Result<String> {
		self.send("getUrl", vec![]).await
	}

	pub async fn get_title(&self) -> Result<String> {
		self.send("getTitle", vec![]).await
	}

	pub async fn back(&self) -> Result<()> {
		self.send_no_result("back", vec![]).await
	}

	pub async fn forward(&self) -> Result<()> {
		self.send_no_result("forward", vec![]).await
	}

	pub async fn refresh(&self) -> Result<()> {
		self.send_no_result("refresh", vec![]).await
	}

	/// Returns the serialized DOM of the current page.
	pub async fn get_page_source(&self) -> Result<String> {
		self.send("getPageSource", vec![]).await
	}

	/// Captures the viewport and returns PNG bytes.
	///
	/// # Errors
	///
	/// Returns [`Error::Protocol`] if the remote end did not send valid base64.
	pub async fn take_screenshot(&self) -> Result<Vec<u8>> {
		let encoded: String = self.send("takeScreenshot", vec![]).await?;
		STANDARD
			.decode(encoded.trim())
			.map_err(|e| Error::Protocol(format!("Screenshot is not valid base64: {e}")))
	}

	// Windows

	pub async fn get_window_handle(&self) -> Result<String> {
		self.send("getWindowHandle", vec![]).await
	}

	pub async fn get_window_handles(&self) -> Result<Vec<String>> {
		self.send("getWindowHandles", vec![]).await
	}

	/// Switches to the window identified by `handle`.
	pub async fn switch_to_window(&self, handle: &str) -> Result<()> {
		self.send_no_result("switchToWindow", vec![json!(handle)]).await
	}

	/// Closes the current window.
	pub async fn close_window(&self) -> Result<()> {
		self.send_no_result("closeWindow", vec![]).await
	}

	// Cookies

	pub async fn get_all_cookies(&self) -> Result<Vec<Cookie>> {
		self.send("getAllCookies", vec![]).await
	}

	pub async fn get_named_cookie(&self, name: &str) -> Result<Cookie> {
		self.send("getNamedCookie", vec![json!(name)]).await
	}

	/// Adds a cookie to the current page's domain.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if the cookie has no name.
	pub async fn add_cookie(&self, cookie: &Cookie) -> Result<()> {
		if cookie.name.is_empty() {
			return Err(Error::InvalidArgument("cookie name must not be empty".to_string()));
		}
		self.send_no_result("addCookie", vec![serde_json::to_value(cookie)?]).await
	}

	pub async fn delete_cookie(&self, name: &str) -> Result<()> {
		self.send_no_result("deleteCookie", vec![json!(name)]).await
	}

	pub async fn delete_all_cookies(&self) -> Result<()> {
		self.send_no_result("deleteAllCookies", vec![]).await
	}

	// Timeouts

	pub async fn get_timeouts(&self) -> Result<Timeouts> {
		self.send("getTimeouts", vec![]).await
	}

	/// Updates the timeouts that are set; unset fields keep their value.
	pub async fn set_timeouts(&self, timeouts: Timeouts) -> Result<()> {
		self.send_no_result("setTimeouts", vec![serde_json::to_value(timeouts)?]).await
	}

	// Alerts

	pub async fn accept_alert(&self) -> Result<()> {
		self.send_no_result("acceptAlert", vec![]).await
	}

	pub async fn dismiss_alert(&self) -> Result<()> {
		self.send_no_result("dismissAlert", vec![]).await
	}

	pub async fn get_alert_text(&self) -> Result<String> {
		self.send("getAlertText", vec![]).await
	}

	/// Types into a prompt dialog.
	pub async fn send_alert_text(&self, text: &str) -> Result<()> {
		self.send_no_result("sendAlertText", vec![json!(text)]).await
	}

	// Lifecycle

	/// Returns the remote end's readiness status.
	pub async fn status(&self) -> Result<Value> {
		self.command("status", vec![]).await
	}

	/// Ends the remote session (`deleteSession` on the wire).
	pub async fn quit(&self) -> Result<()> {
		self.send_no_result("quit", vec![]).await
	}
}
