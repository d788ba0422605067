use std::time::Duration;

use tokio::time::Instant;
use wd_protocol::LocatorStrategy;
use wd_runtime::{Error, Result};

use super::Session;
use crate::element::Element;

impl Session {
	/// Polls [`find_element`](Self::find_element) until it succeeds or
	/// `timeout` elapses.
	///
	/// Every poll awaits the previous one; the deadline is checked between
	/// polls, so a slow request can overrun `timeout` by its own latency.
	/// A zero `timeout` still makes one find attempt. A `timeout` too large to
	/// add to the current instant (such as [`Duration::MAX`]) never expires.
	///
	/// # Errors
	///
	/// Returns [`Error::ElementNotFoundTimeout`] once the deadline passes.
	/// Not-found errors are retried; any other error is returned at once.
	pub async fn wait_for_element(&self, timeout: Duration, using: impl Into<LocatorStrategy>, value: &str) -> Result<Element> {
		let using = using.into();
		let deadline = Instant::now().checked_add(timeout);
		let mut attempts = 0u64;

		loop {
			attempts = attempts.saturating_add(1);
			match self.find_element(using.clone(), value).await {
				Ok(element) => {
					tracing::debug!(%using, value, attempts, "Element found");
					return Ok(element);
				}
				Err(err) if err.is_not_found() => {
					tracing::debug!(%using, value, attempts, "Element not found yet");
				}
				Err(err) => return Err(err),
			}

			if expired(deadline) {
				return Err(not_found_timeout(&using, value, timeout));
			}
			self.pause().await;
		}
	}

	/// Polls [`find_elements`](Self::find_elements) until it returns at least
	/// one element or `timeout` elapses.
	///
	/// A zero `timeout` still makes one find attempt. A `timeout` too large to
	/// add to the current instant never expires.
	///
	/// # Errors
	///
	/// Returns [`Error::ElementNotFoundTimeout`] once the deadline passes.
	/// Errors from the find itself are returned at once.
	pub async fn wait_for_elements(&self, timeout: Duration, using: impl Into<LocatorStrategy>, value: &str) -> Result<Vec<Element>> {
		let using = using.into();
		let deadline = Instant::now().checked_add(timeout);
		let mut attempts = 0u64;

		loop {
			attempts = attempts.saturating_add(1);
			let elements = self.find_elements(using.clone(), value).await?;
			if !elements.is_empty() {
				tracing::debug!(%using, value, attempts, count = elements.len(), "Elements found");
				return Ok(elements);
			}
			tracing::debug!(%using, value, attempts, "No elements yet");

			if expired(deadline) {
				return Err(not_found_timeout(&using, value, timeout));
			}
			self.pause().await;
		}
	}

	async fn pause(&self) {
		let interval = self.config.poll_interval;
		if interval.is_zero() {
			tokio::task::yield_now().await;
		} else {
			tokio::time::sleep(interval).await;
		}
	}
}

/// `None` is a deadline past the range of [`Instant`], which never expires.
fn expired(deadline: Option<Instant>) -> bool {
	deadline.is_some_and(|deadline| Instant::now() >= deadline)
}

fn not_found_timeout(using: &LocatorStrategy, value: &str, timeout: Duration) -> Error {
	Error::ElementNotFoundTimeout {
		strategy: using.to_string(),
		value: value.to_string(),
		timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
	}
}
