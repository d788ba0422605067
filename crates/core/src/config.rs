//! Session configuration.

use std::time::Duration;

/// Tunables for a [`Session`](crate::Session).
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use wd::SessionConfig;
///
/// let config = SessionConfig::new().poll_interval(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
	/// Pause between find attempts in `wait_for_element(s)`.
	///
	/// Zero polls back to back, yielding to the runtime between attempts.
	pub poll_interval: Duration,
}

impl SessionConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the pause between find attempts while waiting.
	pub fn poll_interval(mut self, interval: Duration) -> Self {
		self.poll_interval = interval;
		self
	}
}
