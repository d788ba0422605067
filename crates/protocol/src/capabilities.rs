//! Capability names and connection targets for direct connect.
//!
//! Some servers (Appium behind a load balancer, cloud grids) answer session
//! creation with the address of the node that actually owns the session.
//! The address arrives as four capabilities, either unprefixed or under the
//! `appium:` vendor prefix.

use serde::{Deserialize, Serialize};

/// Vendor prefix used by Appium for non-standard capabilities.
pub const APPIUM_PREFIX: &str = "appium:";

/// `directConnectProtocol`
pub const DIRECT_CONNECT_PROTOCOL: &str = "directConnectProtocol";
/// `directConnectHost`
pub const DIRECT_CONNECT_HOST: &str = "directConnectHost";
/// `directConnectPort`
pub const DIRECT_CONNECT_PORT: &str = "directConnectPort";
/// `directConnectPath`
pub const DIRECT_CONNECT_PATH: &str = "directConnectPath";

/// The four unprefixed direct-connect capabilities, in protocol/host/port/path order.
pub const DIRECT_CONNECT_CAPS: [&str; 4] = [DIRECT_CONNECT_PROTOCOL, DIRECT_CONNECT_HOST, DIRECT_CONNECT_PORT, DIRECT_CONNECT_PATH];

/// The `appium:`-prefixed direct-connect capabilities, same order.
pub const PREFIXED_DIRECT_CONNECT_CAPS: [&str; 4] = [
	"appium:directConnectProtocol",
	"appium:directConnectHost",
	"appium:directConnectPort",
	"appium:directConnectPath",
];

/// Address of a WebDriver endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTarget {
	/// URL scheme (`http` or `https`)
	pub protocol: String,
	/// Host name or address
	pub hostname: String,
	/// TCP port
	pub port: u16,
	/// Base path every command route is appended to (e.g. `/wd/hub`)
	pub path: String,
}

impl ConnectionTarget {
	/// Renders the target as `protocol://hostname:port/path`.
	pub fn url(&self) -> String {
		format!("{}://{}:{}{}", self.protocol, self.hostname, self.port, self.path)
	}
}
