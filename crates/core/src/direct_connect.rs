//! Direct-connect negotiation.
//!
//! A server may answer session creation with the address of the node that
//! owns the session, spread over four capabilities. [`negotiate`] reads
//! them without side effects; [`apply`] acts on the outcome by retargeting
//! the client.
//!
//! Both the unprefixed family (`directConnectHost`, ...) and the
//! `appium:`-prefixed family may be present. The prefixed family is used
//! only when it has strictly more keys present; ties go to the unprefixed
//! family.

use serde_json::{Map, Value};
use wd_protocol::{ConnectionTarget, DIRECT_CONNECT_CAPS, PREFIXED_DIRECT_CONNECT_CAPS};
use wd_runtime::CommandClient;

/// Which set of capability names carried the direct-connect data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectConnectFamily {
	/// `directConnectProtocol`, `directConnectHost`, ...
	Unprefixed,
	/// `appium:directConnectProtocol`, `appium:directConnectHost`, ...
	Prefixed,
}

impl DirectConnectFamily {
	/// Capability names of this family in protocol/host/port/path order.
	pub fn keys(&self) -> [&'static str; 4] {
		match self {
			Self::Unprefixed => DIRECT_CONNECT_CAPS,
			Self::Prefixed => PREFIXED_DIRECT_CONNECT_CAPS,
		}
	}
}

/// Outcome of reading the direct-connect capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectConnect {
	/// No direct-connect capability was returned.
	Absent,
	/// Some fields are missing or unusable; the original endpoint is kept.
	///
	/// `present` lists the usable capabilities of the chosen family.
	Partial {
		family: DirectConnectFamily,
		present: Vec<&'static str>,
	},
	/// All four fields are usable.
	Resolved(ConnectionTarget),
}

/// Reads the direct-connect capabilities out of `capabilities`.
///
/// A field is usable when protocol and host are non-empty strings, path is
/// a string and port is a JSON number or numeric string within `u16`.
pub fn negotiate(capabilities: &Map<String, Value>) -> DirectConnect {
	let count = |keys: [&str; 4]| keys.iter().filter(|key| capabilities.contains_key(**key)).count();
	let unprefixed = count(DIRECT_CONNECT_CAPS);
	let prefixed = count(PREFIXED_DIRECT_CONNECT_CAPS);

	let family = if prefixed > unprefixed {
		DirectConnectFamily::Prefixed
	} else {
		DirectConnectFamily::Unprefixed
	};
	if unprefixed.max(prefixed) == 0 {
		return DirectConnect::Absent;
	}

	let [protocol_key, host_key, port_key, path_key] = family.keys();
	let protocol = non_empty_str(capabilities.get(protocol_key));
	let hostname = non_empty_str(capabilities.get(host_key));
	let port = capabilities.get(port_key).and_then(port);
	let path = capabilities.get(path_key).and_then(Value::as_str);

	match (protocol, hostname, port, path) {
		(Some(protocol), Some(hostname), Some(port), Some(path)) => DirectConnect::Resolved(ConnectionTarget {
			protocol: protocol.to_string(),
			hostname: hostname.to_string(),
			port,
			path: path.to_string(),
		}),
		(protocol, hostname, port, path) => {
			let usable = [protocol.is_some(), hostname.is_some(), port.is_some(), path.is_some()];
			let present = family.keys().into_iter().zip(usable).filter_map(|(key, ok)| ok.then_some(key)).collect();
			DirectConnect::Partial { family, present }
		}
	}
}

/// Negotiates against the client's capabilities and retargets it when the
/// server supplied a complete address.
pub fn apply(client: &dyn CommandClient) -> DirectConnect {
	let options = client.options();
	let outcome = negotiate(&options.capabilities);

	match &outcome {
		DirectConnect::Absent => {}
		DirectConnect::Partial { family, present } => {
			tracing::warn!(
				?family,
				required = ?family.keys(),
				received = ?present,
				url = %options.connected_url(),
				"Direct connect caps were used, but not all were present; will use original server information"
			);
		}
		DirectConnect::Resolved(target) => {
			tracing::info!(
				from = %options.connected_url(),
				to = %target.url(),
				"Direct connect caps were provided, will send subsequent requests to new host"
			);
			client.set_target(target.clone());
		}
	}

	outcome
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
	value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn port(value: &Value) -> Option<u16> {
	match value {
		Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
		Value::String(s) => s.trim().parse().ok(),
		_ => None,
	}
}

#[cfg(test)]
mod tests;
