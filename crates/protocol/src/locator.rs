//! Element location strategies.

use serde::{Serialize, Serializer};

/// Strategy used to locate elements (the `using` field of a find request).
///
/// W3C remote ends only accept the first five variants. JSONWP and Appium
/// servers accept the rest; anything else travels as [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocatorStrategy {
	/// `css selector`
	CssSelector,
	/// `link text`
	LinkText,
	/// `partial link text`
	PartialLinkText,
	/// `tag name`
	TagName,
	/// `xpath`
	XPath,
	/// `id` (JSONWP)
	Id,
	/// `name` (JSONWP)
	Name,
	/// `class name` (JSONWP)
	ClassName,
	/// `accessibility id` (Appium)
	AccessibilityId,
	/// `-android uiautomator` (Appium)
	AndroidUiAutomator,
	/// `-ios predicate string` (Appium)
	IosPredicateString,
	/// `-ios class chain` (Appium)
	IosClassChain,
	/// Vendor-specific strategy sent verbatim.
	Other(String),
}

impl LocatorStrategy {
	/// Returns the wire name of this strategy.
	pub fn as_str(&self) -> &str {
		match self {
			Self::CssSelector => "css selector",
			Self::LinkText => "link text",
			Self::PartialLinkText => "partial link text",
			Self::TagName => "tag name",
			Self::XPath => "xpath",
			Self::Id => "id",
			Self::Name => "name",
			Self::ClassName => "class name",
			Self::AccessibilityId => "accessibility id",
			Self::AndroidUiAutomator => "-android uiautomator",
			Self::IosPredicateString => "-ios predicate string",
			Self::IosClassChain => "-ios class chain",
			Self::Other(using) => using,
		}
	}
}

impl From<&str> for LocatorStrategy {
	fn from(using: &str) -> Self {
		match using {
			"css selector" => Self::CssSelector,
			"link text" => Self::LinkText,
			"partial link text" => Self::PartialLinkText,
			"tag name" => Self::TagName,
			"xpath" => Self::XPath,
			"id" => Self::Id,
			"name" => Self::Name,
			"class name" => Self::ClassName,
			"accessibility id" => Self::AccessibilityId,
			"-android uiautomator" => Self::AndroidUiAutomator,
			"-ios predicate string" => Self::IosPredicateString,
			"-ios class chain" => Self::IosClassChain,
			other => Self::Other(other.to_string()),
		}
	}
}

impl From<String> for LocatorStrategy {
	fn from(using: String) -> Self {
		Self::from(using.as_str())
	}
}

impl std::fmt::Display for LocatorStrategy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for LocatorStrategy {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_strategies_parse() {
		assert_eq!(LocatorStrategy::from("css selector"), LocatorStrategy::CssSelector);
		assert_eq!(LocatorStrategy::from("accessibility id"), LocatorStrategy::AccessibilityId);
		assert_eq!(LocatorStrategy::from("-ios class chain"), LocatorStrategy::IosClassChain);
	}

	#[test]
	fn test_unknown_strategy_is_kept_verbatim() {
		let strategy = LocatorStrategy::from("-custom finder");
		assert_eq!(strategy, LocatorStrategy::Other("-custom finder".to_string()));
		assert_eq!(serde_json::to_value(&strategy).unwrap(), serde_json::json!("-custom finder"));
	}
}
