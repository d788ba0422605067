//! Compiles protocol specifications into the command surface of sessions
//! and elements.
//!
//! Several protocol tables describe overlapping command sets: the W3C
//! specification, the legacy JSON Wire Protocol, its mobile additions and
//! Appium's extensions. [`compile`] walks them in order and produces one
//! [`CommandTable`] with two scopes:
//!
//! - **element** commands are invoked on an [`Element`](crate::Element) and
//!   receive the element id as their first argument
//! - **session** commands are everything else
//!
//! Commands that sessions and elements implement by hand (finding elements,
//! running scripts, creating sessions) are excluded from both scopes.
//!
//! # Precedence
//!
//! Tables are walked in the order given, routes and methods in declaration
//! order. When a command id appears more than once the last definition wins;
//! its entry keeps the position of the first definition. Two *different*
//! command ids resolving to the same public name in one scope is a
//! configuration error reported by [`compile`].

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use wd_protocol::{HttpMethod, ProtocolSpec};
use wd_runtime::{Error, Result};

/// Commands implemented by hand on [`Session`](crate::Session) and [`Element`](crate::Element).
pub const EXCLUDED_COMMANDS: [&str; 7] = [
	"newSession",
	"findElement",
	"findElements",
	"findElementFromElement",
	"findElementsFromElement",
	"executeScript",
	"executeAsyncScript",
];

/// Element-scoped command ids and the public names they surface under.
pub const ELEMENT_COMMANDS: [(&str, &str); 16] = [
	("isElementSelected", "isSelected"),
	("isElementDisplayed", "isDisplayed"),
	("getElementAttribute", "getAttribute"),
	("getElementCSSValue", "getCSSValue"),
	("getElementText", "getText"),
	("getElementTagName", "getTagName"),
	("getElementLocation", "getLocation"),
	("getElementLocationInView", "getLocationInView"),
	("getElementProperty", "getProperty"),
	("getElementRect", "getRect"),
	("getElementSize", "getSize"),
	("isElementEnabled", "isEnabled"),
	("elementClick", "click"),
	("elementSubmit", "submit"),
	("elementClear", "clear"),
	("elementSendKeys", "sendKeys"),
];

/// Session-scoped renames.
pub const SESSION_ALIASES: [(&str, &str); 1] = [("deleteSession", "quit")];

/// Which object a compiled command is invoked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandScope {
	Session,
	Element,
}

impl CommandScope {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Session => "session",
			Self::Element => "element",
		}
	}
}

impl std::fmt::Display for CommandScope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One compiled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
	/// Public name the command is called by
	pub name: String,
	pub scope: CommandScope,
	/// Id passed to [`CommandClient::invoke`](wd_runtime::CommandClient::invoke)
	pub command_id: String,
	/// Route of the winning definition
	pub route: String,
	pub method: HttpMethod,
	/// Name of the specification the winning definition came from
	pub source: String,
}

/// Rules applied while compiling.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
	/// Command ids left out of both scopes.
	pub exclusions: HashSet<String>,
	/// Element-scoped command ids mapped to their public names.
	pub element_commands: IndexMap<String, String>,
	/// Session-scoped command ids mapped to a different public name.
	pub aliases: IndexMap<String, String>,
}

impl CompileOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// The rules used for the built-in protocol tables.
	pub fn standard() -> Self {
		let mut options = Self::new();
		for id in EXCLUDED_COMMANDS {
			options = options.exclude(id);
		}
		for (id, name) in ELEMENT_COMMANDS {
			options = options.element_command(id, name);
		}
		for (id, name) in SESSION_ALIASES {
			options = options.alias(id, name);
		}
		options
	}

	/// Leaves `command_id` out of the compiled table.
	pub fn exclude(mut self, command_id: impl Into<String>) -> Self {
		self.exclusions.insert(command_id.into());
		self
	}

	/// Compiles `command_id` into the element scope as `name`.
	pub fn element_command(mut self, command_id: impl Into<String>, name: impl Into<String>) -> Self {
		self.element_commands.insert(command_id.into(), name.into());
		self
	}

	/// Surfaces the session command `command_id` as `name`.
	pub fn alias(mut self, command_id: impl Into<String>, name: impl Into<String>) -> Self {
		self.aliases.insert(command_id.into(), name.into());
		self
	}

	fn classify<'a>(&'a self, command_id: &'a str) -> (CommandScope, &'a str) {
		if let Some(name) = self.element_commands.get(command_id) {
			return (CommandScope::Element, name.as_str());
		}
		let name = self.aliases.get(command_id).map(String::as_str).unwrap_or(command_id);
		(CommandScope::Session, name)
	}
}

/// Compiled, collision-free command surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
	session: IndexMap<String, CommandEntry>,
	element: IndexMap<String, CommandEntry>,
}

static STANDARD: OnceLock<Arc<CommandTable>> = OnceLock::new();

impl CommandTable {
	/// Returns the table compiled from the built-in specifications with
	/// [`CompileOptions::standard`]. Compiled once per process.
	pub fn standard() -> Result<Arc<CommandTable>> {
		if let Some(table) = STANDARD.get() {
			return Ok(Arc::clone(table));
		}

		let specs = ProtocolSpec::standard().map_err(|source| Error::ProtocolSpec {
			name: "standard".to_string(),
			source,
		})?;
		let table = Arc::new(compile(&specs, &CompileOptions::standard())?);
		tracing::debug!(
			session = table.session.len(),
			element = table.element.len(),
			"Compiled standard command table"
		);

		Ok(Arc::clone(STANDARD.get_or_init(|| table)))
	}

	/// Looks up a command by public name.
	pub fn get(&self, scope: CommandScope, name: &str) -> Option<&CommandEntry> {
		self.scope(scope).get(name)
	}

	/// Looks up a command, failing with [`Error::UnknownCommand`].
	pub fn resolve(&self, scope: CommandScope, name: &str) -> Result<&CommandEntry> {
		self.get(scope, name).ok_or_else(|| Error::UnknownCommand {
			scope: scope.as_str(),
			name: name.to_string(),
		})
	}

	pub fn session_command(&self, name: &str) -> Option<&CommandEntry> {
		self.session.get(name)
	}

	pub fn element_command(&self, name: &str) -> Option<&CommandEntry> {
		self.element.get(name)
	}

	/// Iterates session commands in compilation order.
	pub fn session_commands(&self) -> impl Iterator<Item = &CommandEntry> {
		self.session.values()
	}

	/// Iterates element commands in compilation order.
	pub fn element_commands(&self) -> impl Iterator<Item = &CommandEntry> {
		self.element.values()
	}

	/// Returns true if any scope binds `command_id`.
	pub fn binds(&self, command_id: &str) -> bool {
		self.session.values().chain(self.element.values()).any(|entry| entry.command_id == command_id)
	}

	/// Total number of compiled commands across both scopes.
	pub fn len(&self) -> usize {
		self.session.len() + self.element.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn scope(&self, scope: CommandScope) -> &IndexMap<String, CommandEntry> {
		match scope {
			CommandScope::Session => &self.session,
			CommandScope::Element => &self.element,
		}
	}

	fn scope_mut(&mut self, scope: CommandScope) -> &mut IndexMap<String, CommandEntry> {
		match scope {
			CommandScope::Session => &mut self.session,
			CommandScope::Element => &mut self.element,
		}
	}
}

/// Merges `specs` into a [`CommandTable`] according to `options`.
///
/// # Errors
///
/// Returns [`Error::CommandNameCollision`] if two different command ids
/// resolve to the same public name within one scope.
pub fn compile(specs: &[ProtocolSpec], options: &CompileOptions) -> Result<CommandTable> {
	let mut table = CommandTable::default();

	for spec in specs {
		for (route, method, descriptor) in spec.commands() {
			let command_id = descriptor.command.as_str();
			if options.exclusions.contains(command_id) {
				continue;
			}

			let (scope, name) = options.classify(command_id);
			let entries = table.scope_mut(scope);

			match entries.get_mut(name) {
				Some(existing) if existing.command_id == command_id => {
					tracing::trace!(
						command = name,
						from = %existing.source,
						to = spec.name(),
						"Command redefined; later specification wins"
					);
					existing.route = route.to_string();
					existing.method = method;
					existing.source = spec.name().to_string();
				}
				Some(existing) => {
					return Err(Error::CommandNameCollision {
						scope: scope.as_str(),
						name: name.to_string(),
						existing: existing.command_id.clone(),
						incoming: command_id.to_string(),
					});
				}
				None => {
					entries.insert(
						name.to_string(),
						CommandEntry {
							name: name.to_string(),
							scope,
							command_id: command_id.to_string(),
							route: route.to_string(),
							method,
							source: spec.name().to_string(),
						},
					);
				}
			}
		}
	}

	Ok(table)
}
