//! Wire types for the WebDriver protocol family.
//!
//! This crate contains the serde-serializable types exchanged with a
//! WebDriver remote end (W3C WebDriver, JSONWP, MJSONWP and the Appium
//! extensions) together with the declarative protocol tables that map
//! wire routes to command identifiers.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization/deserialization
//! - **1:1 with protocol**: Match the wire shapes the remote ends speak
//! - **Stable**: Changes only when the wire protocol changes
//!
//! Sessions, element handles and command dispatch are built on top of these
//! types in `wd-rs`.

pub mod capabilities;
pub mod element;
pub mod locator;
pub mod spec;
pub mod types;

pub use capabilities::*;
pub use element::*;
pub use locator::*;
pub use spec::*;
pub use types::*;
