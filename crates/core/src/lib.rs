//! wd: WebDriver and Appium sessions driven by protocol tables
//!
//! This crate turns declarative protocol tables (W3C WebDriver, the JSON
//! Wire Protocol, its mobile extensions and Appium's additions) into the
//! command surface of a [`Session`] and the [`Element`]s it finds. The HTTP
//! transport is supplied by the caller as a [`CommandClient`].
//!
//! # Examples
//!
//! ## Finding and Interacting
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use wd::{LocatorStrategy, Session};
//!
//! async fn login(client: Arc<dyn wd::CommandClient>) -> wd::Result<()> {
//!     let session = Session::new(client)?;
//!     session.navigate_to("https://example.com/login").await?;
//!
//!     let user = session.find_element(LocatorStrategy::Id, "user").await?;
//!     user.send_keys("alice").await?;
//!
//!     // Wait for the dashboard to render
//!     let banner = session
//!         .wait_for_element(Duration::from_secs(5), LocatorStrategy::CssSelector, ".banner")
//!         .await?;
//!     assert_eq!(banner.text().await?, "Welcome, alice");
//!
//!     session.quit().await
//! }
//! ```
//!
//! ## Scripts and Elements
//!
//! ```ignore
//! use serde_json::json;
//! use wd::ScriptArg;
//!
//! let rows = session.find_elements("css selector", "tr").await?;
//! let height = session
//!     .execute_script(
//!         "return arguments[0].offsetHeight * arguments[1];",
//!         vec![ScriptArg::from(&rows[0]), json!(rows.len()).into()],
//!     )
//!     .await?;
//! ```
//!
//! ## Commands Without a Typed Wrapper
//!
//! Every command compiled from the tables is reachable by its public name:
//!
//! ```ignore
//! session.command("shake", vec![]).await?;
//! element.command("getCSSValue", vec![json!("display")]).await?;
//! ```

mod dispatch;

pub mod command_table;
pub mod config;
pub mod direct_connect;
pub mod element;
pub mod script;
pub mod session;

pub use command_table::{CommandEntry, CommandScope, CommandTable, CompileOptions, compile};
pub use config::SessionConfig;
pub use direct_connect::{DirectConnect, DirectConnectFamily, negotiate};
pub use element::Element;
pub use script::ScriptArg;
pub use session::Session;
pub use wd_protocol::{ConnectionTarget, Cookie, ElementKey, ElementRef, LocatorStrategy, Point, ProtocolSpec, Rect, Size, Timeouts};
pub use wd_runtime::{ClientOptions, CommandClient, Error, Result};
