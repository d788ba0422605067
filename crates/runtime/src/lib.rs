//! WebDriver Runtime - transport seam, connection options, and errors
//!
//! This crate sits between the wire types in `wd-protocol` and the session
//! API in `wd-rs`:
//!
//! - **Client seam**: [`CommandClient`], the object every command flows
//!   through. Implementations own the HTTP transport and turn a command id
//!   plus positional arguments into a request.
//! - **Connection options**: [`ClientOptions`] and [`SharedOptions`], the
//!   mutable connection target and the negotiated capabilities.
//! - **Errors**: the [`Error`] taxonomy shared by every layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │    wd-rs    │  Session, Element, command table
//! └──────┬──────┘
//!        │ Arc<dyn CommandClient>
//! ┌──────▼──────┐
//! │ wd-runtime  │  This crate
//! └──────┬──────┘
//!        │ implemented by
//! ┌──────▼──────┐
//! │  transport  │  HTTP client owned by the embedding application
//! └─────────────┘
//! ```

pub mod client;
pub mod error;
pub mod testing;

pub use client::{ClientOptions, CommandClient, CommandFuture, SharedOptions};
pub use error::{Error, Result};
