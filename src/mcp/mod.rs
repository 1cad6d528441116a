//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes configuration, locale listing, key and page resolution and the
//! completeness check to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: tool router and stdio entry point
//! - `types`: tool parameter and result DTOs

mod server;
pub mod types;

pub use server::{PagetextMcpServer, run_server};
