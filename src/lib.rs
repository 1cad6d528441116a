//! pagetext - localized content resolution for marketing pages
//!
//! Resolves page copy from per-locale JSON message catalogs, either as flat
//! key lookups or as typed page structures, with catalog-level fallback to
//! the default locale. Ships a CLI and an MCP server on top of the engine.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale store, catalogs, caching, resolvers and page shapes
//! - `issues`: Issue types produced by the completeness check
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
