//! Civitai Share-URL Resolver
//!
//! This library resolves Civitai share/model page URLs into directly
//! fetchable download URLs, optionally authenticating with an API token
//! read from a local config file.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`config`] - API token loading from the local INI config file
//! - [`resolver`] - URL classification and resolution against the Civitai API
//! - [`node`] - Node descriptors and registry for host node-graph runtimes
//!
//! The resolution entry points are total: they always return a string and
//! never surface an error to the caller. Every failure path degrades to the
//! best available URL (the original input or a constructed fallback).

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod node;
pub mod resolver;

pub(crate) mod user_agent;

// Re-export commonly used types
pub use config::{ApiToken, default_config_path, load_token, load_token_from};
pub use node::{CivitaiShareToDirectUrl, Node, NodeDescriptor, build_default_node_registry};
pub use resolver::{CIVITAI_ORIGIN, CivitaiResolver, ResolveError, UrlClass, resolve_to_direct};
