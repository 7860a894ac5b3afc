//! # ruvds-core
//!
//! Core types and utilities for working with the RUVDS management API.
//!
//! This crate provides the foundational pieces shared by RUVDS client crates:
//! the error taxonomy, strongly-typed resource identifiers, query parameter
//! helpers, and HTTP client configuration.
//!
//! ## Modules
//!
//! - [`error`] - Error types surfaced by API operations
//! - [`id`] - Strongly-typed identifiers for RUVDS resources
//! - [`query`] - Query parameter builder
//! - [`config`] - Client configuration (endpoint, token, timeout)
//! - [`client`] - HTTP transport tuning knobs

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod id;
pub mod query;

// Re-export commonly used types
pub use error::{Error, Result};
