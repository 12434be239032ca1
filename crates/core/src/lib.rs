//! Peppercorn Core - Shared types library.
//!
//! This crate provides common types used across the Peppercorn components:
//! - `api` - The storefront backend service
//! - `integration-tests` - HTTP tests against a running backend
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and validated contact fields

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
