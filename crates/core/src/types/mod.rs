//! Core types for Peppercorn.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod contact;
pub mod id;

pub use contact::{ContactFieldError, CustomerName, MobileNumber};
pub use id::*;
