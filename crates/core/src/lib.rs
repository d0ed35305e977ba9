//! Afroman Core - Shared types library.
//!
//! This crate provides common types used across all Afroman app components:
//! - `session` - Entitlement state machine (admin / subscription / guest)
//! - `cart` - Merch cart aggregation
//! - `catalog` - Static video and merchandise data
//! - `cli` - Command-line consumer for local testing
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! process state. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and codes,
//!   plus the catalog item types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
