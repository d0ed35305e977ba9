//! Afroman Session - Entitlement state machine.
//!
//! This crate owns the session's access state (admin / subscribed / guest /
//! payment-pending) and the transition rules between them, backed by a
//! narrow key-value persistence interface.
//!
//! # Architecture
//!
//! - [`Session`] - the four access flags, a plain copyable snapshot
//! - [`EntitlementManager`] - owns a `Session` and applies the transition
//!   rules; the only writer of session state
//! - [`EntitlementConfig`] - injectable admin credentials, verification-code
//!   allowlist, and checkout link
//! - [`storage`] - the `KeyValueStore` trait, in-memory and file-backed
//!   implementations, and the best-effort persistence wrapper
//!
//! In-memory flags are the source of truth for the current session;
//! persistence is a best-effort carry-over to the next app launch. Storage
//! failures are logged and swallowed, never surfaced to callers.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod manager;
pub mod session;
pub mod storage;

pub use config::{AdminCredentials, EntitlementConfig};
pub use manager::EntitlementManager;
pub use session::{Session, keys};
pub use storage::{BestEffort, FileStore, KeyValueStore, MemoryStore, StorageError};
