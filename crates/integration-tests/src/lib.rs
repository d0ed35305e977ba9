//! Integration test support for the Afroman app core.
//!
//! The actual scenarios live in `tests/`; this crate exists so they can be
//! run as a workspace member (`cargo test -p afroman-integration-tests`).

#![cfg_attr(not(test), forbid(unsafe_code))]
