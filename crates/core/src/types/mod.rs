//! Core types for the Afroman app.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod code;
pub mod id;
pub mod merch;
pub mod price;
pub mod video;

pub use code::{CodeError, VerificationCode};
pub use id::*;
pub use merch::{MerchItem, MerchType};
pub use price::{CurrencyCode, Price};
pub use video::Video;
