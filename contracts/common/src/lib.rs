//! HCT Common Library
//!
//! Shared types, constants, and utilities for the hard-cap token ledger.
//! This crate provides the foundation the ledger contract is built on:
//!
//! - **Constants**: immutable deployment parameters (decimals, hard cap)
//! - **Errors**: typed rejection reasons with stable error codes
//! - **Types**: account addresses and 256-bit amounts
//! - **Math**: checked arithmetic that surfaces overflow as a typed error
//! - **Events**: append-only transfer/approval records

pub mod constants;
pub mod errors;
pub mod events;
pub mod math;
pub mod types;

// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use types::*;
