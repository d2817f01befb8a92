//! Core Types
//!
//! Account identifiers and amounts. Addresses are opaque 20-byte values;
//! `Address::ZERO` is reserved and may never hold a balance, receive a
//! transfer, or appear on either side of an allowance.

pub use alloy_primitives::{Address, U256};

/// The reserved zero address
pub const ZERO_ADDRESS: Address = Address::ZERO;
