//! Error Types for the Token Ledger
//!
//! Every rejected operation surfaces one of these typed errors. Errors are
//! detected before any state mutation, so a failed call leaves the ledger
//! observably unchanged. None of them is fatal to the process.

use core::fmt;

use crate::types::U256;

/// Result type alias for ledger operations
pub type TokenResult<T> = Result<T, TokenError>;

/// Rejection reasons for ledger operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Operation targets the reserved zero address
    ZeroAddress {
        /// Role the zero address was supplied for (e.g. "recipient", "spender")
        role: &'static str,
    },

    /// Debit exceeds the payer's current balance
    InsufficientBalance { available: U256, requested: U256 },

    /// Delegated transfer exceeds the remaining allowance
    InsufficientAllowance { remaining: U256, requested: U256 },

    /// Allowance decrease exceeds the current allowance
    AllowanceUnderflow { current: U256, subtracted: U256 },

    /// Arithmetic overflow occurred
    Overflow,
}

impl TokenError {
    /// Returns a stable error code for logging and boundary assertions
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroAddress { .. } => "E001_ZERO_ADDRESS",
            Self::InsufficientBalance { .. } => "E002_INSUFFICIENT_BALANCE",
            Self::InsufficientAllowance { .. } => "E003_INSUFFICIENT_ALLOWANCE",
            Self::AllowanceUnderflow { .. } => "E004_ALLOWANCE_UNDERFLOW",
            Self::Overflow => "E005_OVERFLOW",
        }
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAddress { role } => {
                write!(f, "{}: zero address is not a valid {role}", self.code())
            }
            Self::InsufficientBalance { available, requested } => {
                write!(
                    f,
                    "{}: balance {available} is less than requested {requested}",
                    self.code()
                )
            }
            Self::InsufficientAllowance { remaining, requested } => {
                write!(
                    f,
                    "{}: allowance {remaining} is less than requested {requested}",
                    self.code()
                )
            }
            Self::AllowanceUnderflow { current, subtracted } => {
                write!(
                    f,
                    "{}: cannot decrease allowance {current} by {subtracted}",
                    self.code()
                )
            }
            Self::Overflow => write!(f, "{}: arithmetic overflow", self.code()),
        }
    }
}

impl std::error::Error for TokenError {}
