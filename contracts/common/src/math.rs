//! Checked Arithmetic
//!
//! Additions that could leave the representable range surface as a typed
//! error instead of wrapping or panicking. Subtractions in the ledger are
//! always guarded by an explicit comparison first, so they carry their own
//! context-specific errors at the call site.

use crate::errors::{TokenError, TokenResult};
use crate::types::U256;

/// Add two amounts, failing with `Overflow` if the sum exceeds `U256::MAX`
pub fn safe_add(a: U256, b: U256) -> TokenResult<U256> {
    a.checked_add(b).ok_or(TokenError::Overflow)
}

/// Split an amount into (whole tokens, fractional base units) for display
pub fn format_amount(amount: U256) -> (U256, U256) {
    let one = crate::constants::token::ONE;
    (amount / one, amount % one)
}
