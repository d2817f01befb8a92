//! Deployment Constants
//!
//! Immutable parameters of the token deployment. The hard cap is the
//! exact total supply: it is minted once at construction and the ledger
//! never mints or burns afterwards.

/// Token configuration
pub mod token {
    use alloy_primitives::U256;

    /// Decimal places (Ethereum-style 18 decimals)
    pub const DECIMALS: u8 = 18;

    /// One whole token in base units (10^18)
    pub const ONE: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

    /// Hard cap: 10 billion whole tokens, 10_000_000_000 * 10^18 base units.
    /// Limbs encode the decimal value 10^28.
    pub const HARD_CAP: U256 = U256::from_limbs([0x3e25026110000000, 0x204fce5e, 0, 0]);
}
