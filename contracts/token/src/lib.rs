//! HCT Token Ledger
//!
//! Single-asset, fixed-supply token ledger. The full hard cap is credited
//! to the initial holder at construction; afterwards the ledger only moves
//! balances around, directly (`transfer`) or through delegated spending
//! (`approve` / `transfer_from`).
//!
//! ## Key Properties
//!
//! - **Conservation**: the sum of all balances always equals the hard cap
//! - **All-or-nothing**: every check runs before any state write, so a
//!   failed call leaves the ledger observably unchanged
//! - **Explicit caller**: every mutation takes the authenticated caller as
//!   its first argument; there is no ambient authorization context
//! - **Single writer**: mutations take `&mut self`, so exclusive access is
//!   enforced by the borrow checker; callers needing shared access wrap
//!   the ledger in a lock of their choosing

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use hct_common::{
    constants::token,
    errors::{TokenError, TokenResult},
    events::{EventLog, TokenEvent},
    math,
    types::{Address, U256},
};


// ============ Ledger State ============

/// The token ledger: balances, allowances, and immutable metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Display name, set once at construction
    name: String,
    /// Ticker symbol, set once at construction
    symbol: String,
    /// Decimal precision (fixed at 18)
    decimals: u8,
    /// Maximum and actual total supply
    hard_cap: U256,
    /// Always equals `hard_cap`: the ledger never mints or burns after
    /// construction
    total_supply: U256,
    /// Account balances; absent key reads as zero
    balances: HashMap<Address, U256>,
    /// allowances[owner][spender]; absent entry reads as zero
    allowances: HashMap<Address, HashMap<Address, U256>>,
    /// Append-only record of every successful mutation
    events: EventLog,
}

impl Ledger {
    /// Create the ledger and credit the full hard cap to `initial_holder`.
    ///
    /// Fails with `ZeroAddress` if the holder is the zero address. Emits
    /// the mint record as a `Transfer` from the zero address.
    pub fn new(name: &str, symbol: &str, initial_holder: Address) -> TokenResult<Self> {
        require_nonzero(initial_holder, "initial holder")?;

        let mut ledger = Self {
            name: name.to_owned(),
            symbol: symbol.to_owned(),
            decimals: token::DECIMALS,
            hard_cap: token::HARD_CAP,
            total_supply: token::HARD_CAP,
            balances: HashMap::from([(initial_holder, token::HARD_CAP)]),
            allowances: HashMap::new(),
            events: EventLog::new(),
        };

        ledger.events.emit(TokenEvent::Transfer {
            from: Address::ZERO,
            to: initial_holder,
            amount: token::HARD_CAP,
        });

        Ok(ledger)
    }

    // ============ Queries ============

    /// Token display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token ticker symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Decimal precision
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Current total supply (always equal to the hard cap)
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Maximum total supply, fixed at construction
    pub fn hard_cap(&self) -> U256 {
        self.hard_cap
    }

    /// Balance of `account`, zero if the account has no history
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or(U256::ZERO)
    }

    /// Remaining amount `spender` may move out of `owner`'s balance
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&owner)
            .and_then(|spenders| spenders.get(&spender))
            .copied()
            .unwrap_or(U256::ZERO)
    }

    /// All events emitted so far, in emission order
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    // ============ Mutations ============

    /// Move `amount` from the caller's balance to `to`.
    ///
    /// Emits a `Transfer` record on success.
    pub fn transfer(&mut self, caller: Address, to: Address, amount: U256) -> TokenResult<()> {
        require_nonzero(caller, "sender")?;
        require_nonzero(to, "recipient")?;

        let available = self.balance_of(caller);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        math::safe_add(self.balance_of(to), amount)?;

        self.commit_transfer(caller, to, amount);
        Ok(())
    }

    /// Set `spender`'s allowance over the caller's balance to exactly
    /// `amount` (absolute overwrite, not additive).
    ///
    /// No balance check: an owner may approve more than they hold. Emits
    /// an `Approval` record on success.
    pub fn approve(&mut self, caller: Address, spender: Address, amount: U256) -> TokenResult<()> {
        require_nonzero(caller, "owner")?;
        require_nonzero(spender, "spender")?;

        self.commit_approval(caller, spender, amount);
        Ok(())
    }

    /// Raise `spender`'s allowance by `added`.
    ///
    /// Fails with `Overflow` if the new allowance would exceed the
    /// representable range. Emits an `Approval` with the new allowance.
    pub fn increase_allowance(
        &mut self,
        caller: Address,
        spender: Address,
        added: U256,
    ) -> TokenResult<()> {
        require_nonzero(caller, "owner")?;
        require_nonzero(spender, "spender")?;

        let current = self.allowance(caller, spender);
        let raised = math::safe_add(current, added)?;

        self.commit_approval(caller, spender, raised);
        Ok(())
    }

    /// Lower `spender`'s allowance by `subtracted`.
    ///
    /// Fails with `AllowanceUnderflow` if `subtracted` exceeds the current
    /// allowance; the underflow check runs first, before the address
    /// checks. Emits an `Approval` with the new allowance.
    pub fn decrease_allowance(
        &mut self,
        caller: Address,
        spender: Address,
        subtracted: U256,
    ) -> TokenResult<()> {
        let current = self.allowance(caller, spender);
        let lowered = current
            .checked_sub(subtracted)
            .ok_or(TokenError::AllowanceUnderflow { current, subtracted })?;

        require_nonzero(caller, "owner")?;
        require_nonzero(spender, "spender")?;

        self.commit_approval(caller, spender, lowered);
        Ok(())
    }

    /// Move `amount` from `from` to `to` on behalf of `from`, consuming
    /// the caller's allowance.
    ///
    /// Check order is part of the contract: zero-address checks, then the
    /// allowance check, then the balance check — an under-allowed call
    /// reports `InsufficientAllowance` even when the balance would also be
    /// short. Emits a `Transfer` and an `Approval` (with the reduced
    /// allowance) on success; both commit together or not at all.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> TokenResult<()> {
        require_nonzero(caller, "spender")?;
        require_nonzero(from, "sender")?;
        require_nonzero(to, "recipient")?;

        let remaining = self.allowance(from, caller);
        if remaining < amount {
            return Err(TokenError::InsufficientAllowance {
                remaining,
                requested: amount,
            });
        }

        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        math::safe_add(self.balance_of(to), amount)?;

        self.commit_transfer(from, to, amount);
        self.commit_approval(from, caller, remaining.saturating_sub(amount));
        Ok(())
    }

    // ============ Internal ============

    /// Apply a validated balance move and record it. The debit is read
    /// back before the credit so a self-transfer nets to zero.
    fn commit_transfer(&mut self, from: Address, to: Address, amount: U256) {
        let debited = self.balance_of(from).saturating_sub(amount);
        self.balances.insert(from, debited);

        let credited = self.balance_of(to).saturating_add(amount);
        self.balances.insert(to, credited);

        self.events.emit(TokenEvent::Transfer { from, to, amount });
    }

    /// Apply a validated allowance overwrite and record it
    fn commit_approval(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, amount);

        self.events.emit(TokenEvent::Approval {
            owner,
            spender,
            amount,
        });
    }
}

/// Reject the reserved zero address for the given role
fn require_nonzero(account: Address, role: &'static str) -> TokenResult<()> {
    if account.is_zero() {
        return Err(TokenError::ZeroAddress { role });
    }
    Ok(())
}

// ============ Tests ============
