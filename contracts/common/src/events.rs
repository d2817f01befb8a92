//! Ledger Events
//!
//! Every successful mutation appends a record to the ledger's event log:
//! balance changes append a `Transfer`, allowance changes append an
//! `Approval` carrying the new absolute allowance. The log is append-only
//! and externally observable; the ledger never reads it back.

use serde::{Deserialize, Serialize};

use crate::types::{Address, U256};

/// Event types for indexing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventType {
    Transfer = 0x01,
    Approval = 0x02,
}

/// Event records emitted by the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// Emitted on every balance change, including the construction mint
    /// (which uses the zero address as `from`)
    Transfer {
        from: Address,
        to: Address,
        amount: U256,
    },

    /// Emitted on every allowance change with the new absolute allowance
    Approval {
        owner: Address,
        spender: Address,
        amount: U256,
    },
}

impl TokenEvent {
    /// Get the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Transfer { .. } => EventType::Transfer,
            Self::Approval { .. } => EventType::Approval,
        }
    }
}

/// Append-only log of emitted events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<TokenEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (add to log)
    pub fn emit(&mut self, event: TokenEvent) {
        self.events.push(event);
    }

    /// Get all events in emission order
    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    /// Take ownership of all events
    pub fn into_events(self) -> Vec<TokenEvent> {
        self.events
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&TokenEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Check if any events were emitted
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Get number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events were emitted
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
