//! The capacity ledger: a bounded stock accumulator.
//!
//! A ledger holds a balance that is always within `[0, capacity]`. All
//! out-of-range numeric input is normalized (clamped), never rejected:
//! the domain treats "tried to overfill / overdraw" as a normal, frequent
//! occurrence, not an exceptional one. Callers that need strict admission
//! control check [`remaining_capacity`](CapacityLedger::remaining_capacity)
//! before depositing — the registry does exactly that.

use serde::{Deserialize, Serialize};

/// A bounded accumulator enforcing `0 <= balance <= capacity`.
///
/// Deserialization re-normalizes through the same clamping constructor, so
/// a hand-edited snapshot cannot smuggle in an invariant-breaking state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLedger")]
pub struct CapacityLedger {
    capacity: f64,
    balance: f64,
}

#[derive(Deserialize)]
struct RawLedger {
    capacity: f64,
    balance: f64,
}

impl From<RawLedger> for CapacityLedger {
    fn from(raw: RawLedger) -> Self {
        Self::with_balance(raw.capacity, raw.balance)
    }
}

impl CapacityLedger {
    /// Create an empty ledger. Non-positive (or NaN) capacity clamps to 0.
    pub fn new(capacity: f64) -> Self {
        Self::with_balance(capacity, 0.0)
    }

    /// Create a ledger with an initial balance. A negative initial balance
    /// clamps to 0; one above capacity clamps to capacity, the excess
    /// silently discarded. Construction never fails.
    pub fn with_balance(capacity: f64, initial_balance: f64) -> Self {
        let capacity = if capacity > 0.0 { capacity } else { 0.0 };
        // Comparisons fail closed: NaN lands in the zero branch.
        let balance = if !(initial_balance > 0.0) {
            0.0
        } else if initial_balance <= capacity {
            initial_balance
        } else {
            capacity
        };
        Self { capacity, balance }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// How much more the ledger can hold.
    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.balance
    }

    /// Add `amount` to the balance, saturating at capacity.
    ///
    /// A non-positive (or NaN) amount is a no-op. An amount exceeding the
    /// remaining room fills the ledger to exactly `capacity` — overflow is
    /// truncated, not rejected and not partially applied beyond the top.
    pub fn deposit(&mut self, amount: f64) {
        if !(amount > 0.0) {
            return;
        }
        if amount <= self.remaining_capacity() {
            self.balance += amount;
        } else {
            self.balance = self.capacity;
        }
    }

    /// Remove up to `amount` from the balance, returning what was removed.
    ///
    /// A non-positive (or NaN) amount returns 0 with no state change. An
    /// amount above the balance drains the ledger and returns the entire
    /// previous balance — a partial withdrawal, not a failure.
    pub fn withdraw(&mut self, amount: f64) -> f64 {
        if !(amount > 0.0) {
            return 0.0;
        }
        if amount > self.balance {
            let all_there_is = self.balance;
            self.balance = 0.0;
            return all_there_is;
        }
        self.balance -= amount;
        amount
    }

    /// Change the capacity. Negative (or NaN) input normalizes to 0.
    ///
    /// If the new capacity falls below the current balance the balance is
    /// clamped down to keep the ledger's own invariant. The registry rejects
    /// that situation before ever calling resize, because its callers need
    /// an error rather than a silent clamp.
    pub fn resize(&mut self, new_capacity: f64) {
        self.capacity = if new_capacity > 0.0 { new_capacity } else { 0.0 };
        if self.balance > self.capacity {
            self.balance = self.capacity;
        }
    }
}

impl std::fmt::Display for CapacityLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "balance = {}, space left = {}",
            self.balance,
            self.remaining_capacity()
        )
    }
}
