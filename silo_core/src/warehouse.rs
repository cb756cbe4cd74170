//! A warehouse record: one capacity ledger paired with a product mapping.
//!
//! The per-warehouse invariant is `sum(products.values()) == ledger.balance`
//! whenever the record is observed between operations. It spans a scalar and
//! a mapping, so the two are only ever updated together, inside a single
//! method — no intermediate state is observable. The mutators are
//! crate-private: all external mutation flows through the registry.

use crate::ledger::CapacityLedger;
use crate::types::{WarehouseId, WarehouseKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named, capacity-bounded warehouse and the products stocked in it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    id: WarehouseId,
    name: String,
    kind: WarehouseKind,
    ledger: CapacityLedger,
    products: HashMap<String, f64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Warehouse {
    pub(crate) fn new(id: WarehouseId, name: String, capacity: f64, kind: WarehouseKind) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            kind,
            ledger: CapacityLedger::new(capacity),
            products: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> WarehouseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> WarehouseKind {
        self.kind
    }

    pub fn ledger(&self) -> &CapacityLedger {
        &self.ledger
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    pub fn capacity(&self) -> f64 {
        self.ledger.capacity()
    }

    pub fn remaining_capacity(&self) -> f64 {
        self.ledger.remaining_capacity()
    }

    /// Product name → stocked quantity. Insertion order is irrelevant.
    pub fn products(&self) -> &HashMap<String, f64> {
        &self.products
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Stock `quantity` units of `product`, or refuse with no state change.
    ///
    /// Refuses when the quantity is non-positive (NaN fails closed) or
    /// exceeds the remaining room — a strict admission check, independent of
    /// the ledger's saturating deposit. On success the ledger balance grows
    /// by exactly `quantity` and the product entry is incremented (created
    /// at `quantity` if absent), so repeated additions accumulate.
    pub(crate) fn try_stock(&mut self, product: &str, quantity: f64) -> bool {
        if !(quantity > 0.0) {
            return false;
        }
        if quantity > self.ledger.remaining_capacity() {
            return false;
        }
        self.ledger.deposit(quantity);
        *self.products.entry(product.to_string()).or_insert(0.0) += quantity;
        self.updated_at = Utc::now();
        true
    }

    /// Remove a product entirely, returning the quantity that was stocked.
    ///
    /// Removal always empties the product's full recorded quantity; there is
    /// no partial removal. `None` if the product is not stocked here.
    pub(crate) fn remove_stock(&mut self, product: &str) -> Option<f64> {
        let quantity = self.products.remove(product)?;
        self.ledger.withdraw(quantity);
        self.updated_at = Utc::now();
        Some(quantity)
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub(crate) fn resize(&mut self, new_capacity: f64) {
        self.ledger.resize(new_capacity);
        self.updated_at = Utc::now();
    }
}
