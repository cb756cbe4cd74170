//! The warehouse registry: owns all warehouses and the rules across them.
//!
//! The registry is an explicitly owned service object — process-lifetime in
//! the CLI, test-scoped in tests, never a global. It enforces
//! case-insensitive name uniqueness, performs the strict admission check
//! before any stock lands in a ledger, and allocates ids from a monotonic
//! counter that never reuses a value, even after deletion.
//!
//! Every operation validates first and mutates only on success, so a failed
//! call leaves the registry byte-for-byte unchanged.

use crate::types::{WarehouseId, WarehouseKind};
use crate::warehouse::Warehouse;
use serde::{Deserialize, Serialize};

/// Why a rename/resize was rejected.
///
/// This is the one operation whose callers need to distinguish the reason;
/// the others get by with `bool` or `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UpdateError {
    #[error("Warehouse not found")]
    NotFound,

    #[error("Name already exists")]
    NameTaken,

    #[error("Capacity cannot be less than current balance")]
    CapacityBelowBalance,
}

/// All warehouses, ordered by creation id ascending.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    warehouses: Vec<Warehouse>,
    // Last issued id; ids start at 1 and are never reused.
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a warehouse, or `None` if the name is already taken
    /// (case-insensitive). The new warehouse starts with balance 0 and no
    /// products regardless of the requested capacity.
    pub fn create(&mut self, name: &str, capacity: f64, kind: WarehouseKind) -> Option<WarehouseId> {
        if self.name_exists(name, None) {
            tracing::warn!("Refusing to create warehouse {:?}: name taken", name);
            return None;
        }
        self.next_id += 1;
        let id = WarehouseId(self.next_id);
        self.warehouses
            .push(Warehouse::new(id, name.to_string(), capacity, kind));
        tracing::info!("Created warehouse {:?} (id {})", name, id);
        Some(id)
    }

    pub fn get(&self, id: WarehouseId) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.id() == id)
    }

    fn get_mut(&mut self, id: WarehouseId) -> Option<&mut Warehouse> {
        self.warehouses.iter_mut().find(|w| w.id() == id)
    }

    /// All warehouses, stable order by creation id ascending.
    pub fn list(&self) -> &[Warehouse] {
        &self.warehouses
    }

    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty()
    }

    /// Case-insensitive name check, optionally excluding one warehouse so a
    /// rename can collide with the warehouse's own unchanged name.
    pub fn name_exists(&self, name: &str, exclude: Option<WarehouseId>) -> bool {
        let folded = name.to_lowercase();
        self.warehouses
            .iter()
            .filter(|w| Some(w.id()) != exclude)
            .any(|w| w.name().to_lowercase() == folded)
    }

    /// Update name and capacity together in one logical step.
    ///
    /// Validation order matches the reference behavior: unknown id, then
    /// name collision, then capacity. Shrinking below the current balance is
    /// rejected outright rather than clamped — silently destroying recorded
    /// product quantity is not this layer's call to make. Balance is
    /// untouched on success.
    pub fn rename_and_resize(
        &mut self,
        id: WarehouseId,
        new_name: &str,
        new_capacity: f64,
    ) -> Result<(), UpdateError> {
        let balance = self.get(id).ok_or(UpdateError::NotFound)?.balance();
        if self.name_exists(new_name, Some(id)) {
            return Err(UpdateError::NameTaken);
        }
        if new_capacity < balance {
            return Err(UpdateError::CapacityBelowBalance);
        }
        let w = self.get_mut(id).ok_or(UpdateError::NotFound)?;
        w.set_name(new_name.to_string());
        w.resize(new_capacity);
        tracing::info!("Updated warehouse {}: name {:?}, capacity {}", id, new_name, new_capacity);
        Ok(())
    }

    /// Add stock of a product. `false` (and no state change) when the
    /// warehouse is unknown, the quantity is non-positive, or the quantity
    /// exceeds the warehouse's remaining room.
    pub fn add_product(&mut self, id: WarehouseId, product: &str, quantity: f64) -> bool {
        let Some(w) = self.get_mut(id) else {
            tracing::warn!("add_product: warehouse {} not found", id);
            return false;
        };
        let ok = w.try_stock(product, quantity);
        if ok {
            tracing::info!("Added {} x {:?} to warehouse {}", quantity, product, id);
        } else {
            tracing::warn!(
                "Rejected {} x {:?} for warehouse {}: invalid or over capacity",
                quantity,
                product,
                id
            );
        }
        ok
    }

    /// Remove a product's entire recorded quantity. `false` when the
    /// warehouse is unknown or the product is not stocked there.
    pub fn remove_product(&mut self, id: WarehouseId, product: &str) -> bool {
        let Some(w) = self.get_mut(id) else {
            tracing::warn!("remove_product: warehouse {} not found", id);
            return false;
        };
        match w.remove_stock(product) {
            Some(quantity) => {
                tracing::info!("Removed {} x {:?} from warehouse {}", quantity, product, id);
                true
            }
            None => false,
        }
    }

    /// Delete a warehouse and all its products as one unit. `false` if the
    /// id is unknown. Nothing remains queryable for the id afterwards.
    pub fn delete(&mut self, id: WarehouseId) -> bool {
        match self.warehouses.iter().position(|w| w.id() == id) {
            Some(idx) => {
                self.warehouses.remove(idx);
                tracing::info!("Deleted warehouse {}", id);
                true
            }
            None => false,
        }
    }
}
