//! Reference table of known products and their nominal default capacities.
//!
//! Static configuration for the boundary layer's convenience (prefilled
//! choices, default capacities). It has no effect on core invariants — any
//! product name is accepted by the registry.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A known product and the nominal capacity of a warehouse dedicated to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnownProduct {
    pub name: &'static str,
    pub default_capacity: f64,
}

/// The fixed ten-entry product table.
pub const KNOWN_PRODUCTS: [KnownProduct; 10] = [
    KnownProduct { name: "Apple", default_capacity: 5.0 },
    KnownProduct { name: "Banana", default_capacity: 3.0 },
    KnownProduct { name: "Orange", default_capacity: 4.0 },
    KnownProduct { name: "Grape", default_capacity: 2.0 },
    KnownProduct { name: "Mango", default_capacity: 6.0 },
    KnownProduct { name: "Strawberry", default_capacity: 1.5 },
    KnownProduct { name: "Watermelon", default_capacity: 10.0 },
    KnownProduct { name: "Pineapple", default_capacity: 8.0 },
    KnownProduct { name: "Peach", default_capacity: 3.5 },
    KnownProduct { name: "Pear", default_capacity: 4.5 },
];

/// Cached name index - built once and reused across lookups
static CAPACITY_INDEX: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    KNOWN_PRODUCTS
        .iter()
        .map(|p| (p.name, p.default_capacity))
        .collect()
});

/// Nominal default capacity for a known product name, if any.
pub fn default_capacity(name: &str) -> Option<f64> {
    CAPACITY_INDEX.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_ten_entries() {
        assert_eq!(KNOWN_PRODUCTS.len(), 10);
    }

    #[test]
    fn test_default_capacity_lookup() {
        assert_eq!(default_capacity("Apple"), Some(5.0));
        assert_eq!(default_capacity("Strawberry"), Some(1.5));
        assert_eq!(default_capacity("Durian"), None);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        // The table is display data; lookups are spelled exactly.
        assert_eq!(default_capacity("apple"), None);
    }
}
