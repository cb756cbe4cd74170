//! Core domain types for the silo warehouse inventory system.

use serde::{Deserialize, Serialize};

/// Identifier of a warehouse.
///
/// Assigned once at creation from the registry's monotonic allocator and
/// never reused, even after the warehouse is deleted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(pub u64);

impl std::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Kind of warehouse.
///
/// Fixed at creation and purely cosmetic: it governs which product-name
/// input the boundary layer solicits, nothing in the core branches on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseKind {
    #[default]
    Fruit,
    Custom,
}

impl WarehouseKind {
    /// Parse a user-supplied kind string. Returns `None` for unknown input
    /// so the boundary layer can warn and fall back to the default.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fruit" => Some(Self::Fruit),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fruit => "fruit",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for WarehouseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(WarehouseKind::parse("fruit"), Some(WarehouseKind::Fruit));
        assert_eq!(WarehouseKind::parse("Custom"), Some(WarehouseKind::Custom));
        assert_eq!(WarehouseKind::parse("veggie"), None);
    }

    #[test]
    fn test_kind_serde_snake_case() {
        let json = serde_json::to_string(&WarehouseKind::Fruit).unwrap();
        assert_eq!(json, "\"fruit\"");
        let parsed: WarehouseKind = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(parsed, WarehouseKind::Custom);
    }
}
