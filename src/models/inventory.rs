//! Inventory item model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{ItemCondition, ItemStatus};
use super::request::validate_not_blank;

/// A tracked piece of school IT equipment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    /// Free-text category ("Desktop", "Printer", "Network Switch", ...)
    pub item_type: String,
    pub location: String,
    pub serial_number: String,
    pub condition: ItemCondition,
    pub purchase_date: Option<NaiveDate>,
    /// Lifecycle bucket the item currently sits in
    pub status: ItemStatus,
    /// Why the item left active service (inactive and disposed items)
    pub reason: Option<String>,
    /// When the item was disposed (disposed items only)
    pub disposal_date: Option<NaiveDate>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub warranty: Option<String>,
    pub description: Option<String>,
}

impl InventoryItem {
    /// Case-insensitive substring match over name, type, location and serial
    /// number. A blank term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.item_type.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
            || self.serial_number.to_lowercase().contains(&term)
    }
}

/// Equipment data entry payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryItem {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub item_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub condition: ItemCondition,
    pub purchase_date: Option<NaiveDate>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub warranty: Option<String>,
    pub description: Option<String>,
}

/// Per-bucket inventory totals
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct InventoryCounts {
    pub active: usize,
    pub inactive: usize,
    pub disposed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, item_type: &str, location: &str, serial: &str) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: name.to_string(),
            item_type: item_type.to_string(),
            location: location.to_string(),
            serial_number: serial.to_string(),
            condition: ItemCondition::Good,
            purchase_date: None,
            status: ItemStatus::Active,
            reason: None,
            disposal_date: None,
            manufacturer: None,
            model: None,
            warranty: None,
            description: None,
        }
    }

    #[test]
    fn test_matches_any_field() {
        let it = item("Dell OptiPlex 7090", "Desktop", "Principal Office", "DL001");
        assert!(it.matches("dell"));
        assert!(it.matches("DESKTOP"));
        assert!(it.matches("principal"));
        assert!(it.matches("dl001"));
        assert!(!it.matches("laserjet"));
    }

    #[test]
    fn test_blank_term_matches_all() {
        let it = item("HP LaserJet", "Printer", "Teacher Lounge", "HP002");
        assert!(it.matches(""));
        assert!(it.matches("   "));
    }
}
