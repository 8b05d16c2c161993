//! Inventory service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        enums::ItemStatus,
        inventory::{CreateInventoryItem, InventoryCounts, InventoryItem},
        Notification,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Equipment data entry; new items always land in the active bucket
    pub async fn create(&self, data: &CreateInventoryItem) -> AppResult<(InventoryItem, Notification)> {
        data.validate()?;

        let item = InventoryItem {
            id: 0, // assigned by the store
            name: data.name.trim().to_string(),
            item_type: data.item_type.trim().to_string(),
            location: data.location.trim().to_string(),
            serial_number: data.serial_number.trim().to_string(),
            condition: data.condition,
            purchase_date: data.purchase_date,
            status: ItemStatus::Active,
            reason: None,
            disposal_date: None,
            manufacturer: data.manufacturer.clone(),
            model: data.model.clone(),
            warranty: data.warranty.clone(),
            description: data.description.clone(),
        };

        let item = self.repository.inventory.insert(item).await;
        tracing::info!(item = %item.name, id = item.id, "inventory item added");

        let notification = Notification::success(
            "Item Added Successfully",
            format!("{} has been added to the inventory.", item.name),
        );
        Ok((item, notification))
    }

    /// Items of one bucket, optionally filtered by a search term
    pub async fn search(&self, bucket: ItemStatus, term: &str) -> Vec<InventoryItem> {
        self.repository.inventory.search(bucket, term).await
    }

    pub async fn counts(&self) -> InventoryCounts {
        self.repository.inventory.counts().await
    }
}
