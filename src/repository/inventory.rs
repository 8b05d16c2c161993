//! Inventory store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{
    enums::ItemStatus,
    inventory::{InventoryCounts, InventoryItem},
};

#[derive(Default)]
struct InventoryState {
    next_id: i32,
    items: Vec<InventoryItem>,
}

/// In-memory equipment catalog, partitioned into lifecycle buckets
#[derive(Clone, Default)]
pub struct InventoryRepository {
    inner: Arc<RwLock<InventoryState>>,
}

impl InventoryRepository {
    /// Append an item, assigning its local id
    pub async fn insert(&self, mut item: InventoryItem) -> InventoryItem {
        let mut state = self.inner.write().await;
        state.next_id += 1;
        item.id = state.next_id;
        state.items.push(item.clone());
        item
    }

    /// Items of one bucket, in original order
    pub async fn list(&self, bucket: ItemStatus) -> Vec<InventoryItem> {
        self.inner
            .read()
            .await
            .items
            .iter()
            .filter(|i| i.status == bucket)
            .cloned()
            .collect()
    }

    /// Case-insensitive OR-search over name, type, location and serial number
    /// within one bucket. A blank term returns the whole bucket.
    pub async fn search(&self, bucket: ItemStatus, term: &str) -> Vec<InventoryItem> {
        self.inner
            .read()
            .await
            .items
            .iter()
            .filter(|i| i.status == bucket && i.matches(term))
            .cloned()
            .collect()
    }

    /// Per-bucket totals for the dashboard summary tiles
    pub async fn counts(&self) -> InventoryCounts {
        let state = self.inner.read().await;
        let mut counts = InventoryCounts {
            active: 0,
            inactive: 0,
            disposed: 0,
        };
        for item in &state.items {
            match item.status {
                ItemStatus::Active => counts.active += 1,
                ItemStatus::Inactive => counts.inactive += 1,
                ItemStatus::Disposed => counts.disposed += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::ItemCondition;

    fn item(name: &str, item_type: &str, status: ItemStatus) -> InventoryItem {
        InventoryItem {
            id: 0,
            name: name.to_string(),
            item_type: item_type.to_string(),
            location: "Room 1".to_string(),
            serial_number: "SN000".to_string(),
            condition: ItemCondition::Good,
            purchase_date: None,
            status,
            reason: None,
            disposal_date: None,
            manufacturer: None,
            model: None,
            warranty: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_search_matches_one_item() {
        let repo = InventoryRepository::default();
        repo.insert(item("Dell OptiPlex 7090", "Desktop", ItemStatus::Active)).await;
        repo.insert(item("HP LaserJet", "Printer", ItemStatus::Active)).await;

        let hits = repo.search(ItemStatus::Active, "dell").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dell OptiPlex 7090");
    }

    #[tokio::test]
    async fn test_empty_term_returns_bucket_in_order() {
        let repo = InventoryRepository::default();
        repo.insert(item("Dell OptiPlex 7090", "Desktop", ItemStatus::Active)).await;
        repo.insert(item("HP LaserJet", "Printer", ItemStatus::Active)).await;
        repo.insert(item("Old Dell Desktop", "Desktop", ItemStatus::Inactive)).await;

        let hits = repo.search(ItemStatus::Active, "").await;
        let names: Vec<String> = hits.into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Dell OptiPlex 7090", "HP LaserJet"]);
    }

    #[tokio::test]
    async fn test_buckets_are_disjoint() {
        let repo = InventoryRepository::default();
        repo.insert(item("Dell OptiPlex 7090", "Desktop", ItemStatus::Active)).await;
        repo.insert(item("Old Dell Desktop", "Desktop", ItemStatus::Inactive)).await;
        repo.insert(item("IBM ThinkCentre", "Desktop", ItemStatus::Disposed)).await;

        assert_eq!(repo.list(ItemStatus::Active).await.len(), 1);
        assert_eq!(repo.list(ItemStatus::Inactive).await.len(), 1);
        assert_eq!(repo.list(ItemStatus::Disposed).await.len(), 1);

        let counts = repo.counts().await;
        assert_eq!(counts.active, 1);
        assert_eq!(counts.inactive, 1);
        assert_eq!(counts.disposed, 1);
    }
}
