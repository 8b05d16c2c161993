//! Demo dataset loaded at startup when `seed.demo` is enabled

use chrono::{NaiveDate, TimeZone, Utc};

use crate::{
    models::{
        enums::{ItemCondition, ItemStatus, RequestCategory, RequestPriority, RequestStatus},
        InventoryItem, SupportRequest,
    },
    repository::Repository,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn item(
    name: &str,
    item_type: &str,
    location: &str,
    serial_number: &str,
    condition: ItemCondition,
    purchase_date: NaiveDate,
    status: ItemStatus,
) -> InventoryItem {
    InventoryItem {
        id: 0,
        name: name.to_string(),
        item_type: item_type.to_string(),
        location: location.to_string(),
        serial_number: serial_number.to_string(),
        condition,
        purchase_date: Some(purchase_date),
        status,
        reason: None,
        disposal_date: None,
        manufacturer: None,
        model: None,
        warranty: None,
        description: None,
    }
}

fn request(
    ticket_number: &str,
    title: &str,
    description: &str,
    requester: &str,
    office: &str,
    category: RequestCategory,
    priority: RequestPriority,
    status: RequestStatus,
    date_created: NaiveDate,
) -> SupportRequest {
    SupportRequest {
        id: 0,
        ticket_number: ticket_number.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        requester: Some(requester.to_string()),
        office: office.to_string(),
        category,
        priority,
        status,
        date_created,
        additional_info: None,
    }
}

/// Populate the stores with the demo dataset
pub async fn seed_demo_data(repository: &Repository) {
    seed_inventory(repository).await;
    seed_requests(repository).await;
    seed_messages(repository).await;

    tracing::info!("Demo dataset seeded");
}

async fn seed_inventory(repository: &Repository) {
    let active = [
        item(
            "Dell OptiPlex 7090",
            "Desktop",
            "Principal Office",
            "DL001",
            ItemCondition::Good,
            date(2023, 1, 15),
            ItemStatus::Active,
        ),
        item(
            "HP LaserJet Pro",
            "Printer",
            "Teacher Lounge",
            "HP002",
            ItemCondition::Good,
            date(2023, 3, 10),
            ItemStatus::Active,
        ),
        item(
            "Lenovo ThinkPad T14",
            "Laptop",
            "Room 101",
            "LN003",
            ItemCondition::Excellent,
            date(2023, 5, 20),
            ItemStatus::Active,
        ),
        item(
            "Cisco WS-C2960X",
            "Network Switch",
            "Server Room",
            "CS004",
            ItemCondition::Good,
            date(2022, 11, 5),
            ItemStatus::Active,
        ),
        item(
            "ASUS VP249HE Monitor",
            "Monitor",
            "Room 205",
            "AS005",
            ItemCondition::Good,
            date(2023, 7, 12),
            ItemStatus::Active,
        ),
    ];
    for entry in active {
        repository.inventory.insert(entry).await;
    }

    let mut old_dell = item(
        "Old Dell Desktop",
        "Desktop",
        "Storage",
        "DL006",
        ItemCondition::Fair,
        date(2020, 1, 10),
        ItemStatus::Inactive,
    );
    old_dell.reason = Some("Replaced by newer model".to_string());
    repository.inventory.insert(old_dell).await;

    let mut canon = item(
        "Canon Printer MG2570",
        "Printer",
        "Storage",
        "CN007",
        ItemCondition::Poor,
        date(2019, 8, 15),
        ItemStatus::Inactive,
    );
    canon.reason = Some("Frequent paper jams".to_string());
    repository.inventory.insert(canon).await;

    let mut ibm = item(
        "IBM ThinkCentre",
        "Desktop",
        "Disposed",
        "IB008",
        ItemCondition::NeedsRepair,
        date(2018, 3, 1),
        ItemStatus::Disposed,
    );
    ibm.reason = Some("Hardware failure".to_string());
    ibm.disposal_date = Some(date(2023, 12, 1));
    repository.inventory.insert(ibm).await;
}

async fn seed_requests(repository: &Repository) {
    let requests = [
        request(
            "TK-2024-001",
            "Computer Not Starting",
            "The desktop computer in my office is not turning on. I tried pressing the power button multiple times but nothing happens.",
            "John Smith",
            "Principal Office",
            RequestCategory::Hardware,
            RequestPriority::High,
            RequestStatus::Pending,
            date(2024, 1, 15),
        ),
        request(
            "TK-2024-002",
            "Printer Paper Jam",
            "The office printer keeps getting paper jams every time we try to print documents.",
            "Mary Johnson",
            "Teacher Lounge",
            RequestCategory::Hardware,
            RequestPriority::Medium,
            RequestStatus::Pending,
            date(2024, 1, 14),
        ),
        request(
            "TK-2024-003",
            "WiFi Connection Issues",
            "Students are unable to connect to the school WiFi network in classroom 205.",
            "David Brown",
            "Room 205",
            RequestCategory::Network,
            RequestPriority::High,
            RequestStatus::Approved,
            date(2024, 1, 13),
        ),
    ];
    for entry in requests {
        repository.requests.insert(entry).await;
    }
}

async fn seed_messages(repository: &Repository) {
    let timestamp = |hour, minute| {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0)
            .single()
            .expect("valid seed timestamp")
    };

    repository
        .messages
        .push(
            "IT Support Team",
            "Hello! How can we help you today?",
            true,
            timestamp(9, 0),
        )
        .await;
    repository
        .messages
        .push(
            "You",
            "Hi, I have a question about my computer setup.",
            false,
            timestamp(9, 5),
        )
        .await;
    repository
        .messages
        .push(
            "John Smith (IT Support)",
            "I'd be happy to help you with your computer setup. What specific issue are you experiencing?",
            true,
            timestamp(9, 7),
        )
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_populates_all_stores() {
        let repository = Repository::new();
        seed_demo_data(&repository).await;

        let counts = repository.inventory.counts().await;
        assert_eq!(counts.active, 5);
        assert_eq!(counts.inactive, 2);
        assert_eq!(counts.disposed, 1);

        assert_eq!(repository.requests.list().await.len(), 3);
        assert_eq!(repository.requests.count_pending().await, 2);
        assert_eq!(repository.messages.list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_seeded_approved_request_is_terminal() {
        let repository = Repository::new();
        seed_demo_data(&repository).await;

        // TK-2024-003 was seeded as approved
        let approved = repository
            .requests
            .list()
            .await
            .into_iter()
            .find(|r| r.ticket_number == "TK-2024-003")
            .unwrap();
        assert!(repository.requests.reject(approved.id).await.is_err());
    }
}
