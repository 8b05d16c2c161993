//! Support request service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppResult,
    ids,
    models::{
        enums::RequestStatus,
        request::{CreateRequest, SupportRequest},
        Notification,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and file a new support request.
    ///
    /// The requester is taken from the caller's session when present; the
    /// form itself does not carry it.
    pub async fn create(
        &self,
        data: &CreateRequest,
        requester: Option<&str>,
    ) -> AppResult<(SupportRequest, Notification)> {
        data.validate()?;

        let now = Utc::now();
        let ticket_number = {
            let mut rng = rand::thread_rng();
            ids::ticket_number(now, &mut rng)
        };

        let request = SupportRequest {
            id: 0, // assigned by the store
            ticket_number,
            title: data.title.trim().to_string(),
            description: data.description.trim().to_string(),
            requester: requester.map(|r| r.to_string()),
            office: data.office.trim().to_string(),
            category: data.category,
            priority: data.priority,
            status: RequestStatus::Pending,
            date_created: now.date_naive(),
            additional_info: data.additional_info.clone(),
        };

        let request = self.repository.requests.insert(request).await;
        tracing::info!(ticket = %request.ticket_number, "support request created");

        let notification = Notification::success(
            "Request Submitted Successfully",
            format!(
                "Your request {} has been submitted and is pending review.",
                request.ticket_number
            ),
        );
        Ok((request, notification))
    }

    /// All requests in creation order
    pub async fn list(&self) -> Vec<SupportRequest> {
        self.repository.requests.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<SupportRequest> {
        self.repository.requests.get(id).await
    }

    /// Approve a pending request
    pub async fn approve(&self, id: i32) -> AppResult<(SupportRequest, Notification)> {
        let request = self.repository.requests.approve(id).await?;
        tracing::info!(ticket = %request.ticket_number, "request approved");

        let notification = Notification::success(
            "Request Approved",
            "The request has been approved and assigned to a technician.",
        );
        Ok((request, notification))
    }

    /// Reject a pending request
    pub async fn reject(&self, id: i32) -> AppResult<(SupportRequest, Notification)> {
        let request = self.repository.requests.reject(id).await?;
        tracing::info!(ticket = %request.ticket_number, "request rejected");

        let notification = Notification::error("Request Rejected", "The request has been rejected.");
        Ok((request, notification))
    }
}
