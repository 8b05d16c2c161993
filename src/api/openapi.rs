//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, guides, health, incidents, inventory, messages, requests, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Helpdesk API",
        version = "1.0.0",
        description = "School IT Support Portal REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::logout,
        auth::me,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::approve_request,
        requests::reject_request,
        // Incidents
        incidents::create_incident,
        incidents::list_incidents,
        // Inventory
        inventory::list_inventory,
        inventory::inventory_counts,
        inventory::create_item,
        // Messages
        messages::list_messages,
        messages::send_message,
        // Guides
        guides::list_guides,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            auth::LoginResponse,
            crate::models::session::LoginRequest,
            crate::models::Session,
            // Requests
            crate::models::SupportRequest,
            crate::models::request::CreateRequest,
            requests::RequestResponse,
            // Incidents
            crate::models::IncidentDraft,
            crate::models::IncidentReport,
            incidents::IncidentResponse,
            // Inventory
            crate::models::InventoryItem,
            crate::models::inventory::CreateInventoryItem,
            crate::models::InventoryCounts,
            inventory::ItemResponse,
            // Messages
            crate::models::Message,
            crate::models::message::SendMessageRequest,
            messages::MessageResponse,
            // Guides
            crate::models::TroubleshootGuide,
            // Stats
            crate::services::stats::StatsOverview,
            // Shared
            crate::models::Notification,
            crate::models::enums::RequestStatus,
            crate::models::enums::RequestPriority,
            crate::models::enums::RequestCategory,
            crate::models::enums::ItemCondition,
            crate::models::enums::ItemStatus,
            crate::models::enums::ReplacementSource,
            crate::models::enums::Role,
            crate::models::enums::NotificationKind,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Session management"),
        (name = "requests", description = "Support request lifecycle"),
        (name = "incidents", description = "Incident reports"),
        (name = "inventory", description = "Equipment inventory"),
        (name = "messages", description = "Direct messages with IT support"),
        (name = "guides", description = "Troubleshooting guides"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
