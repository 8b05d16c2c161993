//! Direct message endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{message::SendMessageRequest, Message, Notification},
};

use super::CurrentSession;

/// Response wrapping the sent message plus the notification to render
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: Message,
    pub notification: Notification,
}

/// The support thread in order
#[utoipa::path(
    get,
    path = "/messages",
    tag = "messages",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Message thread", body = Vec<Message>)
    )
)]
pub async fn list_messages(
    State(state): State<crate::AppState>,
    CurrentSession(_session): CurrentSession,
) -> AppResult<Json<Vec<Message>>> {
    Ok(Json(state.services.messages.list().await))
}

/// Send a message to the IT support team
#[utoipa::path(
    post,
    path = "/messages",
    tag = "messages",
    security(("bearer_auth" = [])),
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message sent", body = MessageResponse),
        (status = 400, description = "Blank message body")
    )
)]
pub async fn send_message(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
    Json(data): Json<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (message, notification) = state
        .services
        .messages
        .send(&session.username, &data)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message,
            notification,
        }),
    ))
}
