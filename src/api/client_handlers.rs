use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::database::connection::DatabaseError;
use crate::database::models::{NewOAuthClient, OAuthClient};
use crate::database::repositories::ClientRepository;

use super::responses::{CreateClientRequest, DeleteClientResponse, UpdateClientRequest};

/// Shared state for client store handlers
#[derive(Clone)]
pub struct DatabaseState {
    pub client_repository: Arc<dyn ClientRepository>,
}

/// Map a store failure to an HTTP response
///
/// Uniqueness is enforced by the table alone, so a duplicate insert shows up
/// here as the database's own violation.
fn db_error_response(e: DatabaseError) -> (StatusCode, String) {
    match &e {
        DatabaseError::DieselError(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => (StatusCode::CONFLICT, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// Register a new OAuth client
#[utoipa::path(
    post,
    path = "/api/v1/clients",
    tag = "clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client registered", body = OAuthClient),
        (status = 409, description = "Client id already registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_client(
    State(state): State<DatabaseState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<OAuthClient>), (StatusCode, String)> {
    let new_client = NewOAuthClient::new(
        request.client_id,
        request.client_secret,
        request.scope,
        request.authorized_grant_types,
    );

    state
        .client_repository
        .insert(new_client)
        .map(|client| (StatusCode::CREATED, Json(client)))
        .map_err(|e| {
            tracing::error!("Failed to insert client: {}", e);
            db_error_response(e)
        })
}

/// Get an OAuth client by id
#[utoipa::path(
    get,
    path = "/api/v1/clients/{client_id}",
    tag = "clients",
    params(
        ("client_id" = String, Path, description = "Client identifier")
    ),
    responses(
        (status = 200, description = "Client details", body = OAuthClient),
        (status = 404, description = "Client not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_client(
    State(state): State<DatabaseState>,
    Path(client_id): Path<String>,
) -> Result<Json<OAuthClient>, (StatusCode, String)> {
    state
        .client_repository
        .find_by_id(&client_id)
        .map_err(|e| {
            tracing::error!("Failed to get client {}: {}", client_id, e);
            db_error_response(e)
        })?
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                format!("Client {} not found", client_id),
            )
        })
}

/// Update an OAuth client
#[utoipa::path(
    put,
    path = "/api/v1/clients/{client_id}",
    tag = "clients",
    params(
        ("client_id" = String, Path, description = "Client identifier")
    ),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Updated client", body = OAuthClient),
        (status = 404, description = "Client not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_client(
    State(state): State<DatabaseState>,
    Path(client_id): Path<String>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<OAuthClient>, (StatusCode, String)> {
    let client = NewOAuthClient::new(
        client_id.clone(),
        request.client_secret,
        request.scope,
        request.authorized_grant_types,
    );

    state
        .client_repository
        .update(&client_id, client)
        .map_err(|e| {
            tracing::error!("Failed to update client {}: {}", client_id, e);
            db_error_response(e)
        })?
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                format!("Client {} not found", client_id),
            )
        })
}

/// Delete an OAuth client
#[utoipa::path(
    delete,
    path = "/api/v1/clients/{client_id}",
    tag = "clients",
    params(
        ("client_id" = String, Path, description = "Client identifier")
    ),
    responses(
        (status = 200, description = "Client deleted", body = DeleteClientResponse),
        (status = 404, description = "Client not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_client(
    State(state): State<DatabaseState>,
    Path(client_id): Path<String>,
) -> Result<Json<DeleteClientResponse>, (StatusCode, String)> {
    let deleted = state.client_repository.delete(&client_id).map_err(|e| {
        tracing::error!("Failed to delete client {}: {}", client_id, e);
        db_error_response(e)
    })?;

    if !deleted {
        return Err((
            StatusCode::NOT_FOUND,
            format!("Client {} not found", client_id),
        ));
    }

    Ok(Json(DeleteClientResponse {
        client_id,
        deleted: true,
    }))
}
