use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to register a new OAuth client
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    #[schema(example = "guru-dashboard")]
    pub client_id: String,
    #[schema(example = "s3cr3t")]
    pub client_secret: String,
    #[schema(example = "read")]
    pub scope: String,
    #[schema(example = "client_credentials")]
    pub authorized_grant_types: String,
}

/// Request to update an existing OAuth client
///
/// The client identifier comes from the path; the remaining columns are
/// replaced wholesale.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClientRequest {
    pub client_secret: String,
    pub scope: String,
    pub authorized_grant_types: String,
}

/// Response after deleting an OAuth client
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteClientResponse {
    pub client_id: String,
    pub deleted: bool,
}

/// Error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
