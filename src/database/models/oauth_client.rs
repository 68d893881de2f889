use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OAuth client entity - stored client-credential registration
///
/// One flat row per registered client; `client_id` is the only key and the
/// table enforces the only invariant (uniqueness of that key).
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::database::schema::oauth_client_details)]
#[diesel(primary_key(client_id))]
pub struct OAuthClient {
    /// Unique client identifier
    pub client_id: String,

    /// Client secret used for the client-credential grant
    pub client_secret: String,

    /// Space-delimited scope list granted to the client
    pub scope: String,

    /// Comma-delimited grant types the client may use
    pub authorized_grant_types: String,
}

/// New OAuth client for insertion or update
#[derive(Debug, Clone, Insertable, AsChangeset, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::database::schema::oauth_client_details)]
pub struct NewOAuthClient {
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
    pub authorized_grant_types: String,
}

impl NewOAuthClient {
    pub fn new(
        client_id: String,
        client_secret: String,
        scope: String,
        authorized_grant_types: String,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            scope,
            authorized_grant_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_oauth_client() {
        let client = NewOAuthClient::new(
            "guru-dashboard".to_string(),
            "s3cr3t".to_string(),
            "read".to_string(),
            "client_credentials".to_string(),
        );

        assert_eq!(client.client_id, "guru-dashboard");
        assert_eq!(client.client_secret, "s3cr3t");
        assert_eq!(client.scope, "read");
        assert_eq!(client.authorized_grant_types, "client_credentials");
    }
}
