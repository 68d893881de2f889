use crate::database::connection::{DatabaseError, PgPooledConnection};
use crate::database::models::{NewOAuthClient, OAuthClient};
use crate::database::schema::oauth_client_details;
use diesel::prelude::*;
use std::sync::Arc;

/// Client repository trait - defines interface for OAuth client operations
///
/// Each operation is a single parameterized statement against
/// `oauth_client_details`; no validation and no batching happen here.
#[async_trait::async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert a new client registration
    fn insert(&self, new_client: NewOAuthClient) -> Result<OAuthClient, DatabaseError>;

    /// Find a client by its identifier
    fn find_by_id(&self, client_id: &str) -> Result<Option<OAuthClient>, DatabaseError>;

    /// Update a client's secret, scope, and grant types
    /// Returns `None` when no row matched the identifier
    fn update(
        &self,
        client_id: &str,
        client: NewOAuthClient,
    ) -> Result<Option<OAuthClient>, DatabaseError>;

    /// Delete a client by its identifier
    /// Returns true if a row was deleted
    fn delete(&self, client_id: &str) -> Result<bool, DatabaseError>;
}

/// Concrete implementation of ClientRepository
///
/// Uses the PostgreSQL connection pool through a connection provider
pub struct ClientRepositoryImpl {
    get_conn: Arc<dyn Fn() -> Result<PgPooledConnection, DatabaseError> + Send + Sync>,
}

impl ClientRepositoryImpl {
    /// Create new client repository with connection provider
    pub fn new<F>(get_conn: F) -> Self
    where
        F: Fn() -> Result<PgPooledConnection, DatabaseError> + Send + Sync + 'static,
    {
        Self {
            get_conn: Arc::new(get_conn),
        }
    }
}

#[async_trait::async_trait]
impl ClientRepository for ClientRepositoryImpl {
    fn insert(&self, new_client: NewOAuthClient) -> Result<OAuthClient, DatabaseError> {
        let mut conn = (self.get_conn)()?;

        diesel::insert_into(oauth_client_details::table)
            .values(&new_client)
            .get_result::<OAuthClient>(&mut conn)
            .map_err(DatabaseError::from)
    }

    fn find_by_id(&self, client_id: &str) -> Result<Option<OAuthClient>, DatabaseError> {
        let mut conn = (self.get_conn)()?;

        oauth_client_details::table
            .filter(oauth_client_details::client_id.eq(client_id))
            .first::<OAuthClient>(&mut conn)
            .optional()
            .map_err(DatabaseError::from)
    }

    fn update(
        &self,
        client_id: &str,
        client: NewOAuthClient,
    ) -> Result<Option<OAuthClient>, DatabaseError> {
        let mut conn = (self.get_conn)()?;

        diesel::update(
            oauth_client_details::table.filter(oauth_client_details::client_id.eq(client_id)),
        )
        .set(&client)
        .get_result::<OAuthClient>(&mut conn)
        .optional()
        .map_err(DatabaseError::from)
    }

    fn delete(&self, client_id: &str) -> Result<bool, DatabaseError> {
        let mut conn = (self.get_conn)()?;

        let deleted = diesel::delete(
            oauth_client_details::table.filter(oauth_client_details::client_id.eq(client_id)),
        )
        .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::debug_query;
    use diesel::pg::Pg;

    fn sample_client() -> NewOAuthClient {
        NewOAuthClient::new(
            "guru-dashboard".to_string(),
            "s3cr3t".to_string(),
            "read".to_string(),
            "client_credentials".to_string(),
        )
    }

    #[test]
    fn test_insert_sql_shape() {
        let query = diesel::insert_into(oauth_client_details::table).values(sample_client());
        let sql = debug_query::<Pg, _>(&query).to_string();

        assert!(sql.contains("INSERT INTO \"oauth_client_details\""));
        assert!(sql.contains("\"client_id\""));
        assert!(sql.contains("\"client_secret\""));
        assert!(sql.contains("\"scope\""));
        assert!(sql.contains("\"authorized_grant_types\""));
        assert!(sql.contains("$1"));
        assert!(sql.contains("$4"));
    }

    #[test]
    fn test_find_by_id_sql_shape() {
        let query = oauth_client_details::table
            .filter(oauth_client_details::client_id.eq("guru-dashboard"));
        let sql = debug_query::<Pg, _>(&query).to_string();

        assert!(sql.contains("FROM \"oauth_client_details\""));
        assert!(sql.contains("WHERE"));
        assert!(sql.contains("\"oauth_client_details\".\"client_id\" = $1"));
    }

    #[test]
    fn test_update_sql_shape() {
        let client = sample_client();
        let query = diesel::update(
            oauth_client_details::table
                .filter(oauth_client_details::client_id.eq("guru-dashboard")),
        )
        .set(&client);
        let sql = debug_query::<Pg, _>(&query).to_string();

        assert!(sql.contains("UPDATE \"oauth_client_details\" SET"));
        assert!(sql.contains("\"client_secret\" = $"));
        assert!(sql.contains("\"scope\" = $"));
        assert!(sql.contains("\"authorized_grant_types\" = $"));
        assert!(sql.contains("WHERE"));
    }

    #[test]
    fn test_delete_sql_shape() {
        let query = diesel::delete(
            oauth_client_details::table
                .filter(oauth_client_details::client_id.eq("guru-dashboard")),
        );
        let sql = debug_query::<Pg, _>(&query).to_string();

        assert!(sql.contains("DELETE FROM \"oauth_client_details\""));
        assert!(sql.contains("\"oauth_client_details\".\"client_id\" = $1"));
    }
}
