use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{CreateTenantRequest, Tenant};

pub async fn create_tenant(conn: AsyncDbConnection, request: &CreateTenantRequest) -> Result<Tenant> {
    let conn = conn.lock().await?;
    let now = chrono::Utc::now().timestamp();

    let id: i64 = conn.query_row(
        "INSERT INTO tenants (name, default_language, default_country, created_at)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING id",
        rusqlite::params![
            &request.name,
            request.default_language.as_deref(),
            request.default_country.as_deref(),
            now
        ],
        |row| row.get(0),
    )?;

    Ok(Tenant {
        id,
        name: request.name.clone(),
        default_language: request.default_language.clone(),
        default_country: request.default_country.clone(),
        created_at: now,
    })
}

pub async fn get_tenant(conn: AsyncDbConnection, id: i64) -> Result<Option<Tenant>> {
    let conn = conn.lock().await?;

    let tenant = conn
        .query_row(
            "SELECT id, name, default_language, default_country, created_at
             FROM tenants
             WHERE id = ?1",
            [id],
            |row| {
                Ok(Tenant {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    default_language: row.get(2)?,
                    default_country: row.get(3)?,
                    created_at: row.get(4)?,
                })
            },
        )
        .optional()
        .map_err(|e| anyhow::anyhow!("Failed to get tenant: {}", e))?;

    Ok(tenant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;

    #[tokio::test]
    async fn test_create_and_get_tenant() {
        let db = Database::in_memory().unwrap();

        let created = create_tenant(
            db.connection(),
            &CreateTenantRequest {
                name: "Riverside Club".to_string(),
                default_language: Some("de".to_string()),
                default_country: Some("DE".to_string()),
            },
        )
        .await
        .unwrap();

        let fetched = get_tenant(db.connection(), created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Riverside Club");
        assert_eq!(fetched.default_language.as_deref(), Some("de"));
        assert_eq!(fetched.default_country.as_deref(), Some("DE"));
    }

    #[tokio::test]
    async fn test_missing_tenant() {
        let db = Database::in_memory().unwrap();
        assert!(get_tenant(db.connection(), 42).await.unwrap().is_none());
    }
}
