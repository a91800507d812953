use super::{GroupStore, TenantResolver};
use crate::database::{groups, tenants, AsyncDbConnection};
use async_trait::async_trait;
use shared_types::{CreatedGroup, NewGroup, NewMember, TenantDefaults};

/// `TenantResolver` and `GroupStore` backed by the SQLite pool
#[derive(Clone)]
pub struct SqliteStorage {
    conn: AsyncDbConnection,
}

impl SqliteStorage {
    pub fn new(conn: AsyncDbConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl TenantResolver for SqliteStorage {
    async fn tenant_defaults(&self, tenant_id: i64) -> anyhow::Result<Option<TenantDefaults>> {
        let tenant = tenants::get_tenant(self.conn.clone(), tenant_id).await?;

        Ok(tenant.map(|t| TenantDefaults {
            default_language: t.default_language,
            default_country: t.default_country,
        }))
    }
}

#[async_trait]
impl GroupStore for SqliteStorage {
    async fn find_group_by_email(&self, tenant_id: i64, email: &str) -> anyhow::Result<Option<i64>> {
        groups::find_group_by_email(self.conn.clone(), tenant_id, email).await
    }

    async fn create_group_with_member(
        &self,
        tenant_id: i64,
        group: NewGroup,
        member: NewMember,
    ) -> anyhow::Result<CreatedGroup> {
        groups::create_group_with_member(self.conn.clone(), tenant_id, &group, &member).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use shared_types::CreateTenantRequest;

    #[tokio::test]
    async fn test_tenant_defaults() {
        let db = Database::in_memory().unwrap();
        let tenant = tenants::create_tenant(
            db.connection(),
            &CreateTenantRequest {
                name: "Club".to_string(),
                default_language: Some("nl".to_string()),
                default_country: Some("NL".to_string()),
            },
        )
        .await
        .unwrap();

        let storage = SqliteStorage::new(db.connection());

        let defaults = storage.tenant_defaults(tenant.id).await.unwrap().unwrap();
        assert_eq!(defaults.default_language.as_deref(), Some("nl"));
        assert_eq!(defaults.default_country.as_deref(), Some("NL"));

        assert!(storage.tenant_defaults(tenant.id + 1).await.unwrap().is_none());
    }
}
