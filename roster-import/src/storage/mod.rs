pub mod sqlite_storage;

pub use sqlite_storage::SqliteStorage;

use anyhow::Result;
use async_trait::async_trait;
use shared_types::{CreatedGroup, NewGroup, NewMember, TenantDefaults};

/// Looks up the defaults a tenant contributes to imported records
#[async_trait]
pub trait TenantResolver: Send + Sync {
    /// `Ok(None)` when the tenant does not exist
    async fn tenant_defaults(&self, tenant_id: i64) -> Result<Option<TenantDefaults>>;
}

/// Persistence for groups and their members
#[async_trait]
pub trait GroupStore: Send + Sync {
    async fn find_group_by_email(&self, tenant_id: i64, email: &str) -> Result<Option<i64>>;

    /// Must create both records or neither
    async fn create_group_with_member(
        &self,
        tenant_id: i64,
        group: NewGroup,
        member: NewMember,
    ) -> Result<CreatedGroup>;
}
