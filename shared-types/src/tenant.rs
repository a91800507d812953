use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Tenant that owns groups
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tenant {
    pub id: i64,
    pub name: String,
    pub default_language: Option<String>,
    pub default_country: Option<String>,
    pub created_at: i64,
}

/// Defaults a tenant contributes to imported records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TenantDefaults {
    pub default_language: Option<String>,
    pub default_country: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateTenantRequest {
    pub name: String,
    pub default_language: Option<String>,
    pub default_country: Option<String>,
}
