pub mod extraction;
pub mod group;
pub mod import;
pub mod tenant;

pub use extraction::ExtractionError;
pub use group::{ContactChannel, CreatedGroup, Group, Member, MemberKind, NewGroup, NewMember};
pub use import::{ImportContext, ImportResult, ValidationError};
pub use tenant::{CreateTenantRequest, Tenant, TenantDefaults};

