/// Reasons a single contact could not be imported
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("A group with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Tenant {0} not found")]
    TenantNotFound(i64),

    #[error("Tenant lookup failed: {0}")]
    TenantLookup(#[source] anyhow::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ImportError {
    /// Field reported in the `ValidationError` for this failure
    pub fn field(&self) -> &'static str {
        match self {
            ImportError::DuplicateEmail(_) => "email",
            ImportError::TenantNotFound(_) | ImportError::TenantLookup(_) => "tenant",
            ImportError::InvalidPhone(_) | ImportError::Storage(_) => "import",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        assert_eq!(ImportError::DuplicateEmail("a@example.com".into()).field(), "email");
        assert_eq!(ImportError::InvalidPhone("x".into()).field(), "import");
        assert_eq!(ImportError::TenantNotFound(1).field(), "tenant");
        assert_eq!(
            ImportError::TenantLookup(anyhow::anyhow!("database is locked")).field(),
            "tenant"
        );
        assert_eq!(ImportError::Storage(anyhow::anyhow!("disk full")).field(), "import");
    }
}
