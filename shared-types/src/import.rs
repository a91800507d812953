use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Who is importing, into which tenant, with which fallbacks
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportContext {
    pub tenant_id: i64,
    pub operator_id: Option<i64>,
    pub operator_name: String,
    /// Used when the tenant has no default language of its own
    pub fallback_language: String,
    /// ISO 3166 alpha-2 code used for national phone numbers
    pub country_hint: Option<String>,
}

/// One rejected contact, or one file-level problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationError {
    pub contact: String,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        contact: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            contact: contact.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Summary of a batch import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub success: bool,
    pub groups_created: u32,
    pub members_created: u32,
    pub errors: Vec<ValidationError>,
    pub message: String,
}

impl ImportResult {
    /// Failed result carrying the errors gathered so far
    pub fn failed(errors: Vec<ValidationError>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            groups_created: 0,
            members_created: 0,
            errors,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_result_uses_camel_case() {
        let result = ImportResult {
            success: true,
            groups_created: 2,
            members_created: 2,
            errors: vec![],
            message: "Successfully imported 2 contacts".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["groupsCreated"], 2);
        assert_eq!(json["membersCreated"], 2);
        assert!(json.get("groups_created").is_none());
    }
}
