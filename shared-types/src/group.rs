use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Channel a group prefers to be reached on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ContactChannel {
    Phone,
    Email,
}

impl ContactChannel {
    /// Phone wins over email when both are known
    pub fn preferred(phone: Option<&str>, email: Option<&str>) -> Option<Self> {
        if phone.is_some() {
            Some(ContactChannel::Phone)
        } else if email.is_some() {
            Some(ContactChannel::Email)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactChannel::Phone => "phone",
            ContactChannel::Email => "email",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "phone" => Some(ContactChannel::Phone),
            "email" => Some(ContactChannel::Email),
            _ => None,
        }
    }
}

/// Classification of a member inside a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum MemberKind {
    #[default]
    Adult,
    Child,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Adult => "adult",
            MemberKind::Child => "child",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "adult" => Some(MemberKind::Adult),
            "child" => Some(MemberKind::Child),
            _ => None,
        }
    }
}

/// A named party owned by a tenant
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Group {
    pub id: i64,
    pub tenant_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub preferred_contact: Option<ContactChannel>,
    pub default_language: String,
    pub created_by: Option<i64>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// An individual inside a group
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Member {
    pub id: i64,
    pub group_id: i64,
    pub name: String,
    pub kind: MemberKind,
    pub admin_entered: bool,
    pub created_at: i64,
}

/// Fields for a group about to be created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewGroup {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub preferred_contact: Option<ContactChannel>,
    pub default_language: String,
    pub created_by: Option<i64>,
    pub notes: Option<String>,
}

/// Fields for the member created alongside a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewMember {
    pub name: String,
    pub kind: MemberKind,
    pub admin_entered: bool,
}

/// Identifiers of a group and its first member, created together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatedGroup {
    pub group_id: i64,
    pub member_id: i64,
}
