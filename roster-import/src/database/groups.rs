use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{ContactChannel, CreatedGroup, Group, Member, MemberKind, NewGroup, NewMember};

/// Id of a tenant's group using `email`, compared case-insensitively
pub async fn find_group_by_email(
    conn: AsyncDbConnection,
    tenant_id: i64,
    email: &str,
) -> Result<Option<i64>> {
    let conn = conn.lock().await?;

    let id = conn
        .query_row(
            "SELECT id FROM party_groups
             WHERE tenant_id = ?1 AND email = ?2 COLLATE NOCASE
             LIMIT 1",
            rusqlite::params![tenant_id, email],
            |row| row.get(0),
        )
        .optional()?;

    Ok(id)
}

/// Inserts a group and its first member in one transaction. If either insert
/// fails, neither row is kept.
pub async fn create_group_with_member(
    conn: AsyncDbConnection,
    tenant_id: i64,
    group: &NewGroup,
    member: &NewMember,
) -> Result<CreatedGroup> {
    let mut conn = conn.lock().await?;
    let now = chrono::Utc::now().timestamp();

    let tx = conn.transaction()?;

    let group_id: i64 = tx.query_row(
        "INSERT INTO party_groups
         (tenant_id, name, email, phone, organization, preferred_contact,
          default_language, created_by, notes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
         RETURNING id",
        rusqlite::params![
            tenant_id,
            &group.name,
            group.email.as_deref(),
            group.phone.as_deref(),
            group.organization.as_deref(),
            group.preferred_contact.map(|c| c.as_str()),
            &group.default_language,
            group.created_by,
            group.notes.as_deref(),
            now,
            now
        ],
        |row| row.get(0),
    )?;

    let member_id: i64 = tx.query_row(
        "INSERT INTO party_members (group_id, name, kind, admin_entered, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         RETURNING id",
        rusqlite::params![
            group_id,
            &member.name,
            member.kind.as_str(),
            member.admin_entered,
            now
        ],
        |row| row.get(0),
    )?;

    tx.commit()?;

    Ok(CreatedGroup {
        group_id,
        member_id,
    })
}

pub async fn list_groups(conn: AsyncDbConnection, tenant_id: i64) -> Result<Vec<Group>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(
        "SELECT id, tenant_id, name, email, phone, organization, preferred_contact,
                default_language, created_by, notes, created_at, updated_at
         FROM party_groups
         WHERE tenant_id = ?1
         ORDER BY id",
    )?;

    let groups = stmt
        .query_map([tenant_id], |row| {
            let preferred_contact: Option<String> = row.get(6)?;
            Ok(Group {
                id: row.get(0)?,
                tenant_id: row.get(1)?,
                name: row.get(2)?,
                email: row.get(3)?,
                phone: row.get(4)?,
                organization: row.get(5)?,
                preferred_contact: preferred_contact
                    .as_deref()
                    .and_then(ContactChannel::from_label),
                default_language: row.get(7)?,
                created_by: row.get(8)?,
                notes: row.get(9)?,
                created_at: row.get(10)?,
                updated_at: row.get(11)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(groups)
}

pub async fn list_members(conn: AsyncDbConnection, group_id: i64) -> Result<Vec<Member>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(
        "SELECT id, group_id, name, kind, admin_entered, created_at
         FROM party_members
         WHERE group_id = ?1
         ORDER BY id",
    )?;

    let members = stmt
        .query_map([group_id], |row| {
            let kind: String = row.get(3)?;
            Ok(Member {
                id: row.get(0)?,
                group_id: row.get(1)?,
                name: row.get(2)?,
                kind: MemberKind::from_label(&kind).unwrap_or_default(),
                admin_entered: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{tenants, Database};
    use shared_types::CreateTenantRequest;

    async fn setup() -> (Database, i64) {
        let db = Database::in_memory().unwrap();
        let tenant = tenants::create_tenant(
            db.connection(),
            &CreateTenantRequest {
                name: "Test Tenant".to_string(),
                default_language: Some("en".to_string()),
                default_country: None,
            },
        )
        .await
        .unwrap();
        (db, tenant.id)
    }

    fn new_group(name: &str, email: Option<&str>) -> NewGroup {
        NewGroup {
            name: name.to_string(),
            email: email.map(str::to_string),
            phone: None,
            organization: None,
            preferred_contact: ContactChannel::preferred(None, email),
            default_language: "en".to_string(),
            created_by: Some(1),
            notes: Some("Imported from file by Test".to_string()),
        }
    }

    fn new_member(name: &str) -> NewMember {
        NewMember {
            name: name.to_string(),
            kind: MemberKind::Adult,
            admin_entered: true,
        }
    }

    #[tokio::test]
    async fn test_create_group_with_member() {
        let (db, tenant_id) = setup().await;

        let created = create_group_with_member(
            db.connection(),
            tenant_id,
            &new_group("Jane Doe", Some("jane@example.com")),
            &new_member("Jane Doe"),
        )
        .await
        .unwrap();

        let groups = list_groups(db.connection(), tenant_id).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, created.group_id);
        assert_eq!(groups[0].preferred_contact, Some(ContactChannel::Email));

        let members = list_members(db.connection(), created.group_id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, created.member_id);
        assert_eq!(members[0].kind, MemberKind::Adult);
        assert!(members[0].admin_entered);
    }

    #[tokio::test]
    async fn test_find_group_by_email_is_case_insensitive_and_tenant_scoped() {
        let (db, tenant_id) = setup().await;
        let other_tenant = tenants::create_tenant(
            db.connection(),
            &CreateTenantRequest {
                name: "Other".to_string(),
                default_language: None,
                default_country: None,
            },
        )
        .await
        .unwrap();

        let created = create_group_with_member(
            db.connection(),
            tenant_id,
            &new_group("Jane Doe", Some("Jane@Example.com")),
            &new_member("Jane Doe"),
        )
        .await
        .unwrap();

        let found = find_group_by_email(db.connection(), tenant_id, "jane@example.com")
            .await
            .unwrap();
        assert_eq!(found, Some(created.group_id));

        let elsewhere = find_group_by_email(db.connection(), other_tenant.id, "jane@example.com")
            .await
            .unwrap();
        assert_eq!(elsewhere, None);
    }

    #[tokio::test]
    async fn test_failed_member_insert_rolls_back_group() {
        let (db, tenant_id) = setup().await;

        {
            let conn = db.connection().lock().await.unwrap();
            conn.execute_batch(
                "CREATE TRIGGER fail_member_insert BEFORE INSERT ON party_members
                 BEGIN SELECT RAISE(ABORT, 'member write failed'); END;",
            )
            .unwrap();
        }

        let result = create_group_with_member(
            db.connection(),
            tenant_id,
            &new_group("Jane Doe", None),
            &new_member("Jane Doe"),
        )
        .await;

        assert!(result.is_err());
        assert!(list_groups(db.connection(), tenant_id).await.unwrap().is_empty());
    }
}
