use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS tenants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR NOT NULL,
            default_language VARCHAR,
            default_country VARCHAR,
            created_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS party_groups (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tenant_id INTEGER NOT NULL,
            name VARCHAR NOT NULL,
            email VARCHAR,
            phone VARCHAR,
            organization VARCHAR,
            preferred_contact VARCHAR CHECK (preferred_contact IN ('phone', 'email')),
            default_language VARCHAR NOT NULL,
            created_by INTEGER,
            notes VARCHAR,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL,
            FOREIGN KEY (tenant_id) REFERENCES tenants (id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_party_groups_tenant_email
         ON party_groups(tenant_id, email COLLATE NOCASE)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS party_members (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            group_id INTEGER NOT NULL,
            name VARCHAR NOT NULL,
            kind VARCHAR NOT NULL DEFAULT 'adult' CHECK (kind IN ('adult', 'child')),
            admin_entered BOOLEAN NOT NULL DEFAULT false,
            created_at BIGINT NOT NULL,
            FOREIGN KEY (group_id) REFERENCES party_groups (id) ON DELETE CASCADE
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_party_members_group ON party_members(group_id)",
        [],
    )?;

    Ok(())
}
