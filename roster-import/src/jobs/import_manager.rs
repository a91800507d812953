use crate::database::AsyncDbConnection;
use crate::error::ImportError;
use crate::helpers::notes::{NoteTranslator, StaticNoteTranslator};
use crate::helpers::phone::{DialingCodeNormalizer, PhoneNormalizer};
use crate::storage::{GroupStore, SqliteStorage, TenantResolver};
use extractors::{Contact, VcardParser};
use shared_types::{
    ContactChannel, CreatedGroup, ImportContext, ImportResult, MemberKind, NewGroup, NewMember,
    ValidationError,
};
use std::path::Path;
use std::sync::Arc;

const FILE_LABEL: &str = "File";
const SYSTEM_LABEL: &str = "System";

/// Language and country applied to every contact of one batch
#[derive(Debug, Clone)]
struct BatchDefaults {
    language: String,
    country: Option<String>,
}

/// Imports vCard files into a tenant's groups.
///
/// Contacts are handled one at a time in file order, so a group created for
/// one contact is visible to the duplicate check of the next.
pub struct ImportManager {
    parser: VcardParser,
    tenants: Arc<dyn TenantResolver>,
    groups: Arc<dyn GroupStore>,
    phones: Arc<dyn PhoneNormalizer>,
    notes: Arc<dyn NoteTranslator>,
}

impl ImportManager {
    pub fn new(
        tenants: Arc<dyn TenantResolver>,
        groups: Arc<dyn GroupStore>,
        phones: Arc<dyn PhoneNormalizer>,
        notes: Arc<dyn NoteTranslator>,
    ) -> Self {
        Self {
            parser: VcardParser::new(),
            tenants,
            groups,
            phones,
            notes,
        }
    }

    /// SQLite storage with the built-in phone normalizer and note translations
    pub fn with_sqlite(db_conn: AsyncDbConnection) -> Self {
        let storage = Arc::new(SqliteStorage::new(db_conn));
        Self::new(
            storage.clone(),
            storage,
            Arc::new(DialingCodeNormalizer),
            Arc::new(StaticNoteTranslator),
        )
    }

    /// Reads `path` as UTF-8 text and imports it
    pub async fn import_file(&self, path: &Path, ctx: &ImportContext) -> ImportResult {
        let content = match tokio::fs::read(path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Failed to read import file {}: {}", path.display(), e);
                return ImportResult::failed(
                    vec![ValidationError::new(FILE_LABEL, "read", e.to_string())],
                    "Import file could not be read",
                );
            }
        };

        match String::from_utf8(content) {
            Ok(text) => self.import_batch(&text, ctx).await,
            Err(e) => ImportResult::failed(
                vec![ValidationError::new(
                    FILE_LABEL,
                    "encoding",
                    format!("File is not valid UTF-8 text: {}", e),
                )],
                "Import file is not a text file",
            ),
        }
    }

    /// Imports every card in `content`. Never fails as a whole: problems are
    /// reported in the returned `ImportResult`.
    pub async fn import_batch(&self, content: &str, ctx: &ImportContext) -> ImportResult {
        if let Some(problem) = self.parser.validate(content) {
            tracing::warn!(tenant_id = ctx.tenant_id, "Pre-flight check: {}", problem);
        }

        let outcome = self.parser.parse(content);

        let mut errors: Vec<ValidationError> = outcome
            .errors
            .into_iter()
            .map(|message| ValidationError::new(FILE_LABEL, "parse", message))
            .collect();

        if outcome.contacts.is_empty() {
            return ImportResult::failed(errors, "No valid contacts found in file");
        }

        let defaults = match self.resolve_defaults(ctx).await {
            Ok(defaults) => defaults,
            Err(e) => {
                tracing::error!(tenant_id = ctx.tenant_id, "Cannot import: {}", e);
                errors.push(ValidationError::new(SYSTEM_LABEL, e.field(), e.to_string()));
                return ImportResult::failed(errors, "Import failed: tenant could not be resolved");
            }
        };

        let mut result = ImportResult {
            errors,
            ..Default::default()
        };

        for contact in &outcome.contacts {
            match self.import_one(contact, ctx, &defaults).await {
                Ok(created) => {
                    tracing::debug!(
                        group_id = created.group_id,
                        member_id = created.member_id,
                        "Imported {}",
                        contact.name()
                    );
                    result.groups_created += 1;
                    result.members_created += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping contact {}: {}", contact.name(), e);
                    result
                        .errors
                        .push(ValidationError::new(contact.name(), e.field(), e.to_string()));
                }
            }
        }

        result.success = result.groups_created > 0;
        result.message = summary_message(result.groups_created, result.errors.len());

        tracing::info!(
            tenant_id = ctx.tenant_id,
            groups_created = result.groups_created,
            errors = result.errors.len(),
            "{}",
            result.message
        );

        result
    }

    async fn resolve_defaults(&self, ctx: &ImportContext) -> Result<BatchDefaults, ImportError> {
        let tenant = self
            .tenants
            .tenant_defaults(ctx.tenant_id)
            .await
            .map_err(ImportError::TenantLookup)?
            .ok_or(ImportError::TenantNotFound(ctx.tenant_id))?;

        let language = tenant
            .default_language
            .filter(|language| !language.trim().is_empty())
            .unwrap_or_else(|| ctx.fallback_language.clone());

        Ok(BatchDefaults {
            language,
            country: ctx.country_hint.clone().or(tenant.default_country),
        })
    }

    async fn import_one(
        &self,
        contact: &Contact,
        ctx: &ImportContext,
        defaults: &BatchDefaults,
    ) -> Result<CreatedGroup, ImportError> {
        if let Some(email) = contact.email() {
            if self
                .groups
                .find_group_by_email(ctx.tenant_id, email)
                .await?
                .is_some()
            {
                return Err(ImportError::DuplicateEmail(email.to_string()));
            }
        }

        let phone = contact
            .phone()
            .map(|raw| self.phones.normalize(raw, defaults.country.as_deref()))
            .transpose()?;

        let notes = self
            .notes
            .import_note(&defaults.language, &ctx.operator_name);

        let group = NewGroup {
            name: contact.name().to_string(),
            email: contact.email().map(str::to_string),
            preferred_contact: ContactChannel::preferred(phone.as_deref(), contact.email()),
            phone,
            organization: contact.organization().map(str::to_string),
            default_language: defaults.language.clone(),
            created_by: ctx.operator_id,
            notes: Some(notes),
        };

        let member = NewMember {
            name: contact.name().to_string(),
            kind: MemberKind::Adult,
            admin_entered: true,
        };

        let created = self
            .groups
            .create_group_with_member(ctx.tenant_id, group, member)
            .await?;

        Ok(created)
    }
}

fn summary_message(imported: u32, errors: usize) -> String {
    if imported == 0 {
        return "No contacts were imported".to_string();
    }

    let noun = if imported == 1 { "contact" } else { "contacts" };
    let mut message = format!("Successfully imported {} {}", imported, noun);
    if errors > 0 {
        let noun = if errors == 1 { "error" } else { "errors" };
        message.push_str(&format!(" with {} {}", errors, noun));
    }
    message
}
