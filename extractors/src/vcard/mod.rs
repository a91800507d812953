mod builder;
mod decode;
mod phone;
mod property;
mod unfold;

pub use builder::Contact;
pub use phone::PhoneCleaner;
pub use property::PropertyKind;

use builder::ContactBuilder;
use decode::{decode_escaped, decode_quoted_printable, DecodeError};
use property::PropertyLine;
use regex::Regex;
use serde::Serialize;
use shared_types::ExtractionError;
use unfold::unfold_lines;

const NO_CARDS_FOUND: &str = "No vCard entries found in file";

/// Why a single card could not be read
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("unterminated quoted value in {property} property")]
    UnterminatedQuote { property: String },

    #[error("quoted-printable soft line break in {property} property has no continuation")]
    DanglingSoftBreak { property: String },
}

/// Contacts plus one message per malformed card or file-level failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub contacts: Vec<Contact>,
    pub errors: Vec<String>,
}

/// Tolerant vCard 2.1 / 3.0 / 4.0 parser. Stateless; safe to share.
pub struct VcardParser {
    begin_marker: Regex,
    phone_cleaner: PhoneCleaner,
}

impl VcardParser {
    pub fn new() -> Self {
        Self {
            begin_marker: Regex::new(r"(?i)BEGIN:VCARD").unwrap(),
            phone_cleaner: PhoneCleaner::new(),
        }
    }

    /// Parses every card in `content`. Malformed cards are reported in
    /// `errors` and never stop the remaining cards from being read.
    pub fn parse(&self, content: &str) -> ParseOutcome {
        let blocks: Vec<&str> = self
            .begin_marker
            .split(content)
            .filter(|block| !block.trim().is_empty())
            .collect();

        if blocks.is_empty() {
            return ParseOutcome {
                contacts: Vec::new(),
                errors: vec![NO_CARDS_FOUND.to_string()],
            };
        }

        let mut outcome = ParseOutcome::default();

        for (index, block) in blocks.iter().enumerate() {
            match self.parse_card(block) {
                Ok(Some(contact)) => outcome.contacts.push(contact),
                Ok(None) => {
                    tracing::debug!(card = index + 1, "Dropping vCard without a name");
                }
                Err(e) => {
                    outcome
                        .errors
                        .push(format!("Error parsing contact {}: {}", index + 1, e));
                }
            }
        }

        tracing::debug!(
            cards = blocks.len(),
            contacts = outcome.contacts.len(),
            errors = outcome.errors.len(),
            "Parsed vCard data"
        );

        outcome
    }

    /// Like `parse`, for raw bytes. Fails only when the bytes are not text.
    pub fn parse_bytes(&self, content: &[u8]) -> Result<ParseOutcome, ExtractionError> {
        let text = std::str::from_utf8(content).map_err(|e| {
            ExtractionError::InvalidInput(format!("vCard data is not valid UTF-8: {}", e))
        })?;
        Ok(self.parse(text))
    }

    /// Pre-flight check that both card markers are present
    pub fn validate(&self, content: &str) -> Option<String> {
        let upper = content.to_ascii_uppercase();
        if !upper.contains("BEGIN:VCARD") {
            return Some("Missing BEGIN:VCARD marker".to_string());
        }
        if !upper.contains("END:VCARD") {
            return Some("Missing END:VCARD marker".to_string());
        }
        None
    }

    fn parse_card(&self, block: &str) -> Result<Option<Contact>, CardError> {
        let lines = unfold_lines(block)?;
        let mut builder = ContactBuilder::default();
        // N is decoded only once the card is known to have no FN
        let mut structured_names: Vec<PropertyLine<'_>> = Vec::new();

        for line in &lines {
            let line = line.trim();
            if line.is_empty() || line.eq_ignore_ascii_case("END:VCARD") {
                continue;
            }

            let Some(property) = PropertyLine::parse(line) else {
                continue;
            };

            // Values that could no longer be kept are never decoded
            match property.kind {
                PropertyKind::FormattedName if !builder.has_formatted_name() => {
                    builder.formatted_name(decode_value(&property)?);
                }
                PropertyKind::StructuredName => structured_names.push(property),
                PropertyKind::Email if !builder.has_email() => {
                    builder.email(decode_value(&property)?);
                }
                PropertyKind::Tel if builder.accepts_phone(property.is_mobile()) => {
                    let value = decode_value(&property)?;
                    if let Some(number) = self.phone_cleaner.clean(&value) {
                        builder.phone(number, property.is_mobile());
                    }
                }
                PropertyKind::Org if !builder.has_organization() => {
                    builder.organization(format_organization(&decode_value(&property)?));
                }
                _ => {}
            }
        }

        if !builder.has_formatted_name() {
            for property in &structured_names {
                builder.structured_name(format_structured_name(&decode_value(property)?));
                if builder.has_structured_name() {
                    break;
                }
            }
        }

        Ok(builder.build())
    }
}

impl Default for VcardParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses with a default parser
pub fn parse(content: &str) -> ParseOutcome {
    VcardParser::new().parse(content)
}

fn decode_value(property: &PropertyLine<'_>) -> Result<String, CardError> {
    if property.is_quoted_printable() {
        return Ok(decode_quoted_printable(property.value, property.charset())
            .trim()
            .to_string());
    }

    decode_escaped(property.value)
        .map(|value| value.trim().to_string())
        .map_err(|e| match e {
            DecodeError::UnterminatedQuote => CardError::UnterminatedQuote {
                property: property.name.clone(),
            },
        })
}

/// `family;given;middle;prefix;suffix` -> `prefix given middle family suffix`
fn format_structured_name(value: &str) -> String {
    let parts: Vec<&str> = value.split(';').map(str::trim).collect();
    let part = |i: usize| parts.get(i).copied().unwrap_or("");

    [part(3), part(1), part(2), part(0), part(4)]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Acme Corp;Sales;` -> `Acme Corp, Sales`
fn format_organization(value: &str) -> String {
    value
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
