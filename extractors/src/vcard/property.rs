use encoding_rs::{Encoding, UTF_8};

/// Properties the parser acts on. Everything else is `Unknown` and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    FormattedName,
    StructuredName,
    Email,
    Tel,
    Org,
    Unknown,
}

impl PropertyKind {
    /// Expects an already uppercased, group-stripped name
    pub fn from_name(name: &str) -> Self {
        match name {
            "FN" => PropertyKind::FormattedName,
            "N" => PropertyKind::StructuredName,
            "EMAIL" => PropertyKind::Email,
            "TEL" => PropertyKind::Tel,
            "ORG" => PropertyKind::Org,
            _ => PropertyKind::Unknown,
        }
    }
}

/// One unfolded `name;params:value` line
#[derive(Debug, Clone)]
pub struct PropertyLine<'a> {
    pub name: String,
    pub kind: PropertyKind,
    /// Everything before the first `:`, parameters included
    pub property_part: &'a str,
    /// Trimmed, still encoded value
    pub value: &'a str,
}

impl<'a> PropertyLine<'a> {
    /// Returns `None` for lines without `:` or with an empty value
    pub fn parse(line: &'a str) -> Option<Self> {
        let (property_part, value) = line.split_once(':')?;
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        let name = property_name(property_part);
        let kind = PropertyKind::from_name(&name);

        Some(Self {
            name,
            kind,
            property_part,
            value,
        })
    }

    pub fn is_quoted_printable(&self) -> bool {
        is_quoted_printable(self.property_part)
    }

    /// Charset named by a `CHARSET=` parameter, UTF-8 when absent or unknown
    pub fn charset(&self) -> &'static Encoding {
        self.property_part
            .split(';')
            .skip(1)
            .filter_map(|param| param.split_once('='))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case("CHARSET"))
            .and_then(|(_, label)| Encoding::for_label(label.trim().trim_matches('"').as_bytes()))
            .unwrap_or(UTF_8)
    }

    /// `TEL;CELL`, `TEL;TYPE=cell,voice`, `TEL;type=MOBILE` ...
    pub fn is_mobile(&self) -> bool {
        let upper = self.property_part.to_ascii_uppercase();
        upper.contains("CELL") || upper.contains("MOBILE")
    }
}

/// `item1.EMAIL;TYPE=work` -> `EMAIL`
pub fn property_name(property_part: &str) -> String {
    let head = property_part.split(';').next().unwrap_or(property_part);
    let name = head.rsplit('.').next().unwrap_or(head);
    name.trim().to_ascii_uppercase()
}

/// Matches both `ENCODING=QUOTED-PRINTABLE` and the bare 2.1 form
pub fn is_quoted_printable(property_part: &str) -> bool {
    property_part
        .to_ascii_uppercase()
        .contains("QUOTED-PRINTABLE")
}
