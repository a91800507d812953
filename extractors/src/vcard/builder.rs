use serde::Serialize;

/// A contact parsed from one vCard. Always has a non-empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    name: String,
    email: Option<String>,
    phone: Option<String>,
    organization: Option<String>,
}

impl Contact {
    /// Trims every field; returns `None` when the name is blank
    pub fn new(
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        organization: Option<&str>,
    ) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            email: non_empty(email),
            phone: non_empty(phone),
            organization: non_empty(organization),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Cleaned of punctuation, not yet normalized to a country
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug)]
struct Phone {
    number: String,
    mobile: bool,
}

/// Accumulates fields while scanning a card. First value wins, except that a
/// mobile number replaces a non-mobile one.
#[derive(Debug, Default)]
pub struct ContactBuilder {
    formatted_name: Option<String>,
    structured_name: Option<String>,
    email: Option<String>,
    phone: Option<Phone>,
    organization: Option<String>,
}

impl ContactBuilder {
    pub fn formatted_name(&mut self, value: String) {
        set_if_absent(&mut self.formatted_name, value);
    }

    /// Only used when the card has no `FN`
    pub fn structured_name(&mut self, value: String) {
        set_if_absent(&mut self.structured_name, value);
    }

    pub fn email(&mut self, value: String) {
        set_if_absent(&mut self.email, value);
    }

    pub fn phone(&mut self, number: String, mobile: bool) {
        if number.trim().is_empty() {
            return;
        }
        if self.accepts_phone(mobile) {
            self.phone = Some(Phone { number, mobile });
        }
    }

    pub fn organization(&mut self, value: String) {
        set_if_absent(&mut self.organization, value);
    }

    pub fn has_formatted_name(&self) -> bool {
        self.formatted_name.is_some()
    }

    pub fn has_structured_name(&self) -> bool {
        self.structured_name.is_some()
    }

    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }

    pub fn has_organization(&self) -> bool {
        self.organization.is_some()
    }

    /// Whether a number with this tag would be kept by `phone`
    pub fn accepts_phone(&self, mobile: bool) -> bool {
        match &self.phone {
            None => true,
            Some(current) => mobile && !current.mobile,
        }
    }

    pub fn build(self) -> Option<Contact> {
        let name = self.formatted_name.or(self.structured_name)?;
        Contact::new(
            &name,
            self.email.as_deref(),
            self.phone.as_ref().map(|p| p.number.as_str()),
            self.organization.as_deref(),
        )
    }
}

fn set_if_absent(slot: &mut Option<String>, value: String) {
    if slot.is_none() && !value.trim().is_empty() {
        *slot = Some(value);
    }
}
