use regex::Regex;

/// Strips formatting from `TEL` values. Country normalization happens later,
/// at import time.
pub struct PhoneCleaner {
    scheme: Regex,
    noise: Regex,
}

impl PhoneCleaner {
    pub fn new() -> Self {
        Self {
            scheme: Regex::new(r"(?i)^\s*tel:").unwrap(),
            noise: Regex::new(r"[\s\-().\[\]]").unwrap(),
        }
    }

    /// Returns `None` when nothing is left after cleaning. URI parameters such
    /// as `;ext=102` are dropped.
    pub fn clean(&self, value: &str) -> Option<String> {
        let without_scheme = self.scheme.replace(value, "");
        let number = without_scheme
            .split_once(';')
            .map_or(&*without_scheme, |(number, _)| number);
        let cleaned = self.noise.replace_all(number, "");
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned.into_owned())
        }
    }
}

impl Default for PhoneCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        let cleaner = PhoneCleaner::new();
        assert_eq!(cleaner.clean("+1 555 0100").as_deref(), Some("+15550100"));
        assert_eq!(
            cleaner.clean("(030) 123-45.67").as_deref(),
            Some("0301234567")
        );
        assert_eq!(cleaner.clean("[+44] 20 7946 0958").as_deref(), Some("+442079460958"));
    }

    #[test]
    fn test_strips_tel_scheme() {
        let cleaner = PhoneCleaner::new();
        assert_eq!(
            cleaner.clean("tel:+1-555-555-0100").as_deref(),
            Some("+15555550100")
        );
        assert_eq!(cleaner.clean("TEL:+4930123").as_deref(), Some("+4930123"));
    }

    #[test]
    fn test_drops_uri_parameters() {
        let cleaner = PhoneCleaner::new();
        assert_eq!(
            cleaner.clean("tel:+1-418-656-9254;ext=102").as_deref(),
            Some("+14186569254")
        );
        assert_eq!(
            cleaner.clean("tel:+1-555-555-5555;phone-context=example.com").as_deref(),
            Some("+15555555555")
        );
        assert_eq!(cleaner.clean(";ext=5"), None);
    }

    #[test]
    fn test_empty_after_cleaning() {
        let cleaner = PhoneCleaner::new();
        assert_eq!(cleaner.clean(" - ( ) "), None);
    }
}
