use crate::error::ImportError;

/// Turns a cleaned phone number into its stored form
pub trait PhoneNormalizer: Send + Sync {
    fn normalize(&self, raw: &str, country_hint: Option<&str>) -> Result<String, ImportError>;
}

struct CallingCode {
    country: &'static str,
    code: &'static str,
    /// National numbers drop their leading 0 when dialled internationally
    drops_trunk_prefix: bool,
}

const CALLING_CODES: &[CallingCode] = &[
    CallingCode { country: "US", code: "1", drops_trunk_prefix: true },
    CallingCode { country: "CA", code: "1", drops_trunk_prefix: true },
    CallingCode { country: "GB", code: "44", drops_trunk_prefix: true },
    CallingCode { country: "IE", code: "353", drops_trunk_prefix: true },
    CallingCode { country: "DE", code: "49", drops_trunk_prefix: true },
    CallingCode { country: "AT", code: "43", drops_trunk_prefix: true },
    CallingCode { country: "CH", code: "41", drops_trunk_prefix: true },
    CallingCode { country: "FR", code: "33", drops_trunk_prefix: true },
    CallingCode { country: "BE", code: "32", drops_trunk_prefix: true },
    CallingCode { country: "NL", code: "31", drops_trunk_prefix: true },
    CallingCode { country: "ES", code: "34", drops_trunk_prefix: true },
    CallingCode { country: "PT", code: "351", drops_trunk_prefix: true },
    CallingCode { country: "IT", code: "39", drops_trunk_prefix: false },
    CallingCode { country: "SE", code: "46", drops_trunk_prefix: true },
    CallingCode { country: "NO", code: "47", drops_trunk_prefix: true },
    CallingCode { country: "DK", code: "45", drops_trunk_prefix: true },
    CallingCode { country: "FI", code: "358", drops_trunk_prefix: true },
    CallingCode { country: "PL", code: "48", drops_trunk_prefix: true },
    CallingCode { country: "AU", code: "61", drops_trunk_prefix: true },
    CallingCode { country: "NZ", code: "64", drops_trunk_prefix: true },
    CallingCode { country: "ZA", code: "27", drops_trunk_prefix: true },
    CallingCode { country: "IN", code: "91", drops_trunk_prefix: true },
    CallingCode { country: "BR", code: "55", drops_trunk_prefix: true },
    CallingCode { country: "MX", code: "52", drops_trunk_prefix: true },
];

/// Normalizes to E.164-style `+<code><number>` where the country is known.
///
/// Numbers that already carry `+` or a `00` prefix keep their own country code.
/// National numbers without a usable country hint are returned as digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialingCodeNormalizer;

impl PhoneNormalizer for DialingCodeNormalizer {
    fn normalize(&self, raw: &str, country_hint: Option<&str>) -> Result<String, ImportError> {
        let trimmed = raw.trim();
        let (international, rest) = match trimmed.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let digits: String = rest
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.' | '/'))
            .collect();

        if digits.len() < 3 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ImportError::InvalidPhone(raw.to_string()));
        }

        if international {
            return Ok(format!("+{}", digits));
        }
        if let Some(number) = digits.strip_prefix("00") {
            return Ok(format!("+{}", number));
        }

        let Some(calling) = country_hint.and_then(lookup) else {
            return Ok(digits);
        };

        if let Some(national) = digits.strip_prefix('0') {
            let national = if calling.drops_trunk_prefix {
                national.to_string()
            } else {
                digits.clone()
            };
            return Ok(format!("+{}{}", calling.code, national));
        }

        // NANP numbers are usually written without a trunk prefix
        if calling.code == "1" {
            if digits.len() == 10 {
                return Ok(format!("+1{}", digits));
            }
            if digits.len() == 11 && digits.starts_with('1') {
                return Ok(format!("+{}", digits));
            }
        }

        Ok(digits)
    }
}

fn lookup(country: &str) -> Option<&'static CallingCode> {
    let country = country.trim();
    CALLING_CODES
        .iter()
        .find(|c| c.country.eq_ignore_ascii_case(country))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_numbers_are_kept() {
        let normalizer = DialingCodeNormalizer;
        assert_eq!(normalizer.normalize("+15550100", None).unwrap(), "+15550100");
        assert_eq!(
            normalizer.normalize("+44 20 7946 0958", Some("DE")).unwrap(),
            "+442079460958"
        );
        assert_eq!(
            normalizer.normalize("004915112345678", Some("US")).unwrap(),
            "+4915112345678"
        );
    }

    #[test]
    fn test_national_numbers_use_country_hint() {
        let normalizer = DialingCodeNormalizer;
        assert_eq!(
            normalizer.normalize("015112345678", Some("de")).unwrap(),
            "+4915112345678"
        );
        assert_eq!(
            normalizer.normalize("0612345678", Some("FR")).unwrap(),
            "+33612345678"
        );
        assert_eq!(
            normalizer.normalize("0612345678", Some("IT")).unwrap(),
            "+390612345678"
        );
        assert_eq!(
            normalizer.normalize("5555550100", Some("US")).unwrap(),
            "+15555550100"
        );
    }

    #[test]
    fn test_without_hint_digits_are_returned() {
        let normalizer = DialingCodeNormalizer;
        assert_eq!(
            normalizer.normalize("015112345678", None).unwrap(),
            "015112345678"
        );
        assert_eq!(
            normalizer.normalize("015112345678", Some("ZZ")).unwrap(),
            "015112345678"
        );
    }

    #[test]
    fn test_rejects_garbage() {
        let normalizer = DialingCodeNormalizer;
        assert!(matches!(
            normalizer.normalize("call-me-maybe", None),
            Err(ImportError::InvalidPhone(_))
        ));
        assert!(normalizer.normalize("12", None).is_err());
        assert!(normalizer.normalize("+", None).is_err());
    }
}
