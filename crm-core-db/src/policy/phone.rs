use crm_core_api::{CrmError, CrmResult};

/// A country dialing code offered to the sales team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialingCode {
    pub code: &'static str,
    pub country: &'static str,
}

/// Dialing codes of the Arab region, in the order they are offered.
pub const ARAB_DIALING_CODES: &[DialingCode] = &[
    DialingCode { code: "966", country: "Saudi Arabia" },
    DialingCode { code: "971", country: "United Arab Emirates" },
    DialingCode { code: "965", country: "Kuwait" },
    DialingCode { code: "974", country: "Qatar" },
    DialingCode { code: "973", country: "Bahrain" },
    DialingCode { code: "968", country: "Oman" },
    DialingCode { code: "962", country: "Jordan" },
    DialingCode { code: "961", country: "Lebanon" },
    DialingCode { code: "963", country: "Syria" },
    DialingCode { code: "970", country: "Palestine" },
    DialingCode { code: "964", country: "Iraq" },
    DialingCode { code: "967", country: "Yemen" },
    DialingCode { code: "20", country: "Egypt" },
    DialingCode { code: "249", country: "Sudan" },
    DialingCode { code: "218", country: "Libya" },
    DialingCode { code: "216", country: "Tunisia" },
    DialingCode { code: "213", country: "Algeria" },
    DialingCode { code: "212", country: "Morocco" },
    DialingCode { code: "222", country: "Mauritania" },
];

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Looks a dialing code up, accepting `966`, `+966` and `00966`.
pub fn lookup_dialing_code(country_code: &str) -> Option<&'static DialingCode> {
    let digits = digits_only(country_code);
    let digits = digits.strip_prefix("00").unwrap_or(&digits);
    ARAB_DIALING_CODES.iter().find(|entry| entry.code == digits)
}

/// Rewrites a phone number as `+<country><national>`.
///
/// Non-digits are removed from the national part and one leading trunk `0` is dropped.
/// A number typed in international form with the same country code (`+966...` or
/// `00966...`) is accepted as is.
pub fn normalize_phone(country_code: &str, raw: &str) -> CrmResult<String> {
    let dialing = lookup_dialing_code(country_code).ok_or_else(|| {
        CrmError::ValidationError(format!("Unknown country dialing code: {country_code}"))
    })?;

    let trimmed = raw.trim();
    let mut national = digits_only(trimmed);
    let international_prefix = if trimmed.starts_with('+') {
        Some(dialing.code.to_string())
    } else if national.starts_with("00") {
        Some(format!("00{}", dialing.code))
    } else {
        None
    };
    if let Some(prefix) = international_prefix {
        if let Some(rest) = national.strip_prefix(prefix.as_str()) {
            national = rest.to_string();
        }
    }

    let national = national.strip_prefix('0').unwrap_or(&national);
    if national.is_empty() {
        return Err(CrmError::ValidationError(
            "Phone number has no digits".to_string(),
        ));
    }

    Ok(format!("+{}{}", dialing.code, national))
}

pub fn whatsapp_url(phone: &str) -> String {
    format!("https://wa.me/{}", digits_only(phone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_national_number() {
        assert_eq!(normalize_phone("966", "501234567").unwrap(), "+966501234567");
    }

    #[test]
    fn test_normalize_strips_trunk_zero_and_separators() {
        assert_eq!(normalize_phone("966", "050 123-4567").unwrap(), "+966501234567");
        assert_eq!(normalize_phone("+971", "(050) 111 2222").unwrap(), "+971501112222");
    }

    #[test]
    fn test_normalize_accepts_international_input() {
        assert_eq!(normalize_phone("966", "+966 50 123 4567").unwrap(), "+966501234567");
        assert_eq!(normalize_phone("00966", "00966501234567").unwrap(), "+966501234567");
    }

    #[test]
    fn test_normalize_rejects_unknown_code() {
        assert!(matches!(
            normalize_phone("44", "7700900123"),
            Err(CrmError::ValidationError(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_empty_number() {
        assert!(normalize_phone("966", "---").is_err());
        assert!(normalize_phone("966", "0").is_err());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup_dialing_code("+20").map(|d| d.country), Some("Egypt"));
        assert!(lookup_dialing_code("1").is_none());
    }

    #[test]
    fn test_whatsapp_url() {
        assert_eq!(whatsapp_url("+966501234567"), "https://wa.me/966501234567");
    }
}
