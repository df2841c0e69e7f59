use std::fmt;

use serde::{Deserialize, Serialize};

/// A phone number as authored, plus its digits.
///
/// Deserializes from a plain string, e.g. `"8443406413"` or `"(844) 340-6413"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PhoneNumber {
    raw: String,
    digits: String,
}

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let digits = raw.chars().filter(char::is_ascii_digit).collect();
        Self { raw, digits }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The ten-digit national number, if this looks like a NANP number.
    fn national(&self) -> Option<&str> {
        match self.digits.len() {
            10 => Some(&self.digits),
            11 if self.digits.starts_with('1') => Some(&self.digits[1..]),
            _ => None,
        }
    }

    /// Format as "(844) 340-6413". Falls back to the authored text.
    pub fn display(&self) -> String {
        match self.national() {
            Some(n) => format!("({}) {}-{}", &n[..3], &n[3..6], &n[6..]),
            None => self.raw.trim().to_string(),
        }
    }

    /// `tel:` link target, e.g. "tel:8443406413".
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.digits)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<String> for PhoneNumber {
    fn from(raw: String) -> Self {
        PhoneNumber::new(raw)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_ten_digits() {
        let phone = PhoneNumber::new("8443406413");
        assert_eq!(phone.display(), "(844) 340-6413");
        assert_eq!(phone.tel_href(), "tel:8443406413");
    }

    #[test]
    fn test_display_already_formatted() {
        let phone = PhoneNumber::new("(844) 340-6413");
        assert_eq!(phone.digits(), "8443406413");
        assert_eq!(phone.to_string(), "(844) 340-6413");
    }

    #[test]
    fn test_leading_country_code() {
        let phone = PhoneNumber::new("+1 844 340 6413");
        assert_eq!(phone.display(), "(844) 340-6413");
        assert_eq!(phone.tel_href(), "tel:18443406413");
    }

    #[test]
    fn test_unrecognised_number_shown_as_written() {
        let phone = PhoneNumber::new(" 911 ");
        assert_eq!(phone.display(), "911");
        assert_eq!(phone.tel_href(), "tel:911");
    }
}
