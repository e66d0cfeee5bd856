use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Free-text street labels: anything printable, no control characters
    /// - Valid: "Rua 7", "Av. Goiás, 120", "" (left blank)
    /// - Invalid: "Rua\n7", "Rua\u{0}7"
    pub static ref STREET_REGEX: Regex = Regex::new(r"^[^\p{Cc}]*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_regex_valid() {
        assert!(STREET_REGEX.is_match("Rua 7"));
        assert!(STREET_REGEX.is_match("Av. Goiás, 120"));
        assert!(STREET_REGEX.is_match("<b>Rua</b> & 'Praça'"));
        assert!(STREET_REGEX.is_match(""));
    }

    #[test]
    fn test_street_regex_invalid() {
        assert!(!STREET_REGEX.is_match("Rua\n7")); // newline
        assert!(!STREET_REGEX.is_match("Rua\t7")); // tab
        assert!(!STREET_REGEX.is_match("Rua\u{0}7")); // nul
        assert!(!STREET_REGEX.is_match("\u{1b}[31mRua")); // escape sequence
    }
}
