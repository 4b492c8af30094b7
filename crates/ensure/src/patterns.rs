//! Regular expressions for use with
//! [`StringValidator::matches`](crate::validators::StringValidator::matches)

/// ASCII letters only, case-insensitive.
pub const ALPHA: &str = r"(?i)^[a-z]+$";

/// ASCII letters and digits, case-insensitive.
pub const ALPHANUM: &str = r"(?i)^[a-z0-9]+$";

/// One or more digits.
pub const NUMBERS: &str = r"^\d+$";

/// A decimal number with a fractional part, e.g. `.5` or `12.50`.
pub const DECIMAL: &str = r"^\d*\.\d+$";

/// A version 4 style UUID, case-insensitive.
pub const UUID4: &str =
    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";

/// Dotted-quad IPv4 address.
pub const IPV4: &str = r"^(([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])$";

/// RFC 5322 style email address (unanchored).
pub const EMAIL: &str = r##"(?i)(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9]))\.){3}(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9])|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])"##;

/// Lowercase hex MD5 digest.
pub const MD5: &str = r"^[0-9a-f]{32}$";

/// Lowercase hex SHA-1 digest.
pub const SHA1: &str = r"^[0-9a-f]{40}$";

/// Lowercase hex SHA-256 digest.
pub const SHA256: &str = r"^[0-9a-f]{64}$";

/// Lowercase hex SHA-512 digest.
pub const SHA512: &str = r"^[0-9a-f]{128}$";

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use rstest::rstest;

    #[rstest]
    #[case(ALPHA, "Bob", "Bob 5")]
    #[case(ALPHANUM, "Bob5", "Bob 5")]
    #[case(NUMBERS, "0123", "12a")]
    #[case(DECIMAL, "12.50", "12")]
    #[case(UUID4, "123E4567-e89b-42d3-a456-426614174000", "123e4567-e89b")]
    #[case(IPV4, "192.168.0.1", "256.1.1.1")]
    #[case(EMAIL, "someone@example.com", "someone.example.com")]
    #[case(MD5, "d41d8cd98f00b204e9800998ecf8427e", "d41d8cd98f00b204")]
    #[case(SHA1, "da39a3ee5e6b4b0d3255bfef95601890afd80709", "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709")]
    fn test_pattern(#[case] pattern: &str, #[case] good: &str, #[case] bad: &str) {
        let regex = Regex::new(pattern).unwrap();
        assert!(regex.is_match(good), "{pattern} should match {good}");
        assert!(!regex.is_match(bad), "{pattern} should not match {bad}");
    }

    #[test]
    fn test_long_digests_compile() {
        assert!(Regex::new(SHA256).unwrap().is_match(&"a".repeat(64)));
        assert!(Regex::new(SHA512).unwrap().is_match(&"0".repeat(128)));
    }
}
