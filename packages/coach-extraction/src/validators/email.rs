//! Format and disposable-domain checks for extracted addresses.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Throwaway inbox providers. Flagged, not rejected.
pub const DISPOSABLE_DOMAINS: &[&str] = &[
    "mailinator.com",
    "guerrillamail.com",
    "tempmail.com",
    "throwaway.email",
    "yopmail.com",
    "sharklasers.com",
    "guerrillamailblock.com",
    "grr.la",
    "dispostable.com",
    "trashmail.com",
    "10minutemail.com",
];

lazy_static! {
    static ref EMAIL_FORMAT: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").unwrap();
}

/// Why an address was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    InvalidFormat,
    DisposableDomain,
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailValidation {
    pub valid: bool,
    pub reason: Option<RejectReason>,
    pub is_disposable: bool,
}

/// Whole-string match of `local@domain.tld` with no empty domain labels.
pub fn is_valid_format(email: &str) -> bool {
    EMAIL_FORMAT.is_match(email)
        && email
            .split_once('@')
            .is_some_and(|(_, domain)| domain.split('.').all(|label| !label.is_empty()))
}

pub fn is_disposable(email: &str) -> bool {
    let domain = email
        .split_once('@')
        .map(|(_, domain)| domain.to_lowercase())
        .unwrap_or_default();
    DISPOSABLE_DOMAINS.contains(&domain.as_str())
}

/// Validate an address. Disposable domains stay valid but carry a reason.
pub fn validate(email: &str) -> EmailValidation {
    if !is_valid_format(email) {
        return EmailValidation {
            valid: false,
            reason: Some(RejectReason::InvalidFormat),
            is_disposable: false,
        };
    }

    let is_disposable = is_disposable(email);
    EmailValidation {
        valid: true,
        reason: is_disposable.then_some(RejectReason::DisposableDomain),
        is_disposable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert!(is_valid_format("coach@abccollege.edu"));
        assert!(is_valid_format("first.last+tag@sub.school.k12.us"));
        assert!(!is_valid_format("coach@localhost"));
        assert!(!is_valid_format("coach at school dot edu"));
        assert!(!is_valid_format(" coach@school.edu"));
        assert!(!is_valid_format("coach@school.edu?subject=hi"));
        assert!(!is_valid_format("pl@form..net"));
        assert!(!is_valid_format("coach@.school.edu"));
    }

    #[test]
    fn test_disposable_is_flagged_but_valid() {
        let result = validate("someone@Mailinator.com");
        assert!(result.valid);
        assert!(result.is_disposable);
        assert_eq!(result.reason, Some(RejectReason::DisposableDomain));
    }

    #[test]
    fn test_invalid_format() {
        let result = validate("not-an-email");
        assert_eq!(
            result,
            EmailValidation {
                valid: false,
                reason: Some(RejectReason::InvalidFormat),
                is_disposable: false,
            }
        );
    }

    #[test]
    fn test_clean_address() {
        let result = validate("ad@school.edu");
        assert!(result.valid);
        assert_eq!(result.reason, None);
        assert!(!result.is_disposable);
    }
}
