//! Built-in email patterns
//!
//! Two strictness levels exist on purpose and are never unified:
//! the loose pattern used by registered fields only demands
//! `<non-whitespace>@<non-whitespace>`, while the schema email check demands
//! a dotted domain with an alphabetic top-level label.

use regex::Regex;
use std::sync::LazyLock;

// `<non-whitespace>@<non-whitespace>`, case-insensitive.
static LOOSE_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^\S+@\S+$").expect("LOOSE_EMAIL_REGEX: invalid regex pattern")
});

// Local part of letters, digits and `_'+-.` ending in a non-dot, then one or
// more dotted domain labels and a top-level label of 2+ letters. Leading dots
// and consecutive dots are rejected separately in `is_email`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

/// The loose email pattern as a compiled regex
pub fn loose_email() -> &'static Regex {
	&LOOSE_EMAIL_REGEX
}

/// Whether `value` has the form `<non-whitespace>@<non-whitespace>`
///
/// # Examples
///
/// ```
/// use formgate_validators::patterns::is_loose_email;
///
/// assert!(is_loose_email("a@b"));
/// assert!(!is_loose_email("a @b"));
/// assert!(!is_loose_email("not-an-email"));
/// ```
pub fn is_loose_email(value: &str) -> bool {
	LOOSE_EMAIL_REGEX.is_match(value)
}

/// Whether `value` is a well-formed email address with a dotted domain
///
/// # Examples
///
/// ```
/// use formgate_validators::patterns::is_email;
///
/// assert!(is_email("jane@doe.com"));
/// assert!(!is_email("a@b"));
/// assert!(!is_email(""));
/// ```
pub fn is_email(value: &str) -> bool {
	!value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("a@b")]
	#[case("a@b.com")]
	#[case("USER@EXAMPLE.COM")]
	#[case("odd!chars@[::1]")]
	#[case("a@@b")]
	fn test_loose_email_valid(#[case] value: &str) {
		// Act + Assert
		assert!(is_loose_email(value), "Expected '{value}' to match the loose pattern");
	}

	#[rstest]
	#[case("")]
	#[case("@b")]
	#[case("a@")]
	#[case("a b@c")]
	#[case("not-an-email")]
	fn test_loose_email_invalid(#[case] value: &str) {
		// Act + Assert
		assert!(!is_loose_email(value), "Expected '{value}' not to match the loose pattern");
	}

	#[rstest]
	#[case("jane@doe.com")]
	#[case("a@b.co")]
	#[case("first.last+tag@mail.example.org")]
	#[case("o'brien@example.ie")]
	#[case("UPPER@EXAMPLE.COM")]
	fn test_email_valid(#[case] value: &str) {
		// Act + Assert
		assert!(is_email(value), "Expected '{value}' to be a valid email");
	}

	#[rstest]
	#[case("")]
	#[case("a@b")]
	#[case("not-an-email")]
	#[case(".jane@doe.com")]
	#[case("jane..doe@doe.com")]
	#[case("jane.@doe.com")]
	#[case("jane@doe..com")]
	#[case("jane@-doe.com")]
	#[case("jane@doe.c")]
	#[case("jane doe@doe.com")]
	fn test_email_invalid(#[case] value: &str) {
		// Act + Assert
		assert!(!is_email(value), "Expected '{value}' to be an invalid email");
	}

	#[rstest]
	fn test_loose_pattern_accepts_what_strict_rejects() {
		// Arrange
		let value = "a@b";

		// Act + Assert
		assert!(is_loose_email(value));
		assert!(!is_email(value));
	}
}
