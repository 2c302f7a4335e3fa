//! Registered-field validation
//!
//! Each field is registered with a required message and, optionally, a
//! pattern with its own message. Checks run imperatively at validation time:
//!
//! 1. an empty value fails with the required message and stops there
//! 2. a non-empty value that does not match the pattern fails with the
//!    pattern message
//!
//! so a field reports at most one error.

use crate::ValidationStrategy;
use formgate_core::{ErrorMap, FieldName, FormValues};
use indexmap::IndexMap;
use regex::Regex;

/// Validation options attached to one registered field
#[derive(Debug, Clone, Default)]
pub struct Registration {
	required: Option<String>,
	pattern: Option<(Regex, String)>,
}

impl Registration {
	/// A field that must not be empty
	///
	/// # Examples
	///
	/// ```
	/// use formgate_validators::Registration;
	///
	/// let registration = Registration::required("Email is required");
	/// assert_eq!(registration.check(""), Some("Email is required"));
	/// assert_eq!(registration.check("anything"), None);
	/// ```
	pub fn required(message: impl Into<String>) -> Self {
		Self {
			required: Some(message.into()),
			pattern: None,
		}
	}

	/// A field that may be left empty
	pub fn optional() -> Self {
		Self::default()
	}

	/// Require non-empty values to match `pattern`
	///
	/// # Examples
	///
	/// ```
	/// use formgate_validators::Registration;
	/// use formgate_validators::patterns::loose_email;
	///
	/// let registration = Registration::required("Email is required")
	/// 	.with_pattern(loose_email().clone(), "Email must be valid");
	///
	/// assert_eq!(registration.check(""), Some("Email is required"));
	/// assert_eq!(registration.check("nope"), Some("Email must be valid"));
	/// assert_eq!(registration.check("a@b"), None);
	/// ```
	pub fn with_pattern(mut self, pattern: Regex, message: impl Into<String>) -> Self {
		self.pattern = Some((pattern, message.into()));
		self
	}

	pub fn is_required(&self) -> bool {
		self.required.is_some()
	}

	/// Run the checks against one value, returning the failing message
	pub fn check(&self, value: &str) -> Option<&str> {
		if value.is_empty() {
			return self.required.as_deref();
		}
		match &self.pattern {
			Some((pattern, message)) if !pattern.is_match(value) => Some(message.as_str()),
			_ => None,
		}
	}
}

/// Strategy built from per-field [`Registration`]s.
///
/// Fields without a registration are always valid.
#[derive(Debug, Clone, Default)]
pub struct AdHocStrategy {
	registrations: IndexMap<FieldName, Registration>,
}

impl AdHocStrategy {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a field, replacing any earlier registration for it
	pub fn register(mut self, field: impl Into<FieldName>, registration: Registration) -> Self {
		self.registrations.insert(field.into(), registration);
		self
	}

	pub fn registration(&self, field: &str) -> Option<&Registration> {
		self.registrations.get(field)
	}
}

impl ValidationStrategy for AdHocStrategy {
	fn validate(&self, values: &FormValues) -> ErrorMap {
		let mut errors = ErrorMap::new();
		for (field, value) in values.iter() {
			let Some(registration) = self.registrations.get(field.as_str()) else {
				continue;
			};
			if let Some(message) = registration.check(value) {
				errors.insert(field, message);
			}
		}
		errors
	}
}
