//! Declarative schema validation
//!
//! A [`Schema`] maps each field to a [`FieldRule`]: an ordered list of
//! [`Check`]s. Validation reports, per field, the message of the first
//! failing check. Fields are independent of each other.
//!
//! Schemas are plain data and can be loaded from TOML:
//!
//! ```
//! use formgate_core::FormValues;
//! use formgate_validators::{Schema, ValidationStrategy};
//!
//! let schema = Schema::from_toml_str(r#"
//! [fields]
//! firstName = [{ type = "min_length", min = 1, message = "Please enter your first name" }]
//! zip = [
//! 	{ type = "trim" },
//! 	{ type = "pattern", pattern = "^[0-9]{5}$", message = "Enter a 5 digit ZIP code" },
//! ]
//! "#).unwrap();
//!
//! let values = FormValues::from_iter([("firstName", ""), ("zip", " 12345 ")]);
//! let errors = schema.validate(&values);
//!
//! assert_eq!(errors.get("firstName"), Some("Please enter your first name"));
//! assert!(!errors.contains("zip"));
//! ```
//!
//! Whitespace is significant unless a field declares a `trim` check; trimming
//! only affects the checks that follow it, never the stored value.

use crate::ValidationStrategy;
use crate::patterns;
use formgate_core::{ErrorMap, FieldName, FormValues};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
	#[error("Invalid pattern: {0}")]
	InvalidPattern(#[from] regex::Error),
	#[error("Failed to parse schema: {0}")]
	Parse(#[from] toml::de::Error),
}

/// One step of a field's check list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Check {
	/// Strip surrounding whitespace before the following checks
	Trim,
	/// Value must be non-empty
	Required { message: String },
	/// Value must have at least `min` characters
	///
	/// Lengths count Unicode scalar values, not UTF-16 code units: an emoji
	/// outside the Basic Multilingual Plane counts as one character.
	MinLength { min: usize, message: String },
	/// Value must have at most `max` characters, counted like
	/// [`MinLength`](Check::MinLength)
	MaxLength { max: usize, message: String },
	/// Value must be a well-formed email address
	Email { message: String },
	/// Value must match `pattern`
	Pattern {
		#[serde(with = "regex_serde")]
		pattern: Regex,
		message: String,
	},
}

impl Check {
	/// Compile a pattern check
	///
	/// # Examples
	///
	/// ```
	/// use formgate_validators::Check;
	///
	/// assert!(Check::pattern("^[a-z]+$", "Lowercase letters only").is_ok());
	/// assert!(Check::pattern("([a-z]", "Broken").is_err());
	/// ```
	pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, SchemaError> {
		Ok(Check::Pattern {
			pattern: Regex::new(pattern)?,
			message: message.into(),
		})
	}

	/// The message of this check if `value` fails it
	fn failure<'a>(&'a self, value: &str) -> Option<&'a str> {
		let failed = match self {
			Check::Trim => false,
			Check::Required { .. } => value.is_empty(),
			Check::MinLength { min, .. } => value.chars().count() < *min,
			Check::MaxLength { max, .. } => value.chars().count() > *max,
			Check::Email { .. } => !patterns::is_email(value),
			Check::Pattern { pattern, .. } => !pattern.is_match(value),
		};
		if failed { self.message() } else { None }
	}

	pub fn message(&self) -> Option<&str> {
		match self {
			Check::Trim => None,
			Check::Required { message }
			| Check::MinLength { message, .. }
			| Check::MaxLength { message, .. }
			| Check::Email { message }
			| Check::Pattern { message, .. } => Some(message.as_str()),
		}
	}
}

/// Ordered checks for a single field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRule {
	checks: Vec<Check>,
}

impl FieldRule {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_check(mut self, check: Check) -> Self {
		self.checks.push(check);
		self
	}

	pub fn trim(self) -> Self {
		self.with_check(Check::Trim)
	}

	pub fn required(self, message: impl Into<String>) -> Self {
		self.with_check(Check::Required {
			message: message.into(),
		})
	}

	pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
		self.with_check(Check::MinLength {
			min,
			message: message.into(),
		})
	}

	pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
		self.with_check(Check::MaxLength {
			max,
			message: message.into(),
		})
	}

	pub fn email(self, message: impl Into<String>) -> Self {
		self.with_check(Check::Email {
			message: message.into(),
		})
	}

	pub fn pattern(self, pattern: Regex, message: impl Into<String>) -> Self {
		self.with_check(Check::Pattern {
			pattern,
			message: message.into(),
		})
	}

	pub fn checks(&self) -> &[Check] {
		&self.checks
	}

	/// Whether an empty value fails this rule
	///
	/// # Examples
	///
	/// ```
	/// use formgate_validators::FieldRule;
	///
	/// assert!(FieldRule::new().min_length(1, "Required").is_required());
	/// assert!(FieldRule::new().email("Invalid").is_required());
	/// assert!(!FieldRule::new().max_length(10, "Too long").is_required());
	/// ```
	pub fn is_required(&self) -> bool {
		self.check("").is_some()
	}

	/// Run the checks in order, returning the first failing message
	pub fn check(&self, value: &str) -> Option<&str> {
		let mut current = value;
		for check in &self.checks {
			if let Check::Trim = check {
				current = current.trim();
				continue;
			}
			if let Some(message) = check.failure(current) {
				return Some(message);
			}
		}
		None
	}
}

/// Declarative per-field rule set.
///
/// Fields present in the values but absent from the schema are valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
	#[serde(default)]
	fields: IndexMap<FieldName, FieldRule>,
}

impl Schema {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declare the rule for a field, replacing any earlier one
	pub fn field(mut self, name: impl Into<FieldName>, rule: FieldRule) -> Self {
		self.fields.insert(name.into(), rule);
		self
	}

	pub fn rule(&self, name: &str) -> Option<&FieldRule> {
		self.fields.get(name)
	}

	pub fn fields(&self) -> impl Iterator<Item = (&FieldName, &FieldRule)> {
		self.fields.iter()
	}

	pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
		let schema: Schema = toml::from_str(source)?;
		tracing::debug!(fields = schema.fields.len(), "schema loaded");
		Ok(schema)
	}
}

impl ValidationStrategy for Schema {
	fn validate(&self, values: &FormValues) -> ErrorMap {
		let mut errors = ErrorMap::new();
		for (field, value) in values.iter() {
			let Some(rule) = self.fields.get(field.as_str()) else {
				continue;
			};
			if let Some(message) = rule.check(value) {
				errors.insert(field, message);
			}
		}
		errors
	}
}

mod regex_serde {
	use regex::Regex;
	use serde::{Deserialize, Deserializer, Serializer};

	pub(super) fn serialize<S: Serializer>(pattern: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(pattern.as_str())
	}

	pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Regex, D::Error> {
		let source = String::deserialize(deserializer)?;
		Regex::new(&source).map_err(serde::de::Error::custom)
	}
}
