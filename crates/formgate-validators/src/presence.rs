//! All-fields-required validation

use crate::ValidationStrategy;
use formgate_core::{ErrorMap, FormValues};

pub const DEFAULT_PRESENCE_MESSAGE: &str = "Please fill all the fields.";

/// Every empty field fails with the same form-level message.
///
/// # Examples
///
/// ```
/// use formgate_core::FormValues;
/// use formgate_validators::{PresenceStrategy, ValidationStrategy};
///
/// let values = FormValues::from_iter([("firstName", "Jane"), ("lastName", ""), ("email", "")]);
/// let errors = PresenceStrategy::new().validate(&values);
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.distinct_messages(), ["Please fill all the fields."]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceStrategy {
	message: String,
}

impl PresenceStrategy {
	pub fn new() -> Self {
		Self::with_message(DEFAULT_PRESENCE_MESSAGE)
	}

	pub fn with_message(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

impl Default for PresenceStrategy {
	fn default() -> Self {
		Self::new()
	}
}

impl ValidationStrategy for PresenceStrategy {
	fn validate(&self, values: &FormValues) -> ErrorMap {
		values
			.iter()
			.filter(|(_, value)| value.is_empty())
			.map(|(field, _)| (field, self.message.as_str()))
			.collect()
	}
}
