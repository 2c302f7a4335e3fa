//! Per-field validation errors

use crate::field::FieldName;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mapping from invalid field to its single error message.
///
/// A field present in the map is invalid; an absent field is valid. Entries
/// iterate in the order they were recorded, which strategies keep equal to
/// field declaration order. Only the first message recorded for a field is
/// kept.
///
/// # Examples
///
/// ```
/// use formgate_core::ErrorMap;
///
/// let mut errors = ErrorMap::new();
/// errors.insert("email", "Email is required");
/// errors.insert("email", "Email must be valid");
///
/// assert_eq!(errors.get("email"), Some("Email is required"));
/// assert!(errors.get("firstName").is_none());
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
	errors: IndexMap<FieldName, String>,
}

impl ErrorMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record an error unless the field already has one
	pub fn insert(&mut self, field: impl Into<FieldName>, message: impl Into<String>) {
		self.errors
			.entry(field.into())
			.or_insert_with(|| message.into());
	}

	pub fn get(&self, field: &str) -> Option<&str> {
		self.errors.get(field).map(String::as_str)
	}

	pub fn contains(&self, field: &str) -> bool {
		self.errors.contains_key(field)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
		self.errors
			.iter()
			.map(|(name, message)| (name, message.as_str()))
	}

	pub fn fields(&self) -> impl Iterator<Item = &FieldName> {
		self.errors.keys()
	}

	/// Messages without repeats, in first-seen order
	pub fn distinct_messages(&self) -> Vec<&str> {
		let mut seen: Vec<&str> = Vec::new();
		for message in self.errors.values() {
			if !seen.contains(&message.as_str()) {
				seen.push(message);
			}
		}
		seen
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}
}

impl fmt::Display for ErrorMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, (field, message)) in self.iter().enumerate() {
			if index > 0 {
				f.write_str("; ")?;
			}
			write!(f, "{field}: {message}")?;
		}
		Ok(())
	}
}

impl<K, V> FromIterator<(K, V)> for ErrorMap
where
	K: Into<FieldName>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut errors = Self::new();
		for (field, message) in iter {
			errors.insert(field, message);
		}
		errors
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_iteration_follows_insertion_order() {
		// Arrange
		let errors = ErrorMap::from_iter([
			("firstName", "First Name is required"),
			("email", "Email must be valid"),
			("password", "Password is required"),
		]);

		// Act
		let fields: Vec<&str> = errors.fields().map(FieldName::as_str).collect();

		// Assert
		assert_eq!(fields, ["firstName", "email", "password"]);
	}

	#[rstest]
	fn test_display_lists_every_error() {
		// Arrange
		let errors = ErrorMap::from_iter([
			("firstName", "First Name is required"),
			("email", "Email must be valid"),
		]);

		// Act
		let rendered = errors.to_string();

		// Assert
		assert_eq!(
			rendered,
			"firstName: First Name is required; email: Email must be valid"
		);
	}

	#[rstest]
	fn test_distinct_messages_collapse_repeats() {
		// Arrange
		let errors = ErrorMap::from_iter([
			("firstName", "Please fill all the fields."),
			("email", "Please fill all the fields."),
			("password", "Password is required"),
		]);

		// Act
		let messages = errors.distinct_messages();

		// Assert
		assert_eq!(
			messages,
			["Please fill all the fields.", "Password is required"]
		);
	}

	#[rstest]
	fn test_empty_map_displays_nothing() {
		// Act + Assert
		assert_eq!(ErrorMap::new().to_string(), "");
		assert!(ErrorMap::new().is_empty());
	}
}
