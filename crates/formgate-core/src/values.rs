//! Form values

use crate::field::FieldName;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One string value per field, in declaration order.
///
/// An empty field holds `""`; a declared field is never missing. Equality
/// compares the field/value pairs and ignores order.
///
/// # Examples
///
/// ```
/// use formgate_core::FormValues;
///
/// let values = FormValues::from_iter([
/// 	("firstName", "Jane"),
/// 	("lastName", ""),
/// ]);
///
/// assert_eq!(values.get("firstName"), Some("Jane"));
/// assert_eq!(values.get("lastName"), Some(""));
/// assert_eq!(values.get("email"), None);
/// assert!(!values.is_all_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
	values: IndexMap<FieldName, String>,
}

impl FormValues {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style variant of [`FormValues::insert`]
	pub fn with_value(mut self, field: impl Into<FieldName>, value: impl Into<String>) -> Self {
		self.insert(field, value);
		self
	}

	/// Set a value, keeping the field's position if it already exists
	pub fn insert(&mut self, field: impl Into<FieldName>, value: impl Into<String>) {
		self.values.insert(field.into(), value.into());
	}

	pub fn get(&self, field: &str) -> Option<&str> {
		self.values.get(field).map(String::as_str)
	}

	pub fn contains(&self, field: &str) -> bool {
		self.values.contains_key(field)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
		self.values.iter().map(|(name, value)| (name, value.as_str()))
	}

	pub fn names(&self) -> impl Iterator<Item = &FieldName> {
		self.values.keys()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Whether every field holds `""`
	pub fn is_all_empty(&self) -> bool {
		self.values.values().all(String::is_empty)
	}
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
	K: Into<FieldName>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(field, value)| (field.into(), value.into()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insert_keeps_original_position() {
		// Arrange
		let mut values = FormValues::new()
			.with_value("firstName", "")
			.with_value("lastName", "");

		// Act
		values.insert("firstName", "Jane");

		// Assert
		let names: Vec<&str> = values.names().map(FieldName::as_str).collect();
		assert_eq!(names, ["firstName", "lastName"]);
		assert_eq!(values.get("firstName"), Some("Jane"));
	}

	#[rstest]
	fn test_equality_ignores_order() {
		// Arrange
		let forward = FormValues::from_iter([("a", "1"), ("b", "2")]);
		let backward = FormValues::from_iter([("b", "2"), ("a", "1")]);

		// Act + Assert
		assert_eq!(forward, backward);
	}

	#[rstest]
	#[case(&[("a", ""), ("b", "")], true)]
	#[case(&[("a", ""), ("b", " ")], false)]
	#[case(&[], true)]
	fn test_is_all_empty(#[case] pairs: &[(&'static str, &'static str)], #[case] expected: bool) {
		// Arrange
		let values: FormValues = pairs.iter().copied().collect();

		// Act + Assert
		assert_eq!(values.is_all_empty(), expected);
	}

	#[rstest]
	fn test_serializes_as_ordered_object() {
		// Arrange
		let values = FormValues::from_iter([("lastName", "Doe"), ("firstName", "Jane")]);

		// Act
		let json = serde_json::to_string(&values).unwrap();

		// Assert
		assert_eq!(json, r#"{"lastName":"Doe","firstName":"Jane"}"#);
	}
}
