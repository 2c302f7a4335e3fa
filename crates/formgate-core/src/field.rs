//! Field declarations

use crate::error::{FormError, FormResult};
use crate::values::FormValues;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Name of a declared form field.
///
/// Names are either `'static` literals (usable in `const` items) or owned
/// strings, for example when loaded from a declarative schema file.
///
/// # Examples
///
/// ```
/// use formgate_core::FieldName;
///
/// const EMAIL: FieldName = FieldName::from_static("email");
///
/// assert_eq!(EMAIL, FieldName::new("email"));
/// assert_eq!(EMAIL.as_str(), "email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(Cow<'static, str>);

impl FieldName {
	pub const fn from_static(name: &'static str) -> Self {
		Self(Cow::Borrowed(name))
	}

	pub fn new(name: impl Into<String>) -> Self {
		Self(Cow::Owned(name.into()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for FieldName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for FieldName {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&'static str> for FieldName {
	fn from(name: &'static str) -> Self {
		Self::from_static(name)
	}
}

impl From<String> for FieldName {
	fn from(name: String) -> Self {
		Self::new(name)
	}
}

impl From<&FieldName> for FieldName {
	fn from(name: &FieldName) -> Self {
		name.clone()
	}
}

/// Input widget used to render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	#[default]
	TextInput,
	EmailInput,
	PasswordInput,
}

impl Widget {
	/// Whether values entered through this widget must stay out of logs.
	pub fn is_secret(&self) -> bool {
		matches!(self, Widget::PasswordInput)
	}

	pub fn input_type(&self) -> &'static str {
		match self {
			Widget::TextInput => "text",
			Widget::EmailInput => "email",
			Widget::PasswordInput => "password",
		}
	}
}

/// Presentation metadata for one declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
	pub name: FieldName,
	pub label: String,
	pub placeholder: Option<String>,
	#[serde(default)]
	pub widget: Widget,
}

impl FieldDescriptor {
	/// Create a text field whose label defaults to its name
	///
	/// # Examples
	///
	/// ```
	/// use formgate_core::{FieldDescriptor, Widget};
	///
	/// let field = FieldDescriptor::new("lastName");
	/// assert_eq!(field.label, "lastName");
	/// assert_eq!(field.widget, Widget::TextInput);
	/// assert_eq!(field.placeholder, None);
	/// ```
	pub fn new(name: impl Into<FieldName>) -> Self {
		let name = name.into();
		Self {
			label: name.to_string(),
			name,
			placeholder: None,
			widget: Widget::TextInput,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}
}

/// Ordered set of declared fields.
///
/// Declaration order is the evaluation and display order for values and
/// errors. Declaring a name twice replaces the earlier descriptor in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
	fields: IndexMap<FieldName, FieldDescriptor>,
}

impl FieldSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declare a field
	///
	/// # Examples
	///
	/// ```
	/// use formgate_core::{FieldDescriptor, FieldSet};
	///
	/// let fields = FieldSet::new()
	/// 	.with_field(FieldDescriptor::new("firstName"))
	/// 	.with_field(FieldDescriptor::new("lastName"))
	/// 	.with_field(FieldDescriptor::new("firstName").with_label("First Name"));
	///
	/// let names: Vec<&str> = fields.names().map(|n| n.as_str()).collect();
	/// assert_eq!(names, ["firstName", "lastName"]);
	/// assert_eq!(fields.get("firstName").unwrap().label, "First Name");
	/// ```
	pub fn with_field(mut self, field: FieldDescriptor) -> Self {
		self.add_field(field);
		self
	}

	pub fn add_field(&mut self, field: FieldDescriptor) {
		self.fields.insert(field.name.clone(), field);
	}

	pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// Look up the declared name, failing with [`FormError::UnknownField`]
	pub fn resolve(&self, name: &str) -> FormResult<&FieldName> {
		self.fields
			.get_key_value(name)
			.map(|(key, _)| key)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))
	}

	pub fn names(&self) -> impl Iterator<Item = &FieldName> {
		self.fields.keys()
	}

	pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
		self.fields.values()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Values for every declared field, all set to `""`
	pub fn empty_values(&self) -> FormValues {
		self.names()
			.map(|name| (name.clone(), String::new()))
			.collect()
	}
}

impl FromIterator<FieldDescriptor> for FieldSet {
	fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
		let mut fields = Self::new();
		for field in iter {
			fields.add_field(field);
		}
		fields
	}
}

impl<'a> IntoIterator for &'a FieldSet {
	type Item = &'a FieldDescriptor;
	type IntoIter = indexmap::map::Values<'a, FieldName, FieldDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.values()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[fixture]
	fn login_fields() -> FieldSet {
		FieldSet::new()
			.with_field(FieldDescriptor::new("email").with_widget(Widget::EmailInput))
			.with_field(FieldDescriptor::new("password").with_widget(Widget::PasswordInput))
	}

	#[rstest]
	fn test_field_name_static_and_owned_are_equal() {
		// Arrange
		let borrowed = FieldName::from_static("email");
		let owned = FieldName::new(String::from("email"));

		// Act + Assert
		assert_eq!(borrowed, owned);
		assert_eq!(borrowed.to_string(), "email");
	}

	#[rstest]
	fn test_field_name_serializes_as_plain_string() {
		// Arrange
		let name = FieldName::from_static("firstName");

		// Act
		let json = serde_json::to_string(&name).unwrap();
		let back: FieldName = serde_json::from_str(&json).unwrap();

		// Assert
		assert_eq!(json, "\"firstName\"");
		assert_eq!(back, name);
	}

	#[rstest]
	fn test_resolve_known_field(login_fields: FieldSet) {
		// Act
		let resolved = login_fields.resolve("password");

		// Assert
		assert_eq!(resolved, Ok(&FieldName::from_static("password")));
	}

	#[rstest]
	fn test_resolve_unknown_field(login_fields: FieldSet) {
		// Act
		let resolved = login_fields.resolve("username");

		// Assert
		assert_eq!(
			resolved,
			Err(FormError::UnknownField("username".to_string()))
		);
	}

	#[rstest]
	fn test_empty_values_cover_every_field_in_order(login_fields: FieldSet) {
		// Act
		let values = login_fields.empty_values();

		// Assert
		let pairs: Vec<(&str, &str)> = values.iter().map(|(n, v)| (n.as_str(), v)).collect();
		assert_eq!(pairs, [("email", ""), ("password", "")]);
	}

	#[rstest]
	#[case(Widget::TextInput, false, "text")]
	#[case(Widget::EmailInput, false, "email")]
	#[case(Widget::PasswordInput, true, "password")]
	fn test_widget_metadata(#[case] widget: Widget, #[case] secret: bool, #[case] input: &str) {
		// Act + Assert
		assert_eq!(widget.is_secret(), secret);
		assert_eq!(widget.input_type(), input);
	}

	#[rstest]
	fn test_field_set_from_iterator_keeps_order() {
		// Arrange
		let descriptors = ["c", "a", "b"].map(FieldDescriptor::new);

		// Act
		let fields: FieldSet = descriptors.into_iter().collect();

		// Assert
		let names: Vec<&str> = fields.names().map(FieldName::as_str).collect();
		assert_eq!(names, ["c", "a", "b"]);
		assert_eq!(fields.len(), 3);
	}
}
