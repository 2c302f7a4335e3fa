//! Storage laws of the field registry

use formgate_core::{FieldDescriptor, FieldRegistry, FieldSet, FormError, FormValues};
use proptest::prelude::*;
use rstest::*;

const FIELDS: [&str; 3] = ["firstName", "lastName", "email"];

fn field_set() -> FieldSet {
	FIELDS.iter().map(|name| FieldDescriptor::new(*name)).collect()
}

fn edits() -> impl Strategy<Value = Vec<(usize, String)>> {
	prop::collection::vec((0..FIELDS.len(), ".{0,16}"), 0..20)
}

proptest! {
	#[test]
	fn prop_last_write_wins(edits in edits()) {
		let mut registry = FieldRegistry::new(field_set());
		let mut expected = field_set().empty_values();

		for (index, value) in &edits {
			registry.set_value(FIELDS[*index], value.clone()).unwrap();
			expected.insert(FIELDS[*index], value.clone());
		}

		prop_assert_eq!(registry.values(), &expected);
		prop_assert_eq!(registry.values().len(), FIELDS.len());
	}

	#[test]
	fn prop_reset_restores_defaults(edits in edits()) {
		let defaults = FormValues::from_iter([("lastName", "Doe")]);
		let mut registry = FieldRegistry::with_defaults(field_set(), &defaults).unwrap();
		let initial = registry.snapshot();

		for (index, value) in edits {
			registry.set_value(FIELDS[index], value).unwrap();
		}
		registry.reset_to_defaults();

		prop_assert_eq!(registry.values(), &initial);
		for field in FIELDS {
			prop_assert!(!registry.is_touched(field).unwrap());
			prop_assert!(!registry.is_dirty(field).unwrap());
		}
	}
}

#[rstest]
fn test_snapshot_is_detached() {
	// Arrange
	let mut registry = FieldRegistry::new(field_set());
	registry.set_value("firstName", "Jane").unwrap();
	let snapshot = registry.snapshot();

	// Act
	registry.set_value("firstName", "Janet").unwrap();

	// Assert
	assert_eq!(snapshot.get("firstName"), Some("Jane"));
	assert_eq!(registry.value("firstName").unwrap(), "Janet");
}

#[rstest]
fn test_unknown_default_is_rejected() {
	// Act
	let result = FieldRegistry::with_defaults(field_set(), &FormValues::from_iter([("age", "42")]));

	// Assert
	assert_eq!(
		result.map(|_| ()),
		Err(FormError::UnknownField("age".to_string()))
	);
}

#[rstest]
fn test_values_serialize_in_declaration_order() {
	// Arrange
	let mut registry = FieldRegistry::new(field_set());
	registry.set_value("email", "jane@doe.com").unwrap();

	// Act
	let json = serde_json::to_string(registry.values()).unwrap();

	// Assert
	assert_eq!(json, r#"{"firstName":"","lastName":"","email":"jane@doe.com"}"#);
}
