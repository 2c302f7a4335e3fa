//! Field value storage
//!
//! [`FieldRegistry`] is pure storage: it overwrites values, hands out
//! snapshots and resets to defaults. It never validates and holds no error
//! state.

use crate::error::FormResult;
use crate::field::{FieldName, FieldSet};
use crate::values::FormValues;
use std::collections::HashSet;

/// Current value plus touched/dirty status of every declared field
#[derive(Debug, Clone)]
pub struct FieldRegistry {
	fields: FieldSet,
	defaults: FormValues,
	values: FormValues,
	touched: HashSet<FieldName>,
}

impl FieldRegistry {
	/// Create a registry whose defaults are all `""`
	pub fn new(fields: FieldSet) -> Self {
		let defaults = fields.empty_values();
		Self {
			values: defaults.clone(),
			defaults,
			fields,
			touched: HashSet::new(),
		}
	}

	/// Create a registry with explicit defaults
	///
	/// Fields missing from `defaults` default to `""`. A default for an
	/// undeclared field fails with [`FormError::UnknownField`](crate::FormError).
	///
	/// # Examples
	///
	/// ```
	/// use formgate_core::{FieldDescriptor, FieldRegistry, FieldSet, FormValues};
	///
	/// let fields = FieldSet::new()
	/// 	.with_field(FieldDescriptor::new("firstName"))
	/// 	.with_field(FieldDescriptor::new("lastName"));
	/// let defaults = FormValues::new().with_value("lastName", "Doe");
	///
	/// let registry = FieldRegistry::with_defaults(fields, &defaults).unwrap();
	/// assert_eq!(registry.values().get("firstName"), Some(""));
	/// assert_eq!(registry.values().get("lastName"), Some("Doe"));
	/// ```
	pub fn with_defaults(fields: FieldSet, defaults: &FormValues) -> FormResult<Self> {
		let defaults = Self::complete(&fields, defaults)?;
		Ok(Self {
			values: defaults.clone(),
			defaults,
			fields,
			touched: HashSet::new(),
		})
	}

	pub fn fields(&self) -> &FieldSet {
		&self.fields
	}

	/// Overwrite one field's value
	pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> FormResult<()> {
		let name = self.fields.resolve(field)?.clone();
		tracing::debug!(field = %name, "field value updated");
		self.values.insert(name.clone(), value);
		self.touched.insert(name);
		Ok(())
	}

	pub fn value(&self, field: &str) -> FormResult<&str> {
		let name = self.fields.resolve(field)?;
		Ok(self.values.get(name.as_str()).unwrap_or_default())
	}

	/// Borrow the current values
	pub fn values(&self) -> &FormValues {
		&self.values
	}

	/// Owned copy of the current values
	pub fn snapshot(&self) -> FormValues {
		self.values.clone()
	}

	pub fn defaults(&self) -> &FormValues {
		&self.defaults
	}

	/// Overwrite every field with `defaults` and clear touched status
	///
	/// Fields missing from `defaults` are set to `""`. The supplied values
	/// become the registry's defaults: dirtiness is measured against them and
	/// [`reset_to_defaults`](Self::reset_to_defaults) restores them.
	pub fn reset(&mut self, defaults: &FormValues) -> FormResult<()> {
		self.defaults = Self::complete(&self.fields, defaults)?;
		self.values = self.defaults.clone();
		self.touched.clear();
		tracing::debug!(fields = self.fields.len(), "field registry reset");
		Ok(())
	}

	/// Reset to the current defaults
	pub fn reset_to_defaults(&mut self) {
		self.values = self.defaults.clone();
		self.touched.clear();
		tracing::debug!(fields = self.fields.len(), "field registry reset");
	}

	/// Whether the field was edited since creation or the last reset
	pub fn is_touched(&self, field: &str) -> FormResult<bool> {
		let name = self.fields.resolve(field)?;
		Ok(self.touched.contains(name))
	}

	/// Whether the field's value differs from its default
	pub fn is_dirty(&self, field: &str) -> FormResult<bool> {
		let name = self.fields.resolve(field)?.as_str();
		Ok(self.values.get(name) != self.defaults.get(name))
	}

	fn complete(fields: &FieldSet, values: &FormValues) -> FormResult<FormValues> {
		for name in values.names() {
			fields.resolve(name.as_str())?;
		}
		Ok(fields
			.names()
			.map(|name| {
				let value = values.get(name.as_str()).unwrap_or_default();
				(name.clone(), value.to_string())
			})
			.collect())
	}
}
