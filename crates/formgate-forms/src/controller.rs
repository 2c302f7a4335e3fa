//! Form controller
//!
//! The controller owns the field registry, the validation strategy and the
//! submission sink, and drives the submit cycle:
//!
//! ```text
//! Editing --submit--> Validating --no errors--> Accepted --reset--> Editing
//!                         |
//!                         +--errors--> Rejected --edit--> Editing
//! ```
//!
//! It never branches on which strategy it holds.

use crate::config::FormConfig;
use crate::submission::{SubmissionResult, SubmissionSink};
use formgate_core::{ErrorMap, FieldRegistry, FieldSet, FormResult, FormValues};
use formgate_validators::ValidationStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a [`FormController`]
///
/// `Validating` and `Accepted` are transient: [`FormController::submit`]
/// passes through them and returns in `Editing` or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
	#[default]
	Editing,
	Validating,
	Rejected,
	Accepted,
}

impl fmt::Display for FormState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			FormState::Editing => "editing",
			FormState::Validating => "validating",
			FormState::Rejected => "rejected",
			FormState::Accepted => "accepted",
		};
		f.write_str(name)
	}
}

/// Orchestrates edits, validation and submission of one form
///
/// # Examples
///
/// ```
/// use formgate_core::{FieldDescriptor, FieldSet};
/// use formgate_forms::{FormController, FormState};
/// use formgate_validators::PresenceStrategy;
///
/// let fields = FieldSet::new()
/// 	.with_field(FieldDescriptor::new("firstName"))
/// 	.with_field(FieldDescriptor::new("lastName"));
/// let mut form = FormController::new(fields, PresenceStrategy::new());
///
/// form.update_field("firstName", "Jane").unwrap();
/// assert!(form.submit().is_rejected());
/// assert_eq!(form.state(), FormState::Rejected);
///
/// form.update_field("lastName", "Doe").unwrap();
/// assert_eq!(form.state(), FormState::Editing);
/// assert!(form.submit().is_accepted());
/// assert!(form.values().is_all_empty());
/// ```
pub struct FormController {
	registry: FieldRegistry,
	strategy: Box<dyn ValidationStrategy>,
	sink: Option<Box<dyn SubmissionSink>>,
	config: FormConfig,
	errors: ErrorMap,
	state: FormState,
}

impl FormController {
	/// Create a controller whose fields all start as `""`
	pub fn new(fields: FieldSet, strategy: impl ValidationStrategy + 'static) -> Self {
		Self::from_registry(FieldRegistry::new(fields), strategy)
	}

	/// Create a controller over an existing registry
	///
	/// The registry's defaults are the values restored after each accepted
	/// submission.
	pub fn from_registry(
		registry: FieldRegistry,
		strategy: impl ValidationStrategy + 'static,
	) -> Self {
		Self {
			registry,
			strategy: Box::new(strategy),
			sink: None,
			config: FormConfig::default(),
			errors: ErrorMap::new(),
			state: FormState::Editing,
		}
	}

	/// Attach the sink that receives submission outcomes
	///
	/// The sink is configured with the controller's current [`FormConfig`].
	pub fn with_sink(mut self, sink: impl SubmissionSink + 'static) -> Self {
		let mut sink: Box<dyn SubmissionSink> = Box::new(sink);
		sink.configure(&self.config);
		self.sink = Some(sink);
		self
	}

	/// Replace the configuration, passing it on to an attached sink
	pub fn with_config(mut self, config: FormConfig) -> Self {
		self.config = config;
		if let Some(sink) = self.sink.as_mut() {
			sink.configure(&self.config);
		}
		self
	}

	/// Store a new value for `field`
	///
	/// Fails with [`FormError::UnknownField`](formgate_core::FormError) for
	/// an undeclared field, leaving the controller unchanged. A rejected form
	/// returns to `Editing`. Errors are only recomputed here when
	/// `validate_on_change` is enabled; otherwise they keep describing the
	/// last submission.
	pub fn update_field(&mut self, field: &str, value: impl Into<String>) -> FormResult<()> {
		self.registry.set_value(field, value)?;
		if self.state == FormState::Rejected {
			self.transition(FormState::Editing);
		}
		if self.config.validate_on_change {
			self.errors = self.strategy.validate(self.registry.values());
		}
		Ok(())
	}

	/// Validate the current values and submit them if they pass
	///
	/// On acceptance the sink receives the values, then the registry is reset
	/// to its defaults and the errors are cleared. On rejection the values
	/// are left exactly as submitted.
	pub fn submit(&mut self) -> SubmissionResult {
		self.transition(FormState::Validating);
		let errors = self.strategy.validate(self.registry.values());

		if errors.is_empty() {
			let values = self.registry.snapshot();
			self.transition(FormState::Accepted);
			tracing::info!(fields = values.len(), "form submission accepted");
			if let Some(sink) = self.sink.as_mut() {
				sink.accepted(&values);
			}
			self.registry.reset_to_defaults();
			self.errors = ErrorMap::new();
			self.transition(FormState::Editing);
			SubmissionResult::Accepted(values)
		} else {
			self.transition(FormState::Rejected);
			tracing::warn!(
				invalid_fields = errors.len(),
				errors = %errors,
				"form submission rejected"
			);
			if let Some(sink) = self.sink.as_mut() {
				sink.rejected(&errors);
			}
			self.errors = errors.clone();
			SubmissionResult::Rejected(errors)
		}
	}

	/// Errors from the most recent validation, empty before any
	pub fn current_errors(&self) -> &ErrorMap {
		&self.errors
	}

	/// Current error message of one field
	pub fn error_for(&self, field: &str) -> FormResult<Option<&str>> {
		let name = self.registry.fields().resolve(field)?;
		Ok(self.errors.get(name.as_str()))
	}

	/// Whether submitting now would be accepted
	///
	/// Runs the strategy without touching state or errors.
	pub fn can_submit(&self) -> bool {
		self.strategy.validate(self.registry.values()).is_empty()
	}

	/// Discard edits and errors without submitting
	pub fn reset(&mut self) {
		self.registry.reset_to_defaults();
		self.errors = ErrorMap::new();
		self.transition(FormState::Editing);
	}

	pub fn state(&self) -> FormState {
		self.state
	}

	pub fn values(&self) -> &FormValues {
		self.registry.values()
	}

	pub fn field_set(&self) -> &FieldSet {
		self.registry.fields()
	}

	pub fn registry(&self) -> &FieldRegistry {
		&self.registry
	}

	pub fn config(&self) -> &FormConfig {
		&self.config
	}

	fn transition(&mut self, next: FormState) {
		tracing::debug!(from = %self.state, to = %next, "form state changed");
		self.state = next;
	}
}

impl fmt::Debug for FormController {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormController")
			.field("fields", &self.registry.fields().len())
			.field("state", &self.state)
			.field("errors", &self.errors)
			.field("config", &self.config)
			.field("has_sink", &self.sink.is_some())
			.finish_non_exhaustive()
	}
}
