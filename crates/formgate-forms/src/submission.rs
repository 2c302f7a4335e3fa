//! Submission outcomes and sinks
//!
//! A [`SubmissionSink`] is the collaborator that receives accepted values.
//! The controller calls it exactly once per accepted submission, before the
//! registry is reset, and optionally tells it about rejections.

use crate::config::FormConfig;
use formgate_core::{ErrorMap, FieldSet, FormValues};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Placeholder written to logs in place of secret values
pub const REDACTED: &str = "[REDACTED]";

/// Outcome of one submission attempt
///
/// # Examples
///
/// ```
/// use formgate_core::{ErrorMap, FormValues};
/// use formgate_forms::SubmissionResult;
///
/// let accepted = SubmissionResult::Accepted(FormValues::from_iter([("email", "a@b.com")]));
/// assert!(accepted.is_accepted());
/// assert_eq!(accepted.values().and_then(|v| v.get("email")), Some("a@b.com"));
///
/// let rejected = SubmissionResult::Rejected(ErrorMap::from_iter([("email", "Email is required")]));
/// assert!(rejected.is_rejected());
/// assert!(rejected.values().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum SubmissionResult {
	/// Every field passed validation; carries the submitted values
	Accepted(FormValues),
	/// At least one field failed; carries every failure
	Rejected(ErrorMap),
}

impl SubmissionResult {
	pub fn is_accepted(&self) -> bool {
		matches!(self, SubmissionResult::Accepted(_))
	}

	pub fn is_rejected(&self) -> bool {
		matches!(self, SubmissionResult::Rejected(_))
	}

	pub fn values(&self) -> Option<&FormValues> {
		match self {
			SubmissionResult::Accepted(values) => Some(values),
			SubmissionResult::Rejected(_) => None,
		}
	}

	pub fn errors(&self) -> Option<&ErrorMap> {
		match self {
			SubmissionResult::Accepted(_) => None,
			SubmissionResult::Rejected(errors) => Some(errors),
		}
	}
}

/// Receiver of submission outcomes
///
/// Closures taking `&FormValues` are sinks that ignore rejections:
///
/// ```
/// use formgate_core::FormValues;
/// use formgate_forms::SubmissionSink;
///
/// let mut count = 0;
/// let mut sink = |_: &FormValues| count += 1;
/// sink.accepted(&FormValues::new());
/// assert_eq!(count, 1);
/// ```
pub trait SubmissionSink: Send {
	/// Apply the owning controller's configuration
	///
	/// Called when the sink is attached to a controller and whenever the
	/// controller's configuration is replaced.
	fn configure(&mut self, _config: &FormConfig) {}

	/// Called once per accepted submission with the submitted values
	fn accepted(&mut self, values: &FormValues);

	/// Called once per rejected submission
	fn rejected(&mut self, _errors: &ErrorMap) {}
}

impl<F> SubmissionSink for F
where
	F: FnMut(&FormValues) + Send,
{
	fn accepted(&mut self, values: &FormValues) {
		self(values)
	}
}

/// Render values as `name: value` pairs for log output
///
/// Values of secret fields (password widgets) are replaced by [`REDACTED`]
/// when `redact_secrets` is set. Fields not declared in `fields` are never
/// treated as secret.
///
/// # Examples
///
/// ```
/// use formgate_core::{FieldDescriptor, FieldSet, FormValues, Widget};
/// use formgate_forms::submission::summarize;
///
/// let fields = FieldSet::new()
/// 	.with_field(FieldDescriptor::new("email"))
/// 	.with_field(FieldDescriptor::new("password").with_widget(Widget::PasswordInput));
/// let values = FormValues::from_iter([("email", "a@b.com"), ("password", "secret12")]);
///
/// assert_eq!(summarize(&fields, &values, true), "email: a@b.com, password: [REDACTED]");
/// assert_eq!(summarize(&fields, &values, false), "email: a@b.com, password: secret12");
/// ```
pub fn summarize(fields: &FieldSet, values: &FormValues, redact_secrets: bool) -> String {
	values
		.iter()
		.map(|(name, value)| {
			let secret = fields
				.get(name.as_str())
				.is_some_and(|field| field.widget.is_secret());
			if secret && redact_secrets {
				format!("{name}: {REDACTED}")
			} else {
				format!("{name}: {value}")
			}
		})
		.collect::<Vec<_>>()
		.join(", ")
}

/// Sink that only logs outcomes
///
/// Once attached to a [`FormController`](crate::FormController), redaction
/// follows the controller's [`FormConfig::redact_secrets`].
#[derive(Debug, Clone)]
pub struct LogSink {
	fields: FieldSet,
	redact_secrets: bool,
}

impl LogSink {
	pub fn new(fields: FieldSet) -> Self {
		Self {
			fields,
			redact_secrets: true,
		}
	}

	pub fn with_redact_secrets(mut self, enabled: bool) -> Self {
		self.redact_secrets = enabled;
		self
	}
}

impl SubmissionSink for LogSink {
	fn configure(&mut self, config: &FormConfig) {
		self.redact_secrets = config.redact_secrets;
	}

	fn accepted(&mut self, values: &FormValues) {
		tracing::info!(
			submission = %summarize(&self.fields, values, self.redact_secrets),
			"form submitted"
		);
	}

	fn rejected(&mut self, errors: &ErrorMap) {
		tracing::warn!(errors = %errors, "form submission rejected");
	}
}

/// Sink that keeps every outcome in memory
///
/// Clones share the same storage, so a clone can be handed to a controller
/// while the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
	accepted: Arc<Mutex<Vec<FormValues>>>,
	rejected: Arc<Mutex<Vec<ErrorMap>>>,
}

impl RecordingSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Values of every accepted submission, oldest first
	pub fn submissions(&self) -> Vec<FormValues> {
		self.accepted.lock().clone()
	}

	/// Errors of every rejected submission, oldest first
	pub fn rejections(&self) -> Vec<ErrorMap> {
		self.rejected.lock().clone()
	}
}

impl SubmissionSink for RecordingSink {
	fn accepted(&mut self, values: &FormValues) {
		self.accepted.lock().push(values.clone());
	}

	fn rejected(&mut self, errors: &ErrorMap) {
		self.rejected.lock().push(errors.clone());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_result_accessors() {
		// Arrange
		let errors = ErrorMap::from_iter([("firstName", "First Name is required")]);
		let result = SubmissionResult::Rejected(errors.clone());

		// Assert
		assert!(!result.is_accepted());
		assert_eq!(result.errors(), Some(&errors));
		assert!(result.values().is_none());
	}

	#[rstest]
	fn test_result_serializes_with_outcome_tag() {
		// Arrange
		let result = SubmissionResult::Accepted(FormValues::from_iter([("firstName", "Jane")]));

		// Act
		let json = serde_json::to_value(&result).unwrap();

		// Assert
		assert_eq!(
			json,
			serde_json::json!({ "outcome": "accepted", "data": { "firstName": "Jane" } })
		);
	}

	#[rstest]
	fn test_recording_sink_clones_share_storage() {
		// Arrange
		let sink = RecordingSink::new();
		let mut handle = sink.clone();

		// Act
		handle.accepted(&FormValues::from_iter([("a", "1")]));
		handle.rejected(&ErrorMap::from_iter([("a", "bad")]));

		// Assert
		assert_eq!(sink.submissions(), vec![FormValues::from_iter([("a", "1")])]);
		assert_eq!(sink.rejections().len(), 1);
	}

	#[rstest]
	fn test_summarize_keeps_undeclared_fields_visible() {
		// Arrange
		let fields = FieldSet::new();
		let values = FormValues::from_iter([("password", "secret12")]);

		// Act
		let summary = summarize(&fields, &values, true);

		// Assert
		assert_eq!(summary, "password: secret12");
	}
}
