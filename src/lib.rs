//! # formgate
//!
//! Form validation and submission with interchangeable validation strategies.
//!
//! A form is a fixed set of declared fields. The user edits values one field
//! at a time; on submit a validation strategy turns the current values into a
//! per-field error map. An empty error map accepts the submission, hands the
//! values to a sink and resets the form. Anything else rejects it, keeping
//! every entered value so the user can fix the reported fields.
//!
//! ## Crates
//!
//! - [`model`] (`formgate-core`): field names and descriptors, form values,
//!   error maps and the field registry
//! - [`validators`] (`formgate-validators`): the `ValidationStrategy` trait
//!   with ad-hoc, schema and presence implementations
//! - [`forms`] (`formgate-forms`): the form controller, submission sinks,
//!   notifications, configuration and the identity form catalog
//!
//! ## Quick Example
//!
//! ```
//! use formgate::prelude::*;
//!
//! let mut form = FormController::new(identity::fields(), identity::ad_hoc_strategy());
//!
//! form.update_field("lastName", "Doe").unwrap();
//! form.update_field("email", "a@b.com").unwrap();
//! form.update_field("password", "secret12").unwrap();
//!
//! let result = form.submit();
//! assert_eq!(
//! 	result.errors().and_then(|errors| errors.get("firstName")),
//! 	Some("First Name is required")
//! );
//! assert_eq!(form.values().get("lastName"), Some("Doe"));
//! ```

pub use formgate_core as model;
pub use formgate_forms as forms;
pub use formgate_validators as validators;

/// Commonly used types
pub mod prelude {
	pub use formgate_core::{
		ErrorMap, FieldDescriptor, FieldName, FieldRegistry, FieldSet, FormError, FormResult,
		FormValues, Widget,
	};
	pub use formgate_forms::{
		FormConfig, FormController, FormState, FormVariant, LogSink, Notification,
		NotificationSink, NotificationVariant, Notifier, RecordingNotifier, RecordingSink,
		SubmissionResult, SubmissionSink, identity,
	};
	pub use formgate_validators::{
		AdHocStrategy, FieldRule, PresenceStrategy, Registration, Schema, ValidationStrategy,
	};
}
