//! Form orchestration for formgate
//!
//! [`FormController`] ties a [`FieldRegistry`](formgate_core::FieldRegistry)
//! to a [`ValidationStrategy`](formgate_validators::ValidationStrategy) and a
//! [`SubmissionSink`]. Edits only store values; `submit` validates and either
//! hands the values to the sink and resets the form, or keeps the values and
//! reports every failing field.
//!
//! The [`identity`] module declares the first name / last name / email /
//! password form and its strategies, and [`FormVariant`] builds ready
//! controllers for each of them.
//!
//! ## Example
//!
//! ```
//! use formgate_forms::{FormController, RecordingSink, SubmissionResult, identity};
//!
//! let sink = RecordingSink::new();
//! let mut form = FormController::new(identity::fields(), identity::schema())
//! 	.with_sink(sink.clone());
//!
//! form.update_field("firstName", "Jane").unwrap();
//! form.update_field("lastName", "Doe").unwrap();
//! form.update_field("email", "not-an-email").unwrap();
//! form.update_field("password", "secret12").unwrap();
//!
//! let SubmissionResult::Rejected(errors) = form.submit() else {
//! 	panic!("expected rejection");
//! };
//! assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
//!
//! form.update_field("email", "jane@doe.com").unwrap();
//! assert!(form.submit().is_accepted());
//! assert_eq!(sink.submissions().len(), 1);
//! assert!(form.values().is_all_empty());
//! ```

pub mod config;
pub mod controller;
pub mod identity;
pub mod notification;
pub mod submission;
pub mod variants;

pub use config::{ConfigError, FormConfig};
pub use controller::{FormController, FormState};
pub use notification::{
	Notification, NotificationSink, NotificationVariant, Notifier, RecordingNotifier,
};
pub use submission::{LogSink, RecordingSink, SubmissionResult, SubmissionSink};
pub use variants::FormVariant;
