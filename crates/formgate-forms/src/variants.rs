//! Catalog of identity form variants
//!
//! The variants share the identity fields and the controller; only the
//! validation strategy and the rejection feedback differ.

use crate::controller::FormController;
use crate::identity;
use crate::notification::{NotificationSink, Notifier};
use formgate_validators::ValidationStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
	/// All fields required, one form-level message on rejection
	Simple,
	/// Fields registered with per-field required and pattern rules
	Registered,
	/// Fields validated by a declarative schema
	Schema,
}

impl FormVariant {
	pub const ALL: [FormVariant; 3] = [
		FormVariant::Simple,
		FormVariant::Registered,
		FormVariant::Schema,
	];

	pub fn title(&self) -> &'static str {
		match self {
			FormVariant::Simple => "Simple HTML Form",
			FormVariant::Registered => "Form using field registration",
			FormVariant::Schema => "Form using a schema",
		}
	}

	pub fn strategy(&self) -> Box<dyn ValidationStrategy> {
		match self {
			FormVariant::Simple => Box::new(identity::presence_strategy()),
			FormVariant::Registered => Box::new(identity::ad_hoc_strategy()),
			FormVariant::Schema => Box::new(identity::schema()),
		}
	}

	/// Build a controller over the identity fields that reports outcomes
	/// through `notifier`
	///
	/// Only the simple variant notifies rejections; the others show their
	/// errors next to each field.
	///
	/// # Examples
	///
	/// ```
	/// use formgate_forms::{FormVariant, NotificationVariant, RecordingNotifier};
	///
	/// let notifier = RecordingNotifier::new();
	/// let mut form = FormVariant::Simple.controller(notifier.clone());
	///
	/// assert!(form.submit().is_rejected());
	/// let notice = notifier.last().unwrap();
	/// assert_eq!(notice.variant, NotificationVariant::Destructive);
	/// assert_eq!(notice.title, "Please fill all the fields.");
	/// ```
	pub fn controller<N: Notifier + 'static>(&self, notifier: N) -> FormController {
		let fields = identity::fields();
		let sink = NotificationSink::new(notifier, fields.clone())
			.with_rejection_notices(*self == FormVariant::Simple);
		FormController::new(fields, self.strategy()).with_sink(sink)
	}
}

impl fmt::Display for FormVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.title())
	}
}
