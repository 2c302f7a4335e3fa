//! The identity form: first name, last name, email and password
//!
//! Every form variant shares these four fields and differs only in the
//! strategy used to validate them.

use formgate_core::{FieldDescriptor, FieldName, FieldSet, Widget};
use formgate_validators::patterns::loose_email;
use formgate_validators::{AdHocStrategy, FieldRule, PresenceStrategy, Registration, Schema};

pub const FIRST_NAME: FieldName = FieldName::from_static("firstName");
pub const LAST_NAME: FieldName = FieldName::from_static("lastName");
pub const EMAIL: FieldName = FieldName::from_static("email");
pub const PASSWORD: FieldName = FieldName::from_static("password");

/// Minimum password length enforced by [`schema`]
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The four identity fields, in display order
pub fn fields() -> FieldSet {
	FieldSet::new()
		.with_field(
			FieldDescriptor::new(FIRST_NAME)
				.with_label("First Name")
				.with_placeholder("Enter first name"),
		)
		.with_field(
			FieldDescriptor::new(LAST_NAME)
				.with_label("Last Name")
				.with_placeholder("Enter Last name"),
		)
		.with_field(
			FieldDescriptor::new(EMAIL)
				.with_label("Email")
				.with_placeholder("Enter Email")
				.with_widget(Widget::EmailInput),
		)
		.with_field(
			FieldDescriptor::new(PASSWORD)
				.with_label("Password")
				.with_placeholder("Enter Your password")
				.with_widget(Widget::PasswordInput),
		)
}

/// Registered-field rules: every field required, email loosely checked
pub fn ad_hoc_strategy() -> AdHocStrategy {
	AdHocStrategy::new()
		.register(FIRST_NAME, Registration::required("First Name is required"))
		.register(LAST_NAME, Registration::required("Last Name is required"))
		.register(
			EMAIL,
			Registration::required("Email is required")
				.with_pattern(loose_email().clone(), "Email must be valid"),
		)
		.register(PASSWORD, Registration::required("Password is required"))
}

/// Declarative rules with a strict email format and a password minimum
pub fn schema() -> Schema {
	Schema::new()
		.field(
			FIRST_NAME,
			FieldRule::new().min_length(1, "Please enter your first name"),
		)
		.field(
			LAST_NAME,
			FieldRule::new().min_length(1, "Please enter your last name"),
		)
		.field(
			EMAIL,
			FieldRule::new().email("Please enter a valid email address"),
		)
		.field(
			PASSWORD,
			FieldRule::new().min_length(
				MIN_PASSWORD_LENGTH,
				format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
			),
		)
}

/// Every field required, one shared message
pub fn presence_strategy() -> PresenceStrategy {
	PresenceStrategy::new()
}
