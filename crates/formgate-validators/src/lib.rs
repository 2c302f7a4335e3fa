//! Validation strategies for formgate
//!
//! A [`ValidationStrategy`] turns the current [`FormValues`] into an
//! [`ErrorMap`]. Strategies are pure: the same values always produce the same
//! errors, and values are never modified.
//!
//! Three strategies are provided:
//!
//! - [`AdHocStrategy`]: fields registered with a required message and an
//!   optional pattern, checked imperatively (required first, then pattern)
//! - [`Schema`]: declarative, serde-loadable check lists per field, reporting
//!   the first failing check
//! - [`PresenceStrategy`]: every empty field fails with one shared message
//!
//! ## Example
//!
//! ```
//! use formgate_core::FormValues;
//! use formgate_validators::{Check, FieldRule, Schema, ValidationStrategy};
//!
//! let schema = Schema::new()
//! 	.field("email", FieldRule::new().email("Please enter a valid email address"))
//! 	.field("password", FieldRule::new().min_length(8, "Password must be at least 8 characters"));
//!
//! let values = FormValues::from_iter([("email", "jane@doe.com"), ("password", "short")]);
//! let errors = schema.validate(&values);
//!
//! assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));
//! assert!(!errors.contains("email"));
//! ```

pub mod ad_hoc;
pub mod patterns;
pub mod presence;
pub mod schema;

pub use ad_hoc::{AdHocStrategy, Registration};
pub use presence::{DEFAULT_PRESENCE_MESSAGE, PresenceStrategy};
pub use schema::{Check, FieldRule, Schema, SchemaError};

use formgate_core::{ErrorMap, FormValues};
use std::sync::Arc;

/// Policy producing the errors for a set of form values.
///
/// Implementations must be deterministic and side-effect free. Errors are
/// recorded in the iteration order of `values`, which is field declaration
/// order.
pub trait ValidationStrategy: Send + Sync {
	fn validate(&self, values: &FormValues) -> ErrorMap;
}

impl<S: ValidationStrategy + ?Sized> ValidationStrategy for Box<S> {
	fn validate(&self, values: &FormValues) -> ErrorMap {
		(**self).validate(values)
	}
}

impl<S: ValidationStrategy + ?Sized> ValidationStrategy for Arc<S> {
	fn validate(&self, values: &FormValues) -> ErrorMap {
		(**self).validate(values)
	}
}
