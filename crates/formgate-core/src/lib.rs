//! Form state primitives for formgate
//!
//! This crate holds the pieces every form variant shares:
//! - [`FieldName`] and [`FieldSet`]: the closed, ordered set of declared fields
//! - [`FormValues`]: one string value per declared field, never missing
//! - [`ErrorMap`]: at most one message per invalid field, in declaration order
//! - [`FieldRegistry`]: pure value storage with touched/dirty tracking
//!
//! Validation lives in `formgate-validators`, orchestration in `formgate-forms`.
//!
//! ## Example
//!
//! ```
//! use formgate_core::{FieldDescriptor, FieldRegistry, FieldSet};
//!
//! let fields = FieldSet::new()
//! 	.with_field(FieldDescriptor::new("firstName").with_label("First Name"))
//! 	.with_field(FieldDescriptor::new("email").with_label("Email"));
//!
//! let mut registry = FieldRegistry::new(fields);
//! registry.set_value("firstName", "Jane").unwrap();
//!
//! assert_eq!(registry.values().get("firstName"), Some("Jane"));
//! assert_eq!(registry.values().get("email"), Some(""));
//! assert!(registry.set_value("nickname", "JJ").is_err());
//! ```

pub mod error;
pub mod error_map;
pub mod field;
pub mod registry;
pub mod values;

pub use error::{FormError, FormResult};
pub use error_map::ErrorMap;
pub use field::{FieldDescriptor, FieldName, FieldSet, Widget};
pub use registry::FieldRegistry;
pub use values::FormValues;
