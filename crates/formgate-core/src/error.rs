//! Integration errors
//!
//! These signal engine misuse (for example editing a field that was never
//! declared). User input problems are never reported here; they are data in
//! an [`ErrorMap`](crate::ErrorMap).

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("Unknown field: {0}")]
	UnknownField(String),
}

pub type FormResult<T> = Result<T, FormError>;
