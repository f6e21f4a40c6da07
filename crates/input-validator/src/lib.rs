//! Input Validation
//!
//! Range checks on raw policyholder input. The feature encoder is total
//! only over the domains enforced here.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidationConfig, ValidationResult, Validator};
