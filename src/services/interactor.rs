//! The contract every route's business logic implements.
//!
//! An interactor first turns the untrusted, merged request input into a typed
//! value, then acts on it. Keeping the two apart lets the dispatch wrapper
//! treat failures from either phase the same way.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::utils::errors::{InteractorError, ValidationError};

#[async_trait(?Send)]
pub trait Interactor {
    type Input;
    type Output: Serialize;

    /// Checks `raw` and converts it. Must not perform any business logic.
    fn validate_input(&self, raw: Value) -> Result<Self::Input, ValidationError>;

    /// Runs the action. Errors are returned as-is; the caller decides how
    /// they reach the client.
    async fn execute(&self, input: Self::Input) -> Result<Self::Output, InteractorError>;
}

/// Deserializes the merged request input into `T`, naming the offending
/// field on failure.
pub fn parse_input<T: DeserializeOwned>(raw: Value) -> Result<T, ValidationError> {
    serde_path_to_error::deserialize(raw).map_err(ValidationError::from_deserialize)
}
