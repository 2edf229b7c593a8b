//! Request parameter validation.
//!
//! Pure checks over the extracted request input, run before any storage
//! access. Each endpoint declares exactly the parameters it accepts and
//! rejects requests that miss a required one, with the endpoint's fixed
//! error message. A rejected request never reaches the repository.

use std::collections::BTreeMap;

use crate::api::RestaurantId;

/// Client-input rejection, produced before any query is issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    /// A required identifying parameter is absent, empty, or not numeric.
    #[error("{0}")]
    MissingParameter(String),
    /// A parameter was supplied to an operation that accepts none.
    #[error("{0}")]
    UnexpectedParameter(String),
    /// A required body field is absent or empty.
    #[error("{0}")]
    MissingField(String),
}

/// Require a restaurant identifier from an optional query value.
///
/// Fails with [`ParamError::MissingParameter`] carrying `message` when the
/// value is absent, empty, or not coercible to a numeric ID.
pub fn require_identifier(
    value: Option<&str>,
    message: &str,
) -> Result<RestaurantId, ParamError> {
    value
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<i64>().ok())
        .map(RestaurantId::new)
        .ok_or_else(|| ParamError::MissingParameter(message.to_string()))
}

/// Require that the query parameter set is empty.
pub fn require_no_params(
    params: &BTreeMap<String, String>,
    message: &str,
) -> Result<(), ParamError> {
    if params.is_empty() {
        Ok(())
    } else {
        Err(ParamError::UnexpectedParameter(message.to_string()))
    }
}

/// Require a non-empty body field.
pub fn require_field(value: Option<&str>, message: &str) -> Result<String, ParamError> {
    value
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ParamError::MissingField(message.to_string()))
}

/// Require a restaurant identifier from a raw path segment.
///
/// The rejection message names the offending value, matching the
/// boundary's observed behavior for malformed path params.
pub fn require_path_identifier(raw: &str) -> Result<RestaurantId, ParamError> {
    raw.parse::<i64>()
        .map(RestaurantId::new)
        .map_err(|_| ParamError::MissingParameter(format!("path param: {} malformed", raw)))
}
