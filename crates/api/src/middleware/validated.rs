//! JSON body extractor that enforces the shared request schema.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;

/// Like [`Json`], but runs the body's `validator` rules before the handler
/// sees it.
///
/// - Unparsable JSON or a wrong content type: 400 `BAD_REQUEST`.
/// - Missing or mistyped field: 400 `VALIDATION_ERROR`, keyed by field path.
/// - Rule violations: 400 `VALIDATION_ERROR` with per-field messages.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateNote>) -> AppResult<Json<()>> {
///     // input.content is known to be non-blank here
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let value: T = serde_path_to_error::deserialize(raw).map_err(invalid_field)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Turn a typed-deserialization failure into a field-level error.
///
/// A missing field fails at its parent, so the field name is taken from
/// serde's message instead of the path.
fn invalid_field(err: serde_path_to_error::Error<serde_json::Error>) -> AppError {
    let path = err.path().to_string();
    let message = err.into_inner().to_string();

    let field = match missing_field_name(&message) {
        Some(name) if path == "." => name.to_string(),
        Some(name) => format!("{path}.{name}"),
        None if path == "." => "__all__".to_string(),
        None => path,
    };

    AppError::InvalidField { field, message }
}

/// `missing field `x`` -> `x`.
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}
