//! Extractors that validate before the handler runs.
//!
//! [`ValidatedJson`] turns every way a body can be wrong (missing field,
//! `null` in a required field, wrong type, malformed JSON, missing content
//! type, failed `validator` rule) into a `400` validation error naming the
//! offending field. [`ValidatedPath`] does the same for path segments.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use hostel_core::{AppError, ErrorKind};

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Maps a serde data error (as rendered by axum) to a field-level message.
fn describe_data_error(body_text: &str) -> String {
    let detail = body_text
        .strip_prefix(DATA_ERROR_PREFIX)
        .unwrap_or(body_text);

    if let Some(field) = detail
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
    {
        return format!("{} is required", field);
    }

    match detail.split_once(": ") {
        Some((field, message)) if !field.contains(' ') => {
            if message.starts_with("invalid type: null") {
                format!("{} is required", field)
            } else {
                format!("{} is invalid", field)
            }
        }
        _ => "Invalid field type in request".to_string(),
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = match &rejection {
        JsonRejection::JsonDataError(_) => describe_data_error(&rejection.body_text()),
        JsonRejection::JsonSyntaxError(_) => "Malformed JSON in request body".to_string(),
        JsonRejection::MissingJsonContentType(_) => {
            "Missing 'Content-Type: application/json' header".to_string()
        }
        _ => {
            let status = rejection.status();
            let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                "Request body is too large".to_string()
            } else {
                "Invalid request body".to_string()
            };
            return AppError::new(status, ErrorKind::ValidationError, anyhow!(message));
        }
    };

    AppError::bad_request(anyhow!(message))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

fn path_rejection_to_error(rejection: PathRejection) -> AppError {
    AppError::bad_request(anyhow!(rejection.body_text()))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection_to_error)?;

        Ok(ValidatedPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let text = format!(
            "{}missing field `reg_no` at line 1 column 20",
            DATA_ERROR_PREFIX
        );
        assert_eq!(describe_data_error(&text), "reg_no is required");
    }

    #[test]
    fn test_null_field_is_required() {
        let text = format!(
            "{}cnic: invalid type: null, expected a string at line 1 column 12",
            DATA_ERROR_PREFIX
        );
        assert_eq!(describe_data_error(&text), "cnic is required");
    }

    #[test]
    fn test_wrong_type_names_field() {
        let text = format!(
            "{}block_id: invalid type: string \"one\", expected i32 at line 1 column 18",
            DATA_ERROR_PREFIX
        );
        assert_eq!(describe_data_error(&text), "block_id is invalid");
    }

    #[test]
    fn test_unrecognized_message_falls_back() {
        let text = format!("{}invalid type: integer `3`, expected a map", DATA_ERROR_PREFIX);
        assert_eq!(describe_data_error(&text), "Invalid field type in request");
    }
}
