use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::profiles::ProfileError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders a message an operator can act on without server
/// access: a missing credential, missing profile files, and generic failures
/// are always distinguishable.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing credential")]
    MissingCredential,

    #[error("{0}")]
    ProfilesMissing(String),

    #[error("{context}: {detail}")]
    Generation { context: String, detail: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps a completion failure, keeping the missing-credential case distinct.
    pub fn from_llm(context: &str, err: LlmError) -> Self {
        match err {
            LlmError::MissingCredential => AppError::MissingCredential,
            other => AppError::Generation {
                context: context.to_string(),
                detail: other.to_string(),
            },
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::Missing { .. } => AppError::ProfilesMissing(err.to_string()),
            ProfileError::Io { .. } => AppError::Internal(anyhow::Error::new(err)),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingCredential => {
                tracing::error!("Generation requested but ANTHROPIC_API_KEY is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MISSING_CREDENTIAL",
                    "ANTHROPIC_API_KEY is not configured. Add it to the server environment \
                    (or .env file) and restart the server."
                        .to_string(),
                )
            }
            AppError::ProfilesMissing(msg) => {
                tracing::error!("{msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROFILES_MISSING",
                    format!("{msg}. Add the voice profile files and try again."),
                )
            }
            AppError::Generation { context, detail } => {
                tracing::error!("{context}: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_FAILED",
                    format!("{context}: {detail}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("An internal server error occurred: {e}"),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_credential_stays_distinct() {
        let err = AppError::from_llm("Failed to generate ideas", LlmError::MissingCredential);
        assert!(matches!(err, AppError::MissingCredential));
    }

    #[test]
    fn test_provider_error_keeps_detail() {
        let err = AppError::from_llm(
            "Failed to generate ideas",
            LlmError::Api {
                status: 404,
                message: "model: not found".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Failed to generate ideas: API error (status 404): model: not found"
        );
    }

    #[test]
    fn test_missing_profiles_message_lists_files() {
        let err: AppError = ProfileError::Missing {
            dir: PathBuf::from("profiles"),
            files: vec!["primary.txt".to_string(), "rita.txt".to_string()],
        }
        .into();
        match err {
            AppError::ProfilesMissing(msg) => {
                assert_eq!(msg, "Profile file(s) not found in profiles: primary.txt, rita.txt");
            }
            other => panic!("expected ProfilesMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingCredential.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Generation {
                context: "c".into(),
                detail: "d".into()
            }
            .into_response()
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
