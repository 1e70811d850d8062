use axum::Json;
use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Code sent back to the frontend when the vendor could not be reached at all.
pub const ERR_UPSTREAM: i64 = -1;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Important data missing: {0}")]
    MissingRequiredData(&'static str),
    #[error("Response received is not ok [{0}]")]
    FailedStatusCode(String),
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    Base64Decode(#[from] base64::DecodeError),
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("Upstream service unavailable: {0}")]
    Upstream(ResolverError),
    #[error("Upstream payload could not be processed: {0}")]
    BadPayload(ResolverError),
}

impl From<ResolverError> for EndpointError {
    fn from(error: ResolverError) -> Self {
        match error {
            ResolverError::Reqwest(_) | ResolverError::FailedStatusCode(_) => {
                EndpointError::Upstream(error)
            }
            _ => EndpointError::BadPayload(error),
        }
    }
}

impl IntoResponse for EndpointError {
    #[tracing::instrument]
    fn into_response(self) -> Response<Body> {
        tracing::warn!(
            "Something Happened when processing this endpoint: {:?}",
            self
        );

        let status = match self {
            EndpointError::Upstream(_) => StatusCode::BAD_GATEWAY,
            EndpointError::BadPayload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({
            "code": ERR_UPSTREAM,
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_map_to_upstream() {
        let error = EndpointError::from(ResolverError::FailedStatusCode("503".into()));
        assert!(matches!(error, EndpointError::Upstream(_)));
        assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn decode_failures_map_to_bad_payload() {
        let json_error = serde_json::from_str::<u32>("nope").unwrap_err();
        let error = EndpointError::from(ResolverError::SerdeJson(json_error));
        assert!(matches!(error, EndpointError::BadPayload(_)));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
