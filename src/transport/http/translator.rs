//! Capability outcome -> wire response.

use crate::domain::generic::JSON_CONTENT_TYPE;
use crate::domain::resource::{Resource, ResourceError};
use crate::transport::http::dispatcher::Outcome;
use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

pub const TEXT_CONTENT_TYPE: &str = "text/plain";
pub const DELETE_FAILED_MESSAGE: &str = "error deleting object";

/// A response with no body and no content type.
pub fn empty(status: StatusCode) -> Response {
    status.into_response()
}

pub fn with_body(status: StatusCode, content_type: &str, body: Vec<u8>) -> Response {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap_or_else(|err| {
            tracing::warn!(content_type, error = %err, "unusable content type on response");
            empty(StatusCode::INTERNAL_SERVER_ERROR)
        })
}

/// 400 for a failed create/update: field errors as JSON, anything else as plain text.
pub fn error_response(err: ResourceError) -> Response {
    match err {
        ResourceError::Validation(errors) => with_body(
            StatusCode::BAD_REQUEST,
            JSON_CONTENT_TYPE,
            errors.to_json_bytes(),
        ),
        ResourceError::Generic(message) => with_body(
            StatusCode::BAD_REQUEST,
            TEXT_CONTENT_TYPE,
            message.into_bytes(),
        ),
    }
}

/// Translates an outcome into the response for `resource`.
///
/// After a successful update the resource is read again when it is readable, so the client
/// sees the resulting state. A failure of that read is a 500.
pub fn respond<R: Resource + ?Sized>(resource: &R, outcome: Outcome) -> Response {
    let content_type = resource.content_type();
    match outcome {
        Outcome::Read(Ok(data)) => with_body(StatusCode::OK, content_type, data),
        Outcome::Read(Err(err)) => {
            tracing::debug!(error = %err, "read failed");
            empty(StatusCode::BAD_REQUEST)
        }
        Outcome::Created(Ok(created)) => match created.read() {
            Ok(data) => with_body(StatusCode::CREATED, content_type, data),
            Err(err) => {
                tracing::warn!(error = %err, "created resource could not be read back");
                empty(StatusCode::INTERNAL_SERVER_ERROR)
            }
        },
        Outcome::Mutated(Ok(())) => match resource.as_readable() {
            Some(readable) => match readable.read() {
                Ok(data) => with_body(StatusCode::OK, content_type, data),
                Err(err) => {
                    tracing::warn!(error = %err, "updated resource could not be read back");
                    empty(StatusCode::INTERNAL_SERVER_ERROR)
                }
            },
            None => empty(StatusCode::OK),
        },
        Outcome::Created(Err(err)) | Outcome::Mutated(Err(err)) => error_response(err),
        Outcome::Deleted(Ok(())) => empty(StatusCode::OK),
        Outcome::Deleted(Err(err)) => {
            tracing::warn!(error = %err, "delete failed");
            with_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                TEXT_CONTENT_TYPE,
                DELETE_FAILED_MESSAGE.as_bytes().to_vec(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::{FieldErrors, Readable, Updatable};

    struct Broken;

    impl Readable for Broken {
        fn read(&self) -> Result<Vec<u8>, ResourceError> {
            Err(ResourceError::generic("cannot encode"))
        }
    }

    impl Updatable for Broken {
        fn update(&mut self, _body: &[u8]) -> Result<(), ResourceError> {
            Ok(())
        }
    }

    impl Resource for Broken {
        fn content_type(&self) -> &str {
            "application/json"
        }

        fn as_readable(&self) -> Option<&dyn Readable> {
            Some(self)
        }

        fn as_updatable(&mut self) -> Option<&mut dyn Updatable> {
            Some(self)
        }
    }

    struct WriteOnly;

    impl Resource for WriteOnly {
        fn content_type(&self) -> &str {
            "application/json"
        }
    }

    fn content_type(response: &Response) -> Option<&str> {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn field_errors_render_as_json() {
        let errors: FieldErrors = [("age", "Too old")].into_iter().collect();
        let response = error_response(errors.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(content_type(&response), Some("application/json"));
        assert_eq!(body_bytes(response).await, br#"{"age":"Too old"}"#);
    }

    #[tokio::test]
    async fn generic_errors_render_as_text() {
        let response = error_response(ResourceError::generic("expected value"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(content_type(&response), Some("text/plain"));
        assert_eq!(body_bytes(response).await, b"expected value");
    }

    #[tokio::test]
    async fn failed_read_is_bad_request_with_empty_body() {
        let response = respond(&Broken, Outcome::Read(Broken.read()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn failed_read_after_update_is_internal_error() {
        let response = respond(&Broken, Outcome::Mutated(Ok(())));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn failed_read_after_create_is_internal_error() {
        let response = respond(&WriteOnly, Outcome::Created(Ok(Box::new(Broken))));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn update_without_readable_is_empty_ok() {
        let response = respond(&WriteOnly, Outcome::Mutated(Ok(())));
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn failed_delete_has_fixed_message() {
        let response = respond(
            &WriteOnly,
            Outcome::Deleted(Err(ResourceError::generic("locked"))),
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_bytes(response).await, DELETE_FAILED_MESSAGE.as_bytes());
    }
}
