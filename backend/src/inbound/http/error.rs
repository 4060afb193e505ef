//! HTTP adapter mapping for domain errors.
//!
//! Rejected registrations and logins answer `200 OK` with a plain-text
//! message, a missing session redirects to the login page, and the remaining
//! codes become plain-text error statuses. Internal and store-unavailable
//! messages never reach the client.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Page anonymous visitors are sent to when they hit a gated route.
pub const LOGIN_PATH: &str = "/login";

const REDACTED_MESSAGE: &str = "Internal server error";
const UNAVAILABLE_MESSAGE: &str = "Service unavailable";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::FOUND,
        ErrorCode::InvalidCredentials | ErrorCode::DuplicateAccount => StatusCode::OK,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message shown to the client for `error`.
fn client_message(error: &Error) -> &str {
    match error.code() {
        ErrorCode::InternalError => REDACTED_MESSAGE,
        ErrorCode::ServiceUnavailable => UNAVAILABLE_MESSAGE,
        _ => error.message(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError | ErrorCode::ServiceUnavailable => {
                error!(code = ?self.code(), message = self.message(), "request failed");
            }
            _ => debug!(code = ?self.code(), message = self.message(), "request rejected"),
        }
        if let Some(details) = self.details() {
            debug!(%details, "error details");
        }

        let mut builder = HttpResponseBuilder::new(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        if self.code() == ErrorCode::Unauthorized {
            return builder
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish();
        }

        builder
            .content_type(header::ContentType::plaintext())
            .body(client_message(self).to_owned())
    }
}
