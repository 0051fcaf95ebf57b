//! Convenience constructors for the usual endpoint outcomes.
//!
//! The `succeed_*` helpers write a complete 200 response and return `Ok`, so
//! they are normally the last unit of an endpoint. Unless the router runs
//! with `terminal_success`, units registered after them still execute.

use serde::Serialize;

use crate::router::endpoint_error::{BoxError, EndpointError};
use crate::router::handler::EndpointResult;
use crate::server::{HttpResponse, StatusCode};

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// An [`EndpointError`] whose body is a plain message.
pub fn fail_with_error_message(status: StatusCode, message: impl Into<String>, cause: impl Into<BoxError>) -> EndpointError {
    EndpointError::new(status, message, Some(cause.into()))
}

/// An [`EndpointError`] whose body is `value` serialized as JSON.
///
/// If `value` cannot be serialized the error becomes a 500 with an empty
/// body, and its cause records both the serialization failure and `cause`.
pub fn fail_with_json_status<T>(status: StatusCode, value: &T, cause: impl Into<BoxError>) -> EndpointError
where
    T: Serialize + ?Sized,
{
    let cause = cause.into();
    match serde_json::to_string(value) {
        Ok(json) => EndpointError::new(status, json, Some(cause)),
        Err(e) => EndpointError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            String::new(),
            Some(format!("failed to serialize response JSON: {e}; original cause: {cause}").into()),
        ),
    }
}

/// Write `body` as a 200 `application/json` response.
///
/// A body that serializes to `null` (for example `None`) is rejected with a
/// 500, as is one that fails to serialize.
pub fn succeed_with_json_status<T>(body: &T, rw: &mut HttpResponse) -> EndpointResult
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_vec(body).map_err(|e| {
        fail_with_error_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_SERVER_ERROR,
            format!("unable to serialize response body: {e}"),
        )
    })?;
    if json == b"null" {
        return Err(fail_with_error_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_SERVER_ERROR,
            "response body was null",
        ));
    }

    rw.set_header("Content-Type", "application/json");
    rw.write_header(StatusCode::OK);
    rw.write(&json);
    Ok(())
}

/// Write `message` as a 200 `text/plain` response.
pub fn succeed_with_message(message: &str, rw: &mut HttpResponse) -> EndpointResult {
    rw.set_header("Content-Type", "text/plain");
    rw.write_header(StatusCode::OK);
    rw.write(message.as_bytes());
    Ok(())
}
