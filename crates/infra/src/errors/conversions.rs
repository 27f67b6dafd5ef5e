//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use reqwest::StatusCode;
use scm_directory_domain::DirectoryError;

/// Longest slice of a response body quoted in an error message.
const BODY_SNIPPET_CHARS: usize = 200;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DirectoryError);

impl From<InfraError> for DirectoryError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DirectoryError> for InfraError {
    fn from(value: DirectoryError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDirectoryError {
    fn into_directory(self) -> DirectoryError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DirectoryError */
/* -------------------------------------------------------------------------- */

impl IntoDirectoryError for HttpError {
    fn into_directory(self) -> DirectoryError {
        if self.is_timeout() {
            return DirectoryError::Network("HTTP request timed out".into());
        }

        if self.is_builder() {
            return DirectoryError::Config(format!("invalid HTTP request: {self}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return DirectoryError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return status_error(status, "");
        }

        if self.is_decode() || self.is_body() {
            return DirectoryError::InvalidResponse(format!("failed to read HTTP body: {self}"));
        }

        DirectoryError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_directory())
    }
}

/* -------------------------------------------------------------------------- */
/* Non-2xx responses → DirectoryError */
/* -------------------------------------------------------------------------- */

/// Classify a non-success status whose body is not a GraphQL envelope.
pub fn status_error(status: StatusCode, body: &str) -> DirectoryError {
    let code = status.as_u16();
    let mut message =
        format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
    let snippet: String = body.trim().chars().take(BODY_SNIPPET_CHARS).collect();
    if !snippet.is_empty() {
        message.push_str(": ");
        message.push_str(&snippet);
    }

    match code {
        401 | 403 => DirectoryError::Auth(message),
        429 => DirectoryError::Network(message),
        400..=499 => DirectoryError::InvalidInput(message),
        _ => DirectoryError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
