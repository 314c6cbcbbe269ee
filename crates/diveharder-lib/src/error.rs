use thiserror::Error;

/// Convenient result alias for the diveharder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a usable response: the connection failed or
    /// every retry attempt was consumed.
    #[error("request to {url} failed after {attempts} attempt(s): {reason}")]
    Transport {
        url: String,
        attempts: u32,
        reason: String,
    },

    /// The server answered with a non-success status that is not retried.
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// A configured base URL cannot be extended with path segments.
    #[error("invalid base URL {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// Identification values cannot be sent as HTTP headers.
    #[error("invalid {field} for request identification: {message}")]
    InvalidIdentification {
        field: &'static str,
        message: String,
    },

    /// The response does not match the schema expected for an entity.
    #[error("failed to decode {entity}.{field}: {message}")]
    Decode {
        entity: &'static str,
        field: String,
        message: String,
    },

    /// A cross-reference was resolved through the shared context before it
    /// was created. This is a call-ordering bug and is never retried.
    #[error("resolution context has not been initialized; call Context::initialize first")]
    ContextNotInitialized,

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Returns `true` for failures raised by the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::Status { .. } | Error::Http(_)
        )
    }

    /// Returns `true` when the server reported that the requested resource
    /// does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Status { status: 404, .. })
    }

    pub(crate) fn decode(
        entity: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::Decode {
            entity,
            field: field.into(),
            message: message.into(),
        }
    }
}
