// Copyright 2026 Dmitry Tantsur <divius.inside@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error and Result implementations.

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use super::accessor::ResourceKind;

/// Kind of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authentication failure
    ///
    /// Maps to HTTP 401.
    AuthenticationFailed,

    /// Access denied.
    ///
    /// Maps to HTTP 403.
    AccessDenied,

    /// Requested resource was not found.
    ///
    /// Roughly maps to HTTP 404 and 410.
    ResourceNotFound,

    /// Invalid value passed to one of paremeters.
    ///
    /// May be result of HTTP 400.
    InvalidInput,

    /// Conflict in the request.
    Conflict,

    /// The resource reported its terminal error status.
    ErrorStateReached,

    /// The resource did not reach the requested status in time.
    PollTimeout,

    /// Protocol-level error reported by underlying HTTP library.
    ProtocolError,

    /// Response received from the server is malformed.
    InvalidResponse,

    /// Internal server error.
    ///
    /// Maps to HTTP 5xx codes.
    InternalServerError,

    /// Poll configuration is invalid or cannot be loaded.
    InvalidConfig,

    /// Failed to set up the runtime for synchronous calls.
    RuntimeFailure,
}

/// Diagnostic context of a failed wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollDetails {
    /// Kind of the resource being waited for.
    pub resource_kind: ResourceKind,
    /// ID of the resource.
    pub resource_id: String,
    /// Status the caller was waiting for, `None` when waiting for deletion.
    pub target: Option<String>,
    /// The last status observed before failing.
    pub last_status: Option<String>,
    /// Time spent waiting.
    pub elapsed: Duration,
    /// The configured time out.
    pub timeout: Duration,
}

/// Error from a poll or an OpenStack call.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    details: Option<Box<PollDetails>>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result of a poll or an OpenStack call.
pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    /// Create a new error of the given kind.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Error {
        Error {
            kind,
            message: Some(message.into()),
            details: None,
            source: None,
        }
    }

    pub(crate) fn with_details(mut self, details: PollDetails) -> Error {
        self.details = Some(Box::new(details));
        self
    }

    pub(crate) fn with_source<E>(mut self, source: E) -> Error
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Error message, if any.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Context of the failed wait.
    ///
    /// Only set for `ErrorStateReached` and `PollTimeout`.
    #[inline]
    pub fn details(&self) -> Option<&PollDetails> {
        self.details.as_deref()
    }
}

impl ErrorKind {
    /// Short description of the error kind.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::AuthenticationFailed => "Failed to authenticate",
            ErrorKind::AccessDenied => "Access to the resource is denied",
            ErrorKind::ResourceNotFound => "Requested resource was not found",
            ErrorKind::InvalidInput => "Input value(s) are invalid or missing",
            ErrorKind::Conflict => "Requested cannot be fulfilled due to a conflict",
            ErrorKind::ErrorStateReached => "Resource got into an error state",
            ErrorKind::PollTimeout => "Time out reached while waiting for the resource",
            ErrorKind::ProtocolError => "Error when accessing the server",
            ErrorKind::InvalidResponse => "Received invalid response",
            ErrorKind::InternalServerError => "Internal server error or bad gateway",
            ErrorKind::InvalidConfig => "Poll configuration is invalid",
            ErrorKind::RuntimeFailure => "Failed to start an asynchronous runtime",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(ref msg) = self.message {
            write!(f, ": {}", msg)
        } else {
            Ok(())
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        if let Some(ref err) = self.source {
            let err: &(dyn StdError + 'static) = &**err;
            Some(err)
        } else {
            None
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
            details: None,
            source: None,
        }
    }
}

impl From<osauth::Error> for Error {
    fn from(value: osauth::Error) -> Error {
        let kind = match value.kind() {
            osauth::ErrorKind::AuthenticationFailed => ErrorKind::AuthenticationFailed,
            osauth::ErrorKind::AccessDenied => ErrorKind::AccessDenied,
            osauth::ErrorKind::ResourceNotFound => ErrorKind::ResourceNotFound,
            osauth::ErrorKind::InvalidInput => ErrorKind::InvalidInput,
            osauth::ErrorKind::Conflict => ErrorKind::Conflict,
            osauth::ErrorKind::InvalidResponse => ErrorKind::InvalidResponse,
            osauth::ErrorKind::InternalServerError => ErrorKind::InternalServerError,
            _ => ErrorKind::ProtocolError,
        };
        Error::new(kind, value.to_string()).with_source(value)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Error {
        Error::new(
            ErrorKind::InvalidConfig,
            format!("Cannot parse poll configuration: {}", value),
        )
        .with_source(value)
    }
}

#[cfg(test)]
pub mod test {
    use std::error::Error as StdError;
    use std::time::Duration;

    use super::{Error, ErrorKind, PollDetails};
    use crate::accessor::ResourceKind;

    #[test]
    fn test_display_with_message() {
        let err = Error::new(ErrorKind::ResourceNotFound, "Volume abcd does not exist");
        assert_eq!(
            err.to_string(),
            "Requested resource was not found: Volume abcd does not exist"
        );
        assert_eq!(err.message(), Some("Volume abcd does not exist"));
        assert!(err.details().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_display_without_message() {
        let err = Error::from(ErrorKind::InvalidConfig);
        assert_eq!(err.to_string(), "Poll configuration is invalid");
        assert!(err.message().is_none());
    }

    #[test]
    fn test_details() {
        let details = PollDetails {
            resource_kind: ResourceKind::Backup,
            resource_id: "b1".to_string(),
            target: Some("available".to_string()),
            last_status: Some("creating".to_string()),
            elapsed: Duration::from_secs(3),
            timeout: Duration::from_secs(2),
        };
        let err = Error::new(ErrorKind::PollTimeout, "too slow").with_details(details.clone());
        assert_eq!(err.kind(), ErrorKind::PollTimeout);
        assert_eq!(err.details(), Some(&details));
    }

    #[test]
    fn test_yaml_error_has_source() {
        let yaml_err = serde_yaml::from_str::<u64>("[").unwrap_err();
        let err = Error::from(yaml_err);
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_osauth_error() {
        let cases = [
            (
                osauth::ErrorKind::ResourceNotFound,
                "Volume abcd could not be found",
                ErrorKind::ResourceNotFound,
            ),
            (
                osauth::ErrorKind::InvalidInput,
                "Invalid volume id",
                ErrorKind::InvalidInput,
            ),
            (
                osauth::ErrorKind::EndpointNotFound,
                "No volumev3 endpoint",
                ErrorKind::ProtocolError,
            ),
        ];
        for (source_kind, message, expected) in cases {
            let err = Error::from(osauth::Error::new(source_kind, message));
            assert_eq!(err.kind(), expected);
            assert!(err.message().unwrap().contains(message));
            assert!(err.source().is_some());
        }
    }
}
