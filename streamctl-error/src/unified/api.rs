// Copyright 2023 The Streamctl Authors
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

//! Remote API errors
//!
//! [`TransportError`] is what the HTTP client hands back when a call fails.
//! [`ApiError`] is the classified form that commands return to the user.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Interpolation data for a localized message template
pub type TemplateData = BTreeMap<&'static str, String>;

/// Raw failure of a remote call, before classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    status: Option<u16>,
    body: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl TransportError {
    /// Create an error for a call that never produced an HTTP response
    pub fn no_response<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: source.to_string(),
            status: None,
            body: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create an error for a response with a non-success status
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
            body: None,
            source: None,
        }
    }

    /// Create an error from a bare message, without any HTTP response
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Attach the response body returned alongside the error status
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach an underlying cause
    pub fn source_error<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the response, `None` when no response was obtained
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    #[inline]
    pub fn response_body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// An empty message marks a call that did not actually fail
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

/// Operation-specific data used to build a classified error
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorContext<'a> {
    /// Verb shown to the user, e.g. "list" or "view"
    pub operation: &'a str,
    /// Display name of the resource the call targeted
    pub resource_name: Option<&'a str>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(operation: &'a str) -> Self {
        Self {
            operation,
            resource_name: None,
        }
    }

    pub fn with_resource_name(mut self, name: &'a str) -> Self {
        self.resource_name = Some(name);
        self
    }
}

/// Stable, user-facing category of a failed remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Unauthorized,
    Forbidden,
    InternalServer,
    Unavailable,
    Unknown,
    TransportUnavailable,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::InternalServer => "internal server error",
            Self::Unavailable => "service unavailable",
            Self::Unknown => "unknown",
            Self::TransportUnavailable => "transport unavailable",
        };
        f.pad(name)
    }
}

/// Classified remote call failure
///
/// The English texts below are fallbacks; commands print the localized form
/// built from [`ApiError::message_id`] and [`ApiError::template_data`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// No HTTP response was obtained; the transport error is surfaced as is
    #[error(transparent)]
    Transport(TransportError),

    /// 401
    #[error("you are unauthorized to {operation} this resource")]
    Unauthorized {
        operation: String,
        #[source]
        source: TransportError,
    },

    /// 403
    #[error("you are forbidden to {operation} this resource")]
    Forbidden {
        operation: String,
        #[source]
        source: TransportError,
    },

    /// 500
    #[error("internal server error: {source}")]
    InternalServer {
        #[source]
        source: TransportError,
    },

    /// 503
    #[error("unable to connect to Kafka instance \"{name}\": {source}")]
    Unavailable {
        name: String,
        #[source]
        source: TransportError,
    },

    /// Any other status; the transport error is surfaced as is
    #[error(transparent)]
    Unknown(TransportError),
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport(_) => ErrorCategory::TransportUnavailable,
            Self::Unauthorized { .. } => ErrorCategory::Unauthorized,
            Self::Forbidden { .. } => ErrorCategory::Forbidden,
            Self::InternalServer { .. } => ErrorCategory::InternalServer,
            Self::Unavailable { .. } => ErrorCategory::Unavailable,
            Self::Unknown(_) => ErrorCategory::Unknown,
        }
    }

    /// The original transport error, whatever the category
    pub fn transport_error(&self) -> &TransportError {
        match self {
            Self::Transport(source) | Self::Unknown(source) => source,
            Self::Unauthorized { source, .. }
            | Self::Forbidden { source, .. }
            | Self::InternalServer { source }
            | Self::Unavailable { source, .. } => source,
        }
    }

    /// Message catalog id, `None` for errors surfaced unmodified
    pub fn message_id(&self) -> Option<&'static str> {
        match self {
            Self::Unauthorized { .. } => Some("common.error.unauthorized"),
            Self::Forbidden { .. } => Some("common.error.forbidden"),
            Self::InternalServer { .. } => Some("common.error.internalServerError"),
            Self::Unavailable { .. } => Some("common.error.unableToConnectToKafka"),
            Self::Transport(_) | Self::Unknown(_) => None,
        }
    }

    pub fn template_data(&self) -> TemplateData {
        let mut data = TemplateData::new();
        match self {
            Self::Unauthorized { operation, .. } | Self::Forbidden { operation, .. } => {
                data.insert("Operation", operation.clone());
            }
            Self::Unavailable { name, .. } => {
                data.insert("Name", name.clone());
            }
            _ => {}
        }
        data
    }

    /// Whether the localized message is followed by the transport error text
    pub fn appends_cause(&self) -> bool {
        matches!(self, Self::InternalServer { .. } | Self::Unavailable { .. })
    }
}
