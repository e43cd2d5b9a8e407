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

//! Response classification
//!
//! Maps the outcome of a remote call to one [`ApiError`] category. Commands
//! only supply an [`ErrorContext`]; the status dispatch lives here once.

use streamctl_error::ApiError;
use streamctl_error::ErrorContext;
use streamctl_error::TransportError;
use tracing::debug;

/// Classify a transport error.
///
/// | status | result |
/// |---|---|
/// | none or empty error | `None` |
/// | no HTTP response | [`ApiError::Transport`] |
/// | 401 | [`ApiError::Unauthorized`] with the operation |
/// | 403 | [`ApiError::Forbidden`] with the operation |
/// | 500 | [`ApiError::InternalServer`] |
/// | 503 | [`ApiError::Unavailable`] with the resource name |
/// | other | [`ApiError::Unknown`] |
pub fn classify(error: Option<TransportError>, context: &ErrorContext<'_>) -> Option<ApiError> {
    let error = error.filter(|e| !e.is_empty())?;

    let Some(status) = error.status() else {
        debug!(operation = context.operation, "no response received: {error}");
        return Some(ApiError::Transport(error));
    };

    debug!(operation = context.operation, status, "classifying failed call");
    let classified = match status {
        401 => ApiError::Unauthorized {
            operation: context.operation.to_string(),
            source: error,
        },
        403 => ApiError::Forbidden {
            operation: context.operation.to_string(),
            source: error,
        },
        500 => ApiError::InternalServer { source: error },
        503 => ApiError::Unavailable {
            name: context.resource_name.unwrap_or_default().to_string(),
            source: error,
        },
        _ => ApiError::Unknown(error),
    };
    Some(classified)
}

/// Lift a transport result through [`classify`].
///
/// An `Err` carrying an empty error has no value to return, so it surfaces as
/// [`ApiError::Unknown`].
pub fn check<T>(result: Result<T, TransportError>, context: &ErrorContext<'_>) -> Result<T, ApiError> {
    match result {
        Ok(value) => Ok(value),
        Err(error) if error.is_empty() => Err(ApiError::Unknown(error)),
        Err(error) => Err(classify(Some(error), context).unwrap_or_else(|| {
            ApiError::Unknown(TransportError::from_message("unclassified transport error"))
        })),
    }
}
