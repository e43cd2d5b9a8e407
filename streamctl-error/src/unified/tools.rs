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

//! Command-line specific errors
//!
//! Flag validation and configuration problems detected before any remote call.

use thiserror::Error;

/// Tools-specific errors for CLI operations
#[derive(Debug, Error)]
pub enum ToolsError {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// A flag was given a value outside its allowed set
    #[error("invalid value '{value}' for --{flag}, valid options are: {}", .valid.join(", "))]
    InvalidFlagValue {
        flag: &'static str,
        value: String,
        valid: Vec<&'static str>,
    },

    /// Input validation failed
    #[error("Validation failed for '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    /// A positional service name is not one the command knows about
    #[error("unknown service '{name}', valid services are: {}", .valid.join(", "))]
    UnknownService { name: String, valid: Vec<&'static str> },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// No Kafka instance is selected in the configuration or on the command line
    #[error("no Kafka instance is currently selected, use --instance-id or set kafka.cluster_id in the config")]
    NoKafkaSelected,

    /// Invalid configuration field
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },
}

impl ToolsError {
    // ============================================================================
    // Convenience Constructors
    // ============================================================================

    /// Create an invalid flag value error
    #[inline]
    pub fn invalid_flag_value(flag: &'static str, value: impl Into<String>, valid: &[&'static str]) -> Self {
        Self::InvalidFlagValue {
            flag,
            value: value.into(),
            valid: valid.to_vec(),
        }
    }

    /// Create a validation error
    #[inline]
    pub fn validation_error(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown service error
    #[inline]
    pub fn unknown_service(name: impl Into<String>, valid: &[&'static str]) -> Self {
        Self::UnknownService {
            name: name.into(),
            valid: valid.to_vec(),
        }
    }

    /// Create an invalid configuration error
    #[inline]
    pub fn invalid_configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
