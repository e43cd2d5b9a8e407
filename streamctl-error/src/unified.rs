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

//! Unified error system for streamctl
//!
//! Every error a command can return is one of the variants of
//! [`StreamctlError`]. The per-layer enums live in submodules and convert
//! automatically, which keeps `?` usable from the HTTP client up to `main`.

mod api;
mod render;
mod tools;

use std::io;

pub use api::ApiError;
pub use api::ErrorCategory;
pub use api::ErrorContext;
pub use api::TemplateData;
pub use api::TransportError;
pub use render::RenderError;
use thiserror::Error;
pub use tools::ToolsError;

/// Main error type for all streamctl operations
#[derive(Debug, Error)]
pub enum StreamctlError {
    // ============================================================================
    // Remote API Errors
    // ============================================================================
    /// A remote call failed; classified by HTTP status
    #[error(transparent)]
    Api(#[from] ApiError),

    // ============================================================================
    // Output Errors
    // ============================================================================
    /// Writing command output failed
    #[error(transparent)]
    Render(#[from] RenderError),

    // ============================================================================
    // Tools Errors
    // ============================================================================
    /// Flag validation and configuration errors
    #[error(transparent)]
    Tools(#[from] ToolsError),

    // ============================================================================
    // System Errors
    // ============================================================================
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl StreamctlError {
    /// Category of the underlying remote call failure, if this is one
    pub fn api_category(&self) -> Option<ErrorCategory> {
        match self {
            Self::Api(err) => Some(err.category()),
            _ => None,
        }
    }
}

/// Result type alias for streamctl operations
pub type StreamctlResult<T> = std::result::Result<T, StreamctlError>;
