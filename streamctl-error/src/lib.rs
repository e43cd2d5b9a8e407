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

//! # Streamctl Error Handling
//!
//! Error types shared by every streamctl crate.
//!
//! Errors are grouped by the layer that produces them:
//! - [`ApiError`]: the outcome of a remote call, classified by HTTP status
//! - [`RenderError`]: failures writing command output
//! - [`ToolsError`]: flag validation and configuration problems
//!
//! All of them convert into [`StreamctlError`] through `From`, so command
//! handlers can use `?` throughout.
//!
//! ```rust
//! use streamctl_error::StreamctlError;
//! use streamctl_error::StreamctlResult;
//! use streamctl_error::ToolsError;
//!
//! fn limit(value: i32) -> StreamctlResult<i32> {
//!     if value < 1 {
//!         return Err(ToolsError::validation_error("limit", "must be at least 1").into());
//!     }
//!     Ok(value)
//! }
//! # assert!(limit(0).is_err());
//! ```

pub mod unified;

pub use unified::ApiError;
pub use unified::ErrorCategory;
pub use unified::ErrorContext;
pub use unified::RenderError;
pub use unified::StreamctlError;
pub use unified::StreamctlResult;
pub use unified::TemplateData;
pub use unified::ToolsError;
pub use unified::TransportError;
