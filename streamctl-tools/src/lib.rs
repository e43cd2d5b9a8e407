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

//! Streamctl - command-line client for a managed Kafka control plane
//!
//! This crate provides both:
//! - **Core**: response classification, row mapping and the API clients
//! - **CLI**: command definitions, output rendering and validation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           CLI Layer (bin/)              │
//! │  - Command parsing (clap)               │
//! │  - Output rendering (cli/render)        │
//! │  - Input validation (validators/)       │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │         Core Logic (core/)              │
//! │  - Response classification              │
//! │  - Consumer group row mapping           │
//! │  - Structured documents                 │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Remote APIs (core/api)           │
//! │  - Control plane (Kafka instances)      │
//! │  - Kafka admin (consumer groups)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ## As a Library
//!
//! ```rust,ignore
//! use streamctl_tools::cli::formatters::RenderMode;
//! use streamctl_tools::cli::pretty_printer::NoPrettyPrinter;
//! use streamctl_tools::cli::render;
//!
//! let mut out = Vec::new();
//! render::render_bytes(&mut out, br#"{"name":"my-kafka"}"#, RenderMode::Yaml, &NoPrettyPrinter)?;
//! ```
//!
//! ## As a CLI Tool
//!
//! ```bash
//! streamctl consumer-group list --instance-id c5hv7iru4an1g84pogp0 -o yaml
//! ```

// Core business logic - reusable across different interfaces
pub mod core {
    //! Core business logic module
    //!
    //! Nothing in here writes to a terminal. Functions take their inputs
    //! explicitly and return values or classified errors.
    //!
    //! # Available Modules
    //!
    //! - [`api`] - API traits and their HTTP implementations
    //! - [`classifier`] - HTTP outcome to error category mapping
    //! - [`consumer_group`] - Consumer group types and row mapping
    //! - [`document`] - Order-preserving JSON documents
    //! - [`kafka`] - Kafka instance types and lookup
    //! - [`table_rows`] - Table projection used by the default output mode

    pub mod api;
    pub mod classifier;
    pub mod config;
    pub mod connection;
    pub mod consumer_group;
    pub mod document;
    pub mod http_client;
    pub mod kafka;
    pub mod localizer;
    pub mod table_rows;

    // Re-export error types from streamctl-error
    pub use streamctl_error::StreamctlError;
    pub use streamctl_error::StreamctlResult;
    pub use streamctl_error::ToolsError;
}

// CLI presentation layer
pub mod cli {
    //! CLI presentation layer
    //!
    //! - [`formatters`] - Output formatters (JSON, YAML, Table, Pretty)
    //! - [`pretty_printer`] - Optional external pretty-printer
    //! - [`render`] - Entry points used by every command
    //! - [`validators`] - Input validators

    pub mod formatters;
    pub mod pretty_printer;
    pub mod render;
    pub mod validators;
}

// UI utilities for user-facing messages
pub mod ui;

pub mod commands;

pub mod log;

// CLI entry point
pub mod streamctl_cli;
