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

//! CLI configuration
//!
//! Loaded from an optional JSON file, then overridden by `STREAMCTL_*`
//! environment variables (`__` separates nested keys, e.g.
//! `STREAMCTL_KAFKA__CLUSTER_ID`).

use std::path::Path;
use std::path::PathBuf;

use config::Config;
use config::Environment;
use config::File;
use config::FileFormat;
use serde::Deserialize;
use serde::Serialize;

use crate::core::StreamctlResult;
use crate::core::ToolsError;

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "STREAMCTL_CONFIG";

pub const DEFAULT_API_URL: &str = "https://api.openshift.com";

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub api_url: String,
    pub access_token: Option<String>,
    pub request_timeout_ms: u64,
    pub kafka: Option<KafkaServiceConfig>,
}

/// The currently selected Kafka instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaServiceConfig {
    pub cluster_id: String,
    /// Overrides the admin API URL derived from the bootstrap host
    pub admin_api_url: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            kafka: None,
        }
    }
}

impl CliConfig {
    /// Load from the default location
    pub fn load() -> StreamctlResult<Self> {
        Self::load_from(Self::location().as_deref())
    }

    /// Load from `path` (missing files are allowed) plus the environment
    pub fn load_from(path: Option<&Path>) -> StreamctlResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Json).required(false));
        }
        let cfg = builder
            .add_source(
                Environment::with_prefix("STREAMCTL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| ToolsError::invalid_configuration("config", e.to_string()))?;
        let config = cfg
            .try_deserialize::<CliConfig>()
            .map_err(|e| ToolsError::invalid_configuration("config", e.to_string()))?;
        Ok(config)
    }

    /// `$STREAMCTL_CONFIG`, else `<config dir>/streamctl/config.json`
    pub fn location() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join("streamctl").join("config.json")),
        }
    }

    pub fn has_kafka(&self) -> bool {
        self.kafka.as_ref().is_some_and(|kafka| !kafka.cluster_id.is_empty())
    }

    /// Instance id from the flag if given, else from the configuration
    pub fn kafka_id(&self, flag: Option<&str>) -> StreamctlResult<String> {
        if let Some(id) = flag.map(str::trim).filter(|id| !id.is_empty()) {
            return Ok(id.to_string());
        }
        match &self.kafka {
            Some(kafka) if self.has_kafka() => Ok(kafka.cluster_id.clone()),
            _ => Err(ToolsError::NoKafkaSelected.into()),
        }
    }

    pub fn admin_api_url(&self) -> Option<&str> {
        self.kafka.as_ref().and_then(|kafka| kafka.admin_api_url.as_deref())
    }
}
