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

//! Builds API clients from the loaded configuration

use std::time::Duration;

use super::config::CliConfig;
use super::http_client::ControlPlaneClient;
use super::http_client::HttpTinyClient;
use super::http_client::KafkaAdminClient;
use super::kafka::KafkaInstance;
use crate::core::StreamctlResult;
use crate::core::ToolsError;

pub struct Connection {
    config: CliConfig,
}

impl Connection {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn control_plane(&self) -> StreamctlResult<ControlPlaneClient> {
        let http = HttpTinyClient::new(&self.config.api_url, self.config.access_token.clone(), self.timeout())?;
        Ok(ControlPlaneClient::new(http))
    }

    pub fn kafka_admin(&self, instance: &KafkaInstance) -> StreamctlResult<KafkaAdminClient> {
        let url = self.admin_api_url(instance)?;
        let http = HttpTinyClient::new(&url, self.config.access_token.clone(), self.timeout())?;
        Ok(KafkaAdminClient::new(http))
    }

    /// Configured override, else `https://admin-server-<bootstrap host>/rest`
    pub fn admin_api_url(&self, instance: &KafkaInstance) -> StreamctlResult<String> {
        if let Some(url) = self.config.admin_api_url() {
            return Ok(url.to_string());
        }
        let host = instance
            .bootstrap_server_host
            .as_deref()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| {
                ToolsError::invalid_configuration(
                    "bootstrap_server_host",
                    format!("Kafka instance '{}' has no bootstrap server host yet", instance.display_name()),
                )
            })?;
        // the admin server listens on 443, drop the broker port
        let host = host.rsplit_once(':').map_or(host, |(name, _)| name);
        Ok(format!("https://admin-server-{host}/rest"))
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.request_timeout_ms)
    }
}
