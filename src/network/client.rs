// Copyright 2025 Lablup Inc. and Jeongkyu Shin
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

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::common::config::AppConfig;
use crate::error::{Error, Result};
use crate::inventory::HostEntry;
use crate::network::types::{ApiResponse, Credentials, SessionCredential, ThinPoolStat, TicketData};
use crate::traits::ThinPoolSource;

/// Scheme and port the management API listens on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub scheme: String,
    pub port: u16,
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self {
            scheme: AppConfig::API_SCHEME.to_string(),
            port: AppConfig::API_PORT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub endpoint: ApiEndpoint,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: ApiEndpoint::default(),
            timeout: Duration::from_secs(AppConfig::CONNECTION_TIMEOUT_SECS),
        }
    }

    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the hypervisor management API.
///
/// Certificate validation is disabled: hosts are expected to serve the
/// self-signed certificate generated at install time.
pub struct PveClient {
    client: reqwest::Client,
    credentials: Credentials,
    endpoint: ApiEndpoint,
}

impl PveClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .no_gzip()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            credentials: config.credentials,
            endpoint: config.endpoint,
        })
    }

    /// Host and port are set through `Url` so an address carrying a path or
    /// userinfo is rejected instead of displacing the port.
    fn base_url(&self, host: &HostEntry) -> Result<Url> {
        let mut url = Url::parse(&format!("{}://localhost/", self.endpoint.scheme))?;
        if host.ip.contains(':') {
            url.set_host(Some(&format!("[{}]", host.ip)))?;
        } else {
            url.set_host(Some(&host.ip))?;
        }
        url.set_port(Some(self.endpoint.port))
            .map_err(|_| Error::InvalidUrl(url::ParseError::InvalidPort))?;
        Ok(url)
    }

    /// `POST` target for obtaining a ticket.
    pub fn ticket_url(&self, host: &HostEntry) -> Result<Url> {
        Ok(self.base_url(host)?.join(AppConfig::TICKET_PATH)?)
    }

    /// `GET` target for the node's thin pools. The node name is percent-encoded.
    pub fn lvmthin_url(&self, host: &HostEntry) -> Result<Url> {
        let mut url = self.base_url(host)?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .clear()
            .extend(["api2", "json", "nodes", host.hostname.as_str(), "disks", "lvmthin"]);
        Ok(url)
    }

    async fn read_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.text().await?)
    }

    /// Exchange username/password for a session ticket and CSRF token.
    pub async fn authenticate(&self, host: &HostEntry) -> Result<SessionCredential> {
        let url = self.ticket_url(host)?;
        debug!(ip = %host.ip, user = %self.credentials.username, "requesting ticket");

        let response = self.client.post(url).form(&self.credentials).send().await?;
        let body = Self::read_body(response).await?;
        let parsed: ApiResponse<TicketData> = serde_json::from_str(&body)?;

        let data = parsed.data.ok_or_else(|| {
            Error::AuthenticationFailed(format!("{} returned no session data", host.ip))
        })?;
        match (data.ticket, data.csrf_prevention_token) {
            (Some(ticket), Some(csrf_token)) if !ticket.is_empty() => {
                debug!(
                    ip = %host.ip,
                    session_user = data.username.as_deref().unwrap_or("unknown"),
                    "ticket issued"
                );
                Ok(SessionCredential {
                    cookie_value: ticket,
                    csrf_token,
                })
            }
            _ => Err(Error::AuthenticationFailed(format!(
                "{} response is missing ticket or CSRF token",
                host.ip
            ))),
        }
    }

    /// Fetch every thin pool reported by the node. A null `data` field is
    /// treated as "no pools".
    pub async fn fetch_thin_pools(
        &self,
        host: &HostEntry,
        session: &SessionCredential,
    ) -> Result<Vec<ThinPoolStat>> {
        let url = self.lvmthin_url(host)?;
        debug!(ip = %host.ip, node = %host.hostname, "fetching thin pools");

        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::COOKIE,
                format!("{}={}", AppConfig::AUTH_COOKIE_NAME, session.cookie_value),
            )
            .header(AppConfig::CSRF_HEADER_NAME, session.csrf_token.as_str())
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        let parsed: ApiResponse<Vec<ThinPoolStat>> = serde_json::from_str(&body)?;

        Ok(parsed.data.unwrap_or_default())
    }
}

#[async_trait]
impl ThinPoolSource for PveClient {
    async fn query_thin_pools(&self, host: &HostEntry) -> Result<Vec<ThinPoolStat>> {
        let session = self.authenticate(host).await?;
        self.fetch_thin_pools(host, &session).await
    }

    fn source_name(&self) -> &str {
        "pve-api"
    }
}
