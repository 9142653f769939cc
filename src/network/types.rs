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

//! Wire types for the management API endpoints we consume.

use serde::{Deserialize, Serialize};

/// Login credentials sent to the ticket endpoint.
#[derive(Serialize, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub realm: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("realm", &self.realm)
            .finish()
    }
}

/// Session artifacts issued by `POST /api2/json/access/ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCredential {
    /// Value for the `PVEAuthCookie` cookie.
    pub cookie_value: String,
    /// Value for the `CSRFPreventionToken` header.
    pub csrf_token: String,
}

/// Envelope shared by every API response.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
}

#[derive(Deserialize, Debug)]
pub struct TicketData {
    #[serde(default)]
    pub username: Option<String>,
    pub ticket: Option<String>,
    #[serde(rename = "CSRFPreventionToken")]
    pub csrf_prevention_token: Option<String>,
}

/// One thin pool entry from `GET /api2/json/nodes/{node}/disks/lvmthin`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThinPoolStat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lv_type: Option<String>,
    /// Pool size in bytes.
    #[serde(rename = "lv_size")]
    pub size_bytes: u64,
    /// Allocated bytes in the pool.
    #[serde(rename = "used")]
    pub used_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_used: Option<u64>,
}

impl ThinPoolStat {
    pub fn new(size_bytes: u64, used_bytes: u64) -> Self {
        Self {
            lv: None,
            vg: None,
            lv_type: None,
            size_bytes,
            used_bytes,
            metadata_size: None,
            metadata_used: None,
        }
    }
}
