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

//! Host inventory: which management API addresses to poll and which
//! node name each of them answers for.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single hypervisor host to query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostEntry {
    /// Address of the management API (IP or DNS name, no scheme or port).
    pub ip: String,
    /// Node name as known to the cluster, used in the storage path.
    pub hostname: String,
}

impl HostEntry {
    pub fn new(ip: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            hostname: hostname.into(),
        }
    }
}

/// Strip an optional scheme prefix and port suffix from an address.
fn normalize_address(address: &str) -> &str {
    let address = address
        .strip_prefix("https://")
        .or_else(|| address.strip_prefix("http://"))
        .unwrap_or(address);
    let address = address.trim_end_matches('/');

    // Bracketed IPv6 keeps its colons
    if let Some(rest) = address.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(rest);
    }
    match address.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') && port.chars().all(|c| c.is_ascii_digit()) => {
            host
        }
        _ => address,
    }
}

impl FromStr for HostEntry {
    type Err = Error;

    /// Accepts `IP=NODE` or `IP NODE` (any whitespace).
    fn from_str(line: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidHostEntry {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = line.trim();
        let (address, node) = match trimmed.split_once('=') {
            Some((address, node)) => (address.trim(), node.trim()),
            None => {
                let mut parts = trimmed.split_whitespace();
                let address = parts.next().unwrap_or_default();
                let node = parts.next().unwrap_or_default();
                if parts.next().is_some() {
                    return Err(invalid("expected exactly two fields"));
                }
                (address, node)
            }
        };

        let ip = normalize_address(address);
        if ip.is_empty() {
            return Err(invalid("missing host address"));
        }
        if ip
            .chars()
            .any(|c| matches!(c, '/' | '@' | '?' | '#' | '[' | ']') || c.is_whitespace())
        {
            return Err(invalid("host address must be a bare IP or hostname"));
        }
        if node.is_empty() {
            return Err(invalid("missing node name"));
        }
        if node.contains('/') {
            return Err(invalid("node name must not contain '/'"));
        }

        Ok(Self::new(ip, node))
    }
}

/// Parse hostfile content, skipping blank lines and `#` comments.
pub fn parse_host_list(content: &str) -> Result<Vec<HostEntry>> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('#'))
        .map(str::parse)
        .collect()
}

/// Read and parse a hostfile from disk.
pub fn load_hostfile(path: impl AsRef<Path>) -> Result<Vec<HostEntry>> {
    let content = fs::read_to_string(path)?;
    parse_host_list(&content)
}

/// Drop repeated addresses, keeping the first entry for each.
pub fn dedup_hosts(hosts: Vec<HostEntry>) -> Vec<HostEntry> {
    let mut seen = HashSet::new();
    hosts
        .into_iter()
        .filter(|host| {
            let first = seen.insert(host.ip.clone());
            if !first {
                tracing::warn!(ip = %host.ip, node = %host.hostname, "duplicate host entry ignored");
            }
            first
        })
        .collect()
}
