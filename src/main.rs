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

use std::io::{self, Write};
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use thinpool_report::cli::{Cli, OutputFormat};
use thinpool_report::common::config::EnvConfig;
use thinpool_report::inventory::{dedup_hosts, load_hostfile, HostEntry};
use thinpool_report::metrics::collect_usage;
use thinpool_report::network::{ClientConfig, Credentials, PveClient};
use thinpool_report::report::{render_failures, render_json, render_table};

fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvConfig::default_log_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Command line hosts first, then hostfile entries.
fn resolve_hosts(cli: &Cli) -> thinpool_report::Result<Vec<HostEntry>> {
    let mut hosts = cli.hosts.clone().unwrap_or_default();
    if let Some(path) = &cli.hostfile {
        hosts.extend(load_hostfile(path)?);
    }
    Ok(dedup_hosts(hosts))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let hosts = match resolve_hosts(&cli) {
        Ok(hosts) => hosts,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    if hosts.is_empty() {
        eprintln!("Error: no hosts configured");
        eprintln!("Usage: thinpool-report --hosts <IP=NODE>... or thinpool-report --hostfile <FILE>");
        std::process::exit(2);
    }

    let config = ClientConfig::new(Credentials {
        username: cli.username.clone(),
        password: cli.password.clone(),
        realm: cli.realm.clone(),
    })
    .timeout(Duration::from_secs(cli.timeout));
    let client = match PveClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to initialize HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let concurrency = cli
        .concurrency
        .unwrap_or_else(|| EnvConfig::max_concurrent_connections(hosts.len()));
    let report = collect_usage(&client, &hosts, concurrency).await;

    let now = Local::now();
    let mut stdout = io::stdout().lock();
    let rendered = match cli.output {
        OutputFormat::Table => render_table(&mut stdout, &now, &report.records),
        OutputFormat::Json => render_json(&mut stdout, &now, &report),
    };
    if let Err(e) = rendered.and_then(|_| stdout.flush()) {
        eprintln!("Failed to write report: {e}");
        std::process::exit(1);
    }

    if report.has_failures() {
        if cli.output == OutputFormat::Table {
            if let Err(e) = render_failures(&mut io::stderr(), &report.failures) {
                tracing::error!("Failed to write failure summary: {e}");
            }
        }
        std::process::exit(1);
    }
}
