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

//! In-process fake of the management API endpoints used by the client.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Form, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use thinpool_report::network::{ApiEndpoint, ClientConfig, Credentials, PveClient};

pub const TIB: u64 = 1 << 40;
pub const TICKET: &str = "PVE:root@pam:67A1B2C3::c2lnbmF0dXJlPT0=";
pub const CSRF: &str = "67A1B2C3:Y3NyZnRva2Vu";

/// How the ticket endpoint answers a valid login.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TicketReply {
    Session,
    /// 200 with `"data": null`.
    NullData,
    /// 200 with a ticket but no CSRF token.
    MissingCsrf,
}

#[derive(Clone)]
pub struct FakeNode {
    pub node: String,
    pub password: String,
    /// Raw `data` value returned by the lvmthin endpoint.
    pub pools: Value,
    /// Return a non-JSON body from the lvmthin endpoint.
    pub garbage: bool,
    pub ticket_reply: TicketReply,
    pub lvmthin_hits: Arc<AtomicUsize>,
}

impl FakeNode {
    pub fn new(node: &str, password: &str) -> Self {
        Self {
            node: node.to_string(),
            password: password.to_string(),
            pools: json!([]),
            garbage: false,
            ticket_reply: TicketReply::Session,
            lvmthin_hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_pool(mut self, size: u64, used: u64) -> Self {
        if let Value::Array(pools) = &mut self.pools {
            pools.push(json!({
                "lv": "data",
                "vg": "pve",
                "lv_type": "t",
                "lv_size": size,
                "used": used,
                "metadata_size": 1_073_741_824u64,
                "metadata_used": 10_485_760u64,
                "ctime": "1700000000",
            }));
        }
        self
    }

    pub fn with_garbage(mut self) -> Self {
        self.garbage = true;
        self
    }

    pub fn with_ticket_reply(mut self, reply: TicketReply) -> Self {
        self.ticket_reply = reply;
        self
    }

    /// Answer the lvmthin endpoint with `"data": null`.
    pub fn with_null_pools(mut self) -> Self {
        self.pools = Value::Null;
        self
    }

    pub fn hits(&self) -> usize {
        self.lvmthin_hits.load(Ordering::SeqCst)
    }
}

async fn ticket(State(node): State<FakeNode>, Form(form): Form<HashMap<String, String>>) -> Response {
    let valid = form.get("username").map(String::as_str) == Some("root")
        && form.get("password") == Some(&node.password)
        && form.get("realm").map(String::as_str) == Some("pam");
    if !valid {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "data": null }))).into_response();
    }

    let body = match node.ticket_reply {
        TicketReply::Session => json!({
            "data": {
                "username": "root@pam",
                "ticket": TICKET,
                "CSRFPreventionToken": CSRF,
                "cap": { "nodes": { "Sys.Audit": 1 } },
            }
        }),
        TicketReply::NullData => json!({ "data": null }),
        TicketReply::MissingCsrf => json!({
            "data": { "username": "root@pam", "ticket": TICKET }
        }),
    };
    Json(body).into_response()
}

async fn lvmthin(
    State(node): State<FakeNode>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    node.lvmthin_hits.fetch_add(1, Ordering::SeqCst);

    let cookie_ok = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        == Some(format!("PVEAuthCookie={TICKET}").as_str());
    let csrf_ok = headers
        .get("CSRFPreventionToken")
        .and_then(|v| v.to_str().ok())
        == Some(CSRF);
    if !cookie_ok || !csrf_ok {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "data": null }))).into_response();
    }
    if name != node.node {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "data": null }))).into_response();
    }
    if node.garbage {
        return (StatusCode::OK, "<html>proxy error</html>").into_response();
    }

    Json(json!({ "data": node.pools })).into_response()
}

/// Serve `node` on an ephemeral loopback port.
pub async fn spawn_fake_api(node: FakeNode) -> SocketAddr {
    let app = Router::new()
        .route("/api2/json/access/ticket", post(ticket))
        .route("/api2/json/nodes/{node}/disks/lvmthin", get(lvmthin))
        .with_state(node);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// A port nothing listens on.
pub async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

pub fn client_for_port(port: u16, password: &str) -> PveClient {
    let config = ClientConfig::new(Credentials {
        username: "root".to_string(),
        password: password.to_string(),
        realm: "pam".to_string(),
    })
    .endpoint(ApiEndpoint {
        scheme: "http".to_string(),
        port,
    })
    .timeout(Duration::from_secs(5));
    PveClient::new(config).unwrap()
}
