//! HTTP front end: a pool of tiny_http worker threads sharing one router.
//!
//! Each worker blocks on `recv()` and drives the async router through a
//! tokio runtime handle, so report sampling never stalls the runtime.

pub mod routes;

use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Context};
use tiny_http::{Header, Request, Response, Server};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::actions::Launcher;
use crate::ai::ChatBackend;
use crate::config::ServerConfig;
use crate::constants::MAX_BODY_BYTES;
use crate::monitor::MetricsSource;

pub use routes::Router;

const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Running server. Dropping it leaves the workers running; call
/// [`ServerHandle::shutdown`] to stop them.
pub struct ServerHandle {
    server: Arc<Server>,
    workers: Vec<JoinHandle<()>>,
    local_addr: Option<SocketAddr>,
}

impl ServerHandle {
    /// Bound address; resolves port 0 to the real port.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Wake every worker out of `recv()` and wait for them to exit.
    pub fn shutdown(self) {
        for _ in &self.workers {
            self.server.unblock();
        }
        for worker in self.workers {
            if worker.join().is_err() {
                warn!("HTTP worker panicked");
            }
        }
        info!("HTTP server stopped");
    }
}

/// Bind `config.bind` and start `config.workers` request threads.
pub fn start<S, L, C>(
    config: &ServerConfig,
    router: Arc<Router<S, L, C>>,
    runtime: Handle,
) -> anyhow::Result<ServerHandle>
where
    S: MetricsSource + 'static,
    L: Launcher + 'static,
    C: ChatBackend + 'static,
{
    let server = Server::http(&config.bind)
        .map_err(|e| anyhow!("failed to bind HTTP server on {}: {}", config.bind, e))?;
    let server = Arc::new(server);
    let local_addr = server.server_addr().to_ip();

    let mut workers = Vec::with_capacity(config.workers);
    for id in 0..config.workers.max(1) {
        let server = Arc::clone(&server);
        let router = Arc::clone(&router);
        let runtime = runtime.clone();
        let worker = thread::Builder::new()
            .name(format!("vani-http-{}", id))
            .spawn(move || worker_loop(&server, &router, &runtime))
            .context("failed to spawn HTTP worker")?;
        workers.push(worker);
    }

    debug!(workers = workers.len(), "HTTP workers started");
    Ok(ServerHandle {
        server,
        workers,
        local_addr,
    })
}

fn worker_loop<S, L, C>(server: &Server, router: &Router<S, L, C>, runtime: &Handle)
where
    S: MetricsSource,
    L: Launcher,
    C: ChatBackend,
{
    loop {
        match server.recv() {
            Ok(request) => respond(request, router, runtime),
            Err(e) => {
                debug!(error = %e, "HTTP worker exiting");
                break;
            }
        }
    }
}

fn respond<S, L, C>(mut request: Request, router: &Router<S, L, C>, runtime: &Handle)
where
    S: MetricsSource,
    L: Launcher,
    C: ChatBackend,
{
    let method = request.method().clone();
    let url = request.url().to_string();

    let mut body = String::new();
    if let Err(e) = request
        .as_reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut body)
    {
        warn!(error = %e, "could not read request body");
        body.clear();
    }

    let reply = runtime.block_on(router.dispatch(&method, &url, &body));
    debug!(%method, %url, status = reply.status, "request handled");

    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    let content_type = ("Content-Type", reply.content_type);
    for (name, value) in std::iter::once(content_type).chain(CORS_HEADERS) {
        match Header::from_bytes(name, value) {
            Ok(header) => response.add_header(header),
            Err(()) => warn!(name, "invalid response header"),
        }
    }

    if let Err(e) = request.respond(response) {
        warn!(error = %e, "failed to send response");
    }
}
