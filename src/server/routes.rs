//! Request routing, independent of the socket layer.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;
use tiny_http::Method;
use tracing::warn;

use crate::actions::Launcher;
use crate::ai::ChatBackend;
use crate::assistant::Assistant;
use crate::constants::HEALTH_STATUS;
use crate::monitor::MetricsSource;

/// Status, content type and body of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl HttpReply {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        Self {
            status,
            content_type: "application/json; charset=utf-8",
            body: serde_json::to_vec(value).unwrap_or_default(),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self::json(status, &json!({ "error": message }))
    }

    fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CommandRequest {
    #[serde(default)]
    text: String,
}

/// Maps (method, path, body) to a reply.
pub struct Router<S, L, C> {
    assistant: Assistant<S, L, C>,
    static_dir: PathBuf,
}

impl<S, L, C> Router<S, L, C>
where
    S: MetricsSource,
    L: Launcher,
    C: ChatBackend,
{
    pub fn new(assistant: Assistant<S, L, C>, static_dir: PathBuf) -> Self {
        Self {
            assistant,
            static_dir,
        }
    }

    pub fn assistant(&self) -> &Assistant<S, L, C> {
        &self.assistant
    }

    pub async fn dispatch(&self, method: &Method, url: &str, body: &str) -> HttpReply {
        let path = url.split('?').next().unwrap_or("/");

        match (method, path) {
            (Method::Options, _) => HttpReply::empty(204),
            (Method::Get, "/health") => HttpReply::json(200, &json!({ "status": HEALTH_STATUS })),
            (Method::Get, "/system-info") => self.system_info(),
            (Method::Post, "/command") => self.command(body).await,
            (Method::Get, _) => self.static_file(path),
            _ => HttpReply::error(404, "not found"),
        }
    }

    async fn command(&self, body: &str) -> HttpReply {
        let request: CommandRequest = match serde_json::from_str(body) {
            Ok(r) => r,
            Err(e) => return HttpReply::error(400, &format!("invalid request body: {}", e)),
        };
        let reply = self.assistant.handle(&request.text).await;
        HttpReply::json(200, &reply)
    }

    fn system_info(&self) -> HttpReply {
        match self.assistant.reporter().live_usage() {
            Ok(usage) => HttpReply::json(
                200,
                &json!({
                    "cpu": usage.cpu_percent as u32,
                    "ram": usage.ram_percent as u32,
                }),
            ),
            Err(e) => {
                warn!(error = %e, "system-info read failed");
                HttpReply::error(503, &e.to_string())
            }
        }
    }

    fn static_file(&self, path: &str) -> HttpReply {
        let relative = match path.trim_start_matches('/') {
            "" => "index.html",
            other => other,
        };

        // Only plain names below static_dir: no "..", no absolute paths.
        let safe = Path::new(relative)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return HttpReply::error(404, "not found");
        }

        match std::fs::read(self.static_dir.join(relative)) {
            Ok(body) => HttpReply {
                status: 200,
                content_type: content_type_for(relative),
                body,
            },
            Err(_) => HttpReply::error(404, "not found"),
        }
    }
}

fn content_type_for(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "ico" => "image/x-icon",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
