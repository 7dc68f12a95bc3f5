use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::constants::*;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/vani/config.toml, then by the
/// `OPENROUTER_*` environment variables, then by CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub metrics: MetricsConfig,
    pub ai: AiConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address, e.g. "127.0.0.1:5000".
    pub bind: String,
    /// Directory with the browser frontend (index.html, script.js, ...).
    pub static_dir: PathBuf,
    /// Request worker threads.
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Sampling windows and the reachability probe.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// CPU sampling window for the system stats report (ms).
    pub cpu_sample_ms: u64,
    /// CPU sampling window for `/system-info` (ms).
    pub usage_sample_ms: u64,
    /// host:port connected to when checking internet access.
    pub connectivity_probe: String,
    /// Connect timeout for the probe (ms).
    pub connectivity_timeout_ms: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            cpu_sample_ms: DEFAULT_CPU_SAMPLE_MS,
            usage_sample_ms: DEFAULT_USAGE_SAMPLE_MS,
            connectivity_probe: DEFAULT_CONNECTIVITY_PROBE.to_string(),
            connectivity_timeout_ms: DEFAULT_CONNECTIVITY_TIMEOUT_MS,
        }
    }
}

/// Chat fallback settings.
#[derive(Clone)]
pub struct AiConfig {
    /// Whether unmatched commands go to the chat API at all.
    pub enabled: bool,
    pub api_url: String,
    pub model: String,
    /// Bearer key. Only ever read from the environment.
    pub api_key: Option<String>,
    pub system_prompt: String,
    pub timeout_secs: u64,
}

// Hand-written so the key never lands in a log line.
impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("enabled", &self.enabled)
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("system_prompt", &self.system_prompt)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: DEFAULT_AI_URL.to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
            api_key: None,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            timeout_secs: DEFAULT_AI_TIMEOUT_SECS,
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional; missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    server: Option<FileServerConfig>,
    metrics: Option<FileMetricsConfig>,
    ai: Option<FileAiConfig>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileServerConfig {
    bind: Option<String>,
    static_dir: Option<PathBuf>,
    workers: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileMetricsConfig {
    cpu_sample_ms: Option<u64>,
    usage_sample_ms: Option<u64>,
    connectivity_probe: Option<String>,
    connectivity_timeout_ms: Option<u64>,
}

/// No `api_key` here: secrets stay in the environment / .env file.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileAiConfig {
    enabled: Option<bool>,
    api_url: Option<String>,
    model: Option<String>,
    system_prompt: Option<String>,
    timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from ~/.config/vani/config.toml and the process
    /// environment, falling back to defaults for anything missing.
    pub fn load() -> Self {
        let mut config = Self::load_from(&config_file_path());
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Defaults merged with the TOML file at `path`, if it exists and parses.
    pub fn load_from(path: &Path) -> Self {
        let config = Config::default();

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return config, // No config file, use defaults
        };

        match toml::from_str::<FileConfig>(&content) {
            Ok(file_config) => config.merged(file_config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                config
            }
        }
    }

    /// Apply `OPENROUTER_*` overrides. `lookup` abstracts `std::env::var`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(ENV_API_KEY) {
            self.ai.api_key = Some(v);
        }
        if let Some(v) = non_empty(ENV_MODEL) {
            self.ai.model = v;
        }
        if let Some(v) = non_empty(ENV_API_URL) {
            self.ai.api_url = v;
        }
    }

    fn merged(mut self, file: FileConfig) -> Self {
        if let Some(s) = file.server {
            if let Some(v) = s.bind {
                if !v.is_empty() {
                    self.server.bind = v;
                }
            }
            if let Some(v) = s.static_dir {
                self.server.static_dir = v;
            }
            if let Some(v) = s.workers {
                self.server.workers = v.clamp(1, MAX_WORKERS);
            }
        }

        if let Some(m) = file.metrics {
            if let Some(v) = m.cpu_sample_ms {
                self.metrics.cpu_sample_ms = v.max(MIN_SAMPLE_MS);
            }
            if let Some(v) = m.usage_sample_ms {
                self.metrics.usage_sample_ms = v.max(MIN_SAMPLE_MS);
            }
            if let Some(v) = m.connectivity_probe {
                if !v.is_empty() {
                    self.metrics.connectivity_probe = v;
                }
            }
            if let Some(v) = m.connectivity_timeout_ms {
                self.metrics.connectivity_timeout_ms = v.max(MIN_CONNECTIVITY_TIMEOUT_MS);
            }
        }

        if let Some(a) = file.ai {
            if let Some(v) = a.enabled {
                self.ai.enabled = v;
            }
            if let Some(v) = a.api_url {
                if !v.is_empty() {
                    self.ai.api_url = v;
                }
            }
            if let Some(v) = a.model {
                if !v.is_empty() {
                    self.ai.model = v;
                }
            }
            if let Some(v) = a.system_prompt {
                if !v.is_empty() {
                    self.ai.system_prompt = v;
                }
            }
            if let Some(v) = a.timeout_secs {
                self.ai.timeout_secs = v.max(1);
            }
        }

        self
    }
}

/// Load `.env` files into the process environment: the per-user one first,
/// then one in the working directory. Existing variables are never replaced.
pub fn load_env_files() {
    for path in [env_file_path(), PathBuf::from(".env")] {
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                warn!(path = %path.display(), error = %e, "could not load .env file");
            }
        }
    }
}
