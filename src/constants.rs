//! Application-wide constants.
//!
//! Centralizes intervals, timeouts, endpoints, and report layout values so
//! the handlers and their tests share one source of truth.

use std::path::PathBuf;

// ── Server ────────────────────────────────────────────────────────
/// Default listen address for the local web server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
/// Default directory holding the browser frontend.
pub const DEFAULT_STATIC_DIR: &str = "frontend";
/// Default number of request worker threads.
pub const DEFAULT_WORKERS: usize = 4;
/// Upper bound on request worker threads.
pub const MAX_WORKERS: usize = 64;
/// Largest request body accepted by `/command` (bytes).
pub const MAX_BODY_BYTES: u64 = 64 * 1024;
/// Body of the `/health` response.
pub const HEALTH_STATUS: &str = "✅ V.A.N.I-xAI is running";

// ── Metrics Sampling ──────────────────────────────────────────────
/// CPU sampling window for the system stats report (ms).
pub const DEFAULT_CPU_SAMPLE_MS: u64 = 1000;
/// CPU sampling window for the `/system-info` status widget (ms).
pub const DEFAULT_USAGE_SAMPLE_MS: u64 = 500;
/// Lower bound for any CPU sampling window (sysinfo needs ~200ms between reads).
pub const MIN_SAMPLE_MS: u64 = 200;
/// Address probed to decide internet reachability.
pub const DEFAULT_CONNECTIVITY_PROBE: &str = "8.8.8.8:53";
/// Connect timeout for the reachability probe (ms).
pub const DEFAULT_CONNECTIVITY_TIMEOUT_MS: u64 = 3000;
/// Lower bound for the reachability timeout (ms).
pub const MIN_CONNECTIVITY_TIMEOUT_MS: u64 = 100;
/// Linux sysfs file with the maximum CPU frequency (kHz).
pub const CPU_MAX_FREQ_PATH: &str = "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq";

// ── Units ─────────────────────────────────────────────────────────
/// 1 GiB in bytes.
pub const ONE_GIB: u64 = 1024 * 1024 * 1024;
/// Seconds per day / hour / minute, for uptime decomposition.
pub const SECS_PER_DAY: u64 = 86_400;
pub const SECS_PER_HOUR: u64 = 3_600;
pub const SECS_PER_MINUTE: u64 = 60;

// ── Report Layout ─────────────────────────────────────────────────
/// Display columns between the left and right panel borders.
pub const PANEL_INNER_WIDTH: usize = 48;
/// Display columns reserved for the "icon + label" part of a row.
pub const PANEL_LABEL_WIDTH: usize = 19;
/// Hostname characters shown in the network report.
pub const HOSTNAME_DISPLAY_LEN: usize = 25;

// ── Placeholder Fields ────────────────────────────────────────────
// Not measured. Rendered verbatim so existing frontends keep their layout.
pub const PLACEHOLDER_CPU_TEMP: &str = "CHECK FIRMWARE";
pub const PLACEHOLDER_DISK_IO: &str = "OPTIMAL";
pub const PLACEHOLDER_SIGNAL: &str = "STRONG";
pub const PLACEHOLDER_ENCRYPTION: &str = "ENABLED";

// ── Browser Targets ───────────────────────────────────────────────
/// Google search URL prefix; the encoded query is appended.
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search?q=";
/// YouTube results URL prefix; the encoded query is appended.
pub const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

// ── AI / Chat API ─────────────────────────────────────────────────
/// Chat-completions endpoint (OpenRouter compatible).
pub const DEFAULT_AI_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// Model identifier sent with each chat request.
pub const DEFAULT_AI_MODEL: &str = "google/gemini-2.0-flash-lite-001";
/// System prompt placed before the user's text.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are V.A.N.I-xAI, a smart desktop AI assistant.";
/// Request timeout for the chat API (seconds).
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;
/// Reply returned whenever the chat API call fails.
pub const AI_ERROR_REPLY: &str = "⚠️ Error connecting to AI.";
/// Reply returned when AI chat is switched off.
pub const AI_DISABLED_REPLY: &str = "AI chat is disabled.";

// ── Environment Variables ─────────────────────────────────────────
pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_MODEL: &str = "OPENROUTER_MODEL";
pub const ENV_API_URL: &str = "OPENROUTER_URL";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    PathBuf::from(std::env::var(var).unwrap_or_else(|_| std::env::temp_dir().display().to_string()))
}

/// Returns `~/.config/vani/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("vani")
}

/// Returns `~/.config/vani/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/vani/.env` (API key, never committed).
pub fn env_file_path() -> PathBuf {
    config_dir().join(".env")
}
