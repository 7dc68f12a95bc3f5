//! OS-level side effects: application launches and browser opens.
//!
//! Every operation consults the [`Environment`] verdict first and returns a
//! reply string under all conditions. In a headless context nothing is
//! spawned; browser targets are echoed back so the user still gets the URL.

pub mod apps;
pub mod launcher;

use tracing::{info, warn};

pub use apps::{find_app, AppEntry};
pub use launcher::{Launcher, SystemLauncher};

use crate::constants::{GOOGLE_SEARCH_URL, YOUTUBE_SEARCH_URL};
use crate::environment::Environment;
use crate::error::{AssistantError, Result};

/// `https://{label}.com`
pub fn website_url(label: &str) -> String {
    format!("https://{}.com", label)
}

/// Google search URL for `query`, percent-encoded.
pub fn search_url(query: &str) -> String {
    format!("{}{}", GOOGLE_SEARCH_URL, urlencoding::encode(query))
}

/// YouTube results URL for `query`, percent-encoded.
pub fn youtube_url(query: &str) -> String {
    format!("{}{}", YOUTUBE_SEARCH_URL, urlencoding::encode(query))
}

/// Performs launches and browser opens, guarded by the environment verdict.
pub struct ActionExecutor<L> {
    environment: Environment,
    launcher: L,
}

impl<L: Launcher> ActionExecutor<L> {
    pub fn new(environment: Environment, launcher: L) -> Self {
        Self {
            environment,
            launcher,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    #[cfg(test)]
    pub(crate) fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Launch the first known application named in `text`.
    ///
    /// `None` means no application label matched; the caller should try the
    /// next handler. A match always yields a reply, even when launching fails.
    pub fn launch_application(&self, text: &str) -> Option<String> {
        let entry = find_app(&text.to_lowercase())?;

        let reply = match self.start_app(entry) {
            Ok(()) => {
                info!(app = entry.label, program = entry.program, "launched application");
                format!("🚀 LAUNCHING {}", entry.label.to_uppercase())
            }
            Err(e @ AssistantError::Unavailable(_)) => format!("⚠️ {}", e),
            Err(e) => {
                warn!(app = entry.label, error = %e, "application launch failed");
                format!("⚠️ Could not launch {}: {}", entry.label, e)
            }
        };
        Some(reply)
    }

    /// Open `https://{label}.com`.
    pub fn open_website(&self, label: &str) -> String {
        let url = website_url(label);
        self.browse(&url, &format!("Opening {}", label), "Visit", "open browser")
    }

    /// Open a Google search for `query`.
    pub fn search_web(&self, query: &str) -> String {
        let url = search_url(query);
        self.browse(&url, "Searching on Google", "Search URL", "search")
    }

    /// Open YouTube search results for `query`.
    pub fn play_media(&self, query: &str) -> String {
        let url = youtube_url(query);
        self.browse(&url, "Playing on YouTube", "YouTube URL", "play")
    }

    /// Open the assistant's own web UI (used right after startup).
    pub fn open_interface(&self, url: &str) -> String {
        self.browse(url, "Opening V.A.N.I-xAI", "Open", "open browser")
    }

    fn start_app(&self, entry: &AppEntry) -> Result<()> {
        self.ensure_desktop(format!("launch {}", entry.label))?;
        self.launcher.launch(entry.program)?;
        Ok(())
    }

    fn open_url(&self, url: &str) -> Result<()> {
        self.ensure_desktop("open browser".to_string())?;
        self.launcher.open_url(url)?;
        Ok(())
    }

    fn ensure_desktop(&self, action: String) -> Result<()> {
        if self.environment.is_headless() {
            return Err(AssistantError::Unavailable(action));
        }
        Ok(())
    }

    fn browse(&self, url: &str, success: &str, url_hint: &str, verb: &str) -> String {
        match self.open_url(url) {
            Ok(()) => {
                info!(url, "opened browser");
                success.to_string()
            }
            Err(e @ AssistantError::Unavailable(_)) => format!("⚠️ {}. {}: {}", e, url_hint, url),
            Err(e) => {
                warn!(url, error = %e, "browser open failed");
                format!("⚠️ Could not {}: {}", verb, e)
            }
        }
    }
}
