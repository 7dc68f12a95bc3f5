//! Headless detection.
//!
//! The verdict is taken once in `main` and handed to the action executor as
//! a plain value; nothing re-reads the environment afterwards.

/// Operating-system family, as far as window availability is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    MacOs,
    Unix,
}

impl HostOs {
    /// The family this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else if cfg!(target_os = "macos") {
            HostOs::MacOs
        } else {
            HostOs::Unix
        }
    }
}

/// Immutable description of the process' runtime context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    headless: bool,
}

impl Environment {
    /// Inspect the process environment and decide once.
    pub fn detect() -> Self {
        let display = std::env::var("DISPLAY").ok();
        let wayland = std::env::var("WAYLAND_DISPLAY").ok();
        Self {
            headless: headless_verdict(HostOs::current(), display.as_deref(), wayland.as_deref()),
        }
    }

    /// A context where OS UI actions are never attempted.
    pub fn headless() -> Self {
        Self { headless: true }
    }

    /// A context with a usable desktop.
    pub fn desktop() -> Self {
        Self { headless: false }
    }

    pub fn is_headless(&self) -> bool {
        self.headless
    }
}

/// Headless means: not a Windows/macOS desktop and no X11 or Wayland display.
/// Empty variables count as unset.
pub fn headless_verdict(os: HostOs, display: Option<&str>, wayland: Option<&str>) -> bool {
    if matches!(os, HostOs::Windows | HostOs::MacOs) {
        return false;
    }
    let present = |v: Option<&str>| v.is_some_and(|s| !s.trim().is_empty());
    !present(display) && !present(wayland)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_without_display_is_headless() {
        assert!(headless_verdict(HostOs::Unix, None, None));
    }

    #[test]
    fn empty_display_counts_as_unset() {
        assert!(headless_verdict(HostOs::Unix, Some(""), Some("  ")));
    }

    #[test]
    fn x11_or_wayland_display_is_desktop() {
        assert!(!headless_verdict(HostOs::Unix, Some(":0"), None));
        assert!(!headless_verdict(HostOs::Unix, None, Some("wayland-0")));
    }

    #[test]
    fn windows_and_macos_are_never_headless() {
        assert!(!headless_verdict(HostOs::Windows, None, None));
        assert!(!headless_verdict(HostOs::MacOs, None, None));
    }

    #[test]
    fn forced_contexts() {
        assert!(Environment::headless().is_headless());
        assert!(!Environment::desktop().is_headless());
    }
}
