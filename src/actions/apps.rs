//! Known desktop applications and their per-OS launch targets.

/// One launchable application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppEntry {
    /// Lowercase label matched as a substring of the command.
    pub label: &'static str,
    /// Program name (Windows/Linux) or application name (macOS, via `open -a`).
    pub program: &'static str,
}

const fn app(label: &'static str, program: &'static str) -> AppEntry {
    AppEntry { label, program }
}

// Order matters: the first label found in the command wins.

#[cfg(windows)]
const APPS: &[AppEntry] = &[
    app("chrome", "chrome"),
    app("notepad", "notepad"),
    app("calculator", "calc"),
    app("explorer", "explorer"),
    app("vs code", "code"),
    app("word", "winword"),
    app("excel", "excel"),
    app("powerpoint", "powerpnt"),
];

#[cfg(target_os = "macos")]
const APPS: &[AppEntry] = &[
    app("chrome", "Google Chrome"),
    app("notepad", "TextEdit"),
    app("calculator", "Calculator"),
    app("explorer", "Finder"),
    app("vs code", "Visual Studio Code"),
    app("word", "Microsoft Word"),
    app("excel", "Microsoft Excel"),
    app("powerpoint", "Microsoft PowerPoint"),
];

#[cfg(not(any(windows, target_os = "macos")))]
const APPS: &[AppEntry] = &[
    app("chrome", "google-chrome"),
    app("notepad", "gedit"),
    app("calculator", "gnome-calculator"),
    app("explorer", "nautilus"),
    app("vs code", "code"),
    app("word", "lowriter"),
    app("excel", "localc"),
    app("powerpoint", "loimpress"),
];

/// The application table for this platform.
pub fn app_table() -> &'static [AppEntry] {
    APPS
}

/// First entry whose label appears in `text` (already lowercased).
pub fn find_app(text: &str) -> Option<&'static AppEntry> {
    app_table().iter().find(|entry| text.contains(entry.label))
}
