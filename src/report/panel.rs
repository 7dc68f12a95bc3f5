//! Bordered text panels.
//!
//! ```text
//! ╔════════════════════════════════════════════════╗
//! ║           ⚡ SYSTEM STATUS REPORT              ║
//! ╠════════════════════════════════════════════════╣
//! ║ 💻 CPU USAGE       :   42.0%                   ║
//! ╚════════════════════════════════════════════════╝
//! ```

use crate::constants::{PANEL_INNER_WIDTH, PANEL_LABEL_WIDTH};
use crate::utils::{center_display, pad_display};

/// A titled box of `label : value` rows.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    title: String,
    rows: Vec<(String, String)>,
}

impl Panel {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            rows: Vec::new(),
        }
    }

    /// Append a row. `value` is inserted verbatim, so callers own its width.
    pub fn row(mut self, icon: &str, label: &str, value: impl Into<String>) -> Self {
        self.rows.push((format!("{} {}", icon, label), value.into()));
        self
    }

    pub fn render(&self) -> String {
        let rule = "═".repeat(PANEL_INNER_WIDTH);
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(format!("╔{}╗", rule));
        lines.push(format!("║{}║", center_display(&self.title, PANEL_INNER_WIDTH)));
        lines.push(format!("╠{}╣", rule));
        for (label, value) in &self.rows {
            let body = format!(" {}: {}", pad_display(label, PANEL_LABEL_WIDTH), value);
            lines.push(format!("║{}║", pad_display(&body, PANEL_INNER_WIDTH)));
        }
        lines.push(format!("╚{}╝", rule));

        lines.join("\n")
    }
}
