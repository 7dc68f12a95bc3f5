//! Keyword intent classifier.
//!
//! Commands are matched against [`RULES`] top to bottom and the first hit
//! wins. The order is load-bearing: specific reports sit above the generic
//! ones that would otherwise shadow them ("system diagnostics" must reach
//! Diagnostics, not System), and app labels are checked before the bare
//! "open" rule so "open notepad" launches rather than browses.
//!
//! Argument extraction removes the literal trigger word wherever it occurs,
//! not just as a whole word. "open the opener" therefore yields "the er".

use crate::actions::find_app;
use crate::models::Intent;

/// How a rule decides whether it applies.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Any of the substrings appears in the text.
    Keywords(&'static [&'static str]),
    /// A label from the application table appears in the text.
    KnownApp,
    /// The word appears; the argument is the text with every occurrence removed.
    Trigger(&'static str),
}

/// One (matcher, intent) entry of the priority list.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    pub matcher: Matcher,
}

const fn keywords(intent: Intent, words: &'static [&'static str]) -> Rule {
    Rule {
        intent,
        matcher: Matcher::Keywords(words),
    }
}

const fn trigger(intent: Intent, word: &'static str) -> Rule {
    Rule {
        intent,
        matcher: Matcher::Trigger(word),
    }
}

/// Priority order. Unmatched text falls through to [`Intent::Chat`].
pub const RULES: &[Rule] = &[
    keywords(Intent::Diagnostics, &["diagnostic", "diagnostics"]),
    keywords(Intent::Network, &["network"]),
    keywords(Intent::Memory, &["memory", "process"]),
    keywords(Intent::System, &["system", "stats", "status"]),
    keywords(Intent::Time, &["time", "date", "what is the"]),
    keywords(Intent::Joke, &["joke", "funny", "humor"]),
    Rule {
        intent: Intent::AppLaunch,
        matcher: Matcher::KnownApp,
    },
    trigger(Intent::Website, "open"),
    trigger(Intent::Search, "search"),
    trigger(Intent::Play, "play"),
];

/// Result of classifying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    /// Stripped remainder for Website/Search/Play, app label for AppLaunch.
    pub argument: Option<String>,
}

impl Classification {
    fn bare(intent: Intent) -> Self {
        Self {
            intent,
            argument: None,
        }
    }
}

impl Rule {
    /// Classification if this rule applies to `text` (already lowercased).
    fn apply(&self, text: &str) -> Option<Classification> {
        match self.matcher {
            Matcher::Keywords(words) => words
                .iter()
                .any(|w| text.contains(w))
                .then(|| Classification::bare(self.intent)),
            Matcher::KnownApp => find_app(text).map(|entry| Classification {
                intent: self.intent,
                argument: Some(entry.label.to_string()),
            }),
            Matcher::Trigger(word) => text.contains(word).then(|| Classification {
                intent: self.intent,
                argument: Some(text.replace(word, "").trim().to_string()),
            }),
        }
    }
}

/// Evaluates a rule list in order. Total: every input gets exactly one intent.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    rules: &'static [Rule],
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_rules(RULES)
    }
}

impl Classifier {
    pub fn with_rules(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    pub fn classify(&self, text: &str) -> Classification {
        let text = text.to_lowercase();
        self.rules
            .iter()
            .find_map(|rule| rule.apply(&text))
            .unwrap_or_else(|| Classification::bare(Intent::Chat))
    }
}
