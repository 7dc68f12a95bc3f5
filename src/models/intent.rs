use serde::Serialize;

/// What a command is asking for. Selects exactly one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Intent {
    #[serde(rename = "diagnostics")]
    Diagnostics,
    #[serde(rename = "network")]
    Network,
    #[serde(rename = "memory")]
    Memory,
    #[serde(rename = "system")]
    System,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "joke")]
    Joke,
    #[serde(rename = "app")]
    AppLaunch,
    #[serde(rename = "website")]
    Website,
    #[serde(rename = "search")]
    Search,
    #[serde(rename = "youtube")]
    Play,
    #[serde(rename = "ai")]
    Chat,
}

impl Intent {
    /// Tag sent to the frontend in the `type` field.
    pub fn tag(&self) -> &'static str {
        match self {
            Intent::Diagnostics => "diagnostics",
            Intent::Network => "network",
            Intent::Memory => "memory",
            Intent::System => "system",
            Intent::Time => "time",
            Intent::Joke => "joke",
            Intent::AppLaunch => "app",
            Intent::Website => "website",
            Intent::Search => "search",
            Intent::Play => "youtube",
            Intent::Chat => "ai",
        }
    }
}

/// Response to one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub reply: String,
    #[serde(rename = "type")]
    pub intent: Intent,
}

impl Reply {
    pub fn new(intent: Intent, reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            intent,
        }
    }
}
