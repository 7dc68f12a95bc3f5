pub mod client;

pub use client::{ChatBackend, OpenRouterClient};
