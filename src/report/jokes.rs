use rand::seq::SliceRandom;
use rand::Rng;

pub const JOKES: [&str; 10] = [
    "🤖 I am never angry, Mr. Stark. I have a full emotional range from A to B.",
    "💻 There are only 10 types of people in the world: those who understand binary and those who don't.",
    "🧠 Why do programmers prefer dark mode? Because light attracts bugs!",
    "⚡ How many programmers does it take to change a light bulb? None, that's a hardware problem!",
    "🔧 Why did the developer go broke? Because he used up all his cache!",
    "💾 A SQL query walks into a bar, walks up to two tables and asks... can I join you?",
    "🎯 Why do Java developers wear glasses? Because they can't C#!",
    "🚀 How many database administrators does it take to change a light bulb? One, but they'll always say it's not a hardware problem.",
    "🤝 AI is like a chess grandmaster. I see every possibility.",
    "⚙️ I am equipped with millions of combat scenarios, combat techniques.",
];

/// Uniform pick from [`JOKES`].
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    JOKES[..].choose(rng).copied().unwrap_or(JOKES[0])
}
