//! Command dispatch: classify, run the one selected handler, wrap the reply.

use tracing::debug;

use crate::actions::{ActionExecutor, Launcher};
use crate::ai::ChatBackend;
use crate::classifier::{Classification, Classifier};
use crate::models::{Intent, Reply};
use crate::monitor::MetricsSource;
use crate::report::Reporter;

/// Everything needed to answer a command. Holds no mutable state, so one
/// instance serves all request threads.
pub struct Assistant<S, L, C> {
    classifier: Classifier,
    reporter: Reporter<S>,
    executor: ActionExecutor<L>,
    chat: C,
}

impl<S, L, C> Assistant<S, L, C>
where
    S: MetricsSource,
    L: Launcher,
    C: ChatBackend,
{
    pub fn new(
        classifier: Classifier,
        reporter: Reporter<S>,
        executor: ActionExecutor<L>,
        chat: C,
    ) -> Self {
        Self {
            classifier,
            reporter,
            executor,
            chat,
        }
    }

    pub fn reporter(&self) -> &Reporter<S> {
        &self.reporter
    }

    pub fn executor(&self) -> &ActionExecutor<L> {
        &self.executor
    }

    /// Answer one command.
    ///
    /// Report handlers block for their sampling window; drive this from a
    /// thread that may block, not from a shared async worker.
    pub async fn handle(&self, raw: &str) -> Reply {
        let text = raw.to_lowercase();
        let Classification { intent, argument } = self.classifier.classify(&text);
        debug!(intent = intent.tag(), argument = argument.as_deref(), "classified command");

        let arg = argument.unwrap_or_default();
        match intent {
            Intent::Diagnostics => Reply::new(intent, self.reporter.diagnostics()),
            Intent::Network => Reply::new(intent, self.reporter.network_status()),
            Intent::Memory => Reply::new(intent, self.reporter.memory_info()),
            Intent::System => Reply::new(intent, self.reporter.system_stats()),
            Intent::Time => Reply::new(intent, self.reporter.time_info()),
            Intent::Joke => Reply::new(intent, self.reporter.joke()),
            Intent::AppLaunch => match self.executor.launch_application(&text) {
                Some(reply) => Reply::new(intent, reply),
                None => self.chat(&text).await,
            },
            Intent::Website => Reply::new(intent, self.executor.open_website(&arg)),
            Intent::Search => Reply::new(intent, self.executor.search_web(&arg)),
            Intent::Play => Reply::new(intent, self.executor.play_media(&arg)),
            Intent::Chat => self.chat(&text).await,
        }
    }

    async fn chat(&self, text: &str) -> Reply {
        Reply::new(Intent::Chat, self.chat.ask(text).await)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::actions::launcher::test_support::CountingLauncher;
    use crate::environment::Environment;
    use crate::monitor::test_support::StaticSource;

    /// Echoes the prompt so tests can see what reached the fallback.
    pub(crate) struct EchoChat;

    impl ChatBackend for EchoChat {
        async fn ask(&self, text: &str) -> String {
            format!("echo: {}", text)
        }
    }

    pub(crate) type TestAssistant = Assistant<StaticSource, CountingLauncher, EchoChat>;

    pub(crate) fn assistant(environment: Environment) -> TestAssistant {
        Assistant::new(
            Classifier::default(),
            Reporter::new(StaticSource::healthy()),
            ActionExecutor::new(environment, CountingLauncher::default()),
            EchoChat,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::assistant;
    use super::*;
    use crate::environment::Environment;

    #[tokio::test]
    async fn reports_carry_their_intent() {
        let a = assistant(Environment::headless());

        let reply = a.handle("Run full system diagnostics").await;
        assert_eq!(reply.intent, Intent::Diagnostics);
        assert!(reply.reply.contains("FULL SYSTEM DIAGNOSTICS"));

        let reply = a.handle("system stats").await;
        assert_eq!(reply.intent, Intent::System);
        assert!(reply.reply.contains("42.0"));

        let reply = a.handle("network").await;
        assert_eq!(reply.intent, Intent::Network);

        let reply = a.handle("memory").await;
        assert_eq!(reply.intent, Intent::Memory);

        let reply = a.handle("what time is it").await;
        assert_eq!(reply.intent, Intent::Time);
        assert!(reply.reply.starts_with("⏰"));

        let reply = a.handle("tell me a joke").await;
        assert_eq!(reply.intent, Intent::Joke);
    }

    #[tokio::test]
    async fn headless_actions_do_not_spawn() {
        let a = assistant(Environment::headless());

        let reply = a.handle("open notepad").await;
        assert_eq!(reply.intent, Intent::AppLaunch);
        assert!(reply.reply.contains("headless"));

        let reply = a.handle("open github").await;
        assert_eq!(reply.intent, Intent::Website);
        assert!(reply.reply.contains("https://github.com"));

        assert_eq!(a.executor().launcher().calls(), 0);
    }

    #[tokio::test]
    async fn desktop_actions_use_the_stripped_argument() {
        let a = assistant(Environment::desktop());

        assert_eq!(a.handle("open github").await.reply, "Opening github");

        let reply = a.handle("search rust iterators").await;
        assert_eq!(reply.intent, Intent::Search);
        assert_eq!(
            a.executor().launcher().last_target().as_deref(),
            Some("https://www.google.com/search?q=rust%20iterators")
        );

        let reply = a.handle("play bohemian rhapsody").await;
        assert_eq!(reply.intent, Intent::Play);
        assert_eq!(reply.reply, "Playing on YouTube");
    }

    #[tokio::test]
    async fn unmatched_text_goes_to_chat() {
        let a = assistant(Environment::headless());
        let reply = a.handle("Who wrote Hamlet?").await;
        assert_eq!(reply.intent, Intent::Chat);
        assert_eq!(reply.reply, "echo: who wrote hamlet?");
    }
}
