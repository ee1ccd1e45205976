use colored::Colorize;
use std::sync::Mutex;

/// Dependency injection interface for the failure sink.
///
/// Expected policy violations (no version bump, unsupported manifest,
/// stale auxiliary file) are reported here instead of being raised as
/// errors, so a single run can collect every violation before failing.
/// Commands accept `&dyn Reporter`; tests assert on the recorded messages.
pub trait Reporter: Send + Sync {
    /// Record a failure message and mark the run as failed.
    fn fail(&self, message: &str);

    /// All failure messages recorded during this run, in order.
    fn failures(&self) -> Vec<String>;

    /// Whether any failure has been recorded.
    fn is_failed(&self) -> bool {
        !self.failures().is_empty()
    }
}

/// Reporter printing each failure to stderr while recording it.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    messages: Mutex<Vec<String>>,
}

impl ConsoleReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for ConsoleReporter {
    fn fail(&self, message: &str) {
        eprintln!("{} {}", "✖".red().bold(), message.red());
        self.messages
            .lock()
            .expect("reporter mutex poisoned")
            .push(message.to_string());
    }

    fn failures(&self) -> Vec<String> {
        self.messages
            .lock()
            .expect("reporter mutex poisoned")
            .clone()
    }
}
