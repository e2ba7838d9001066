//! User-facing notification port.
//!
//! The host surface owns how messages reach the user; the executor only
//! knows this small capability interface. `ConsoleReporter` is the real
//! implementation, `MemoryReporter` the test fake.

use std::sync::Mutex;

/// Notification seam between the batch executor and the host surface.
pub trait Reporter: Send + Sync {
    /// Show an informational message.
    fn info(&self, message: &str);

    /// Show an error message.
    fn error(&self, message: &str);
}

/// Reporter writing to stdout/stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Info(String),
    Error(String),
}

/// In-memory reporter recording messages in arrival order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Mutex<Vec<Report>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded reports, in order.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    /// Only the error reports, in order.
    pub fn errors(&self) -> Vec<String> {
        self.reports()
            .into_iter()
            .filter_map(|r| match r {
                Report::Error(text) => Some(text),
                Report::Info(_) => None,
            })
            .collect()
    }

    /// Only the info reports, in order.
    pub fn infos(&self) -> Vec<String> {
        self.reports()
            .into_iter()
            .filter_map(|r| match r {
                Report::Info(text) => Some(text),
                Report::Error(_) => None,
            })
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, message: &str) {
        self.reports.lock().unwrap().push(Report::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.reports.lock().unwrap().push(Report::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_records_in_order() {
        let reporter = MemoryReporter::new();
        reporter.info("one");
        reporter.error("two");
        reporter.info("three");

        assert_eq!(
            reporter.reports(),
            vec![
                Report::Info("one".to_string()),
                Report::Error("two".to_string()),
                Report::Info("three".to_string()),
            ]
        );
        assert_eq!(reporter.errors(), vec!["two"]);
        assert_eq!(reporter.infos(), vec!["one", "three"]);
    }
}
