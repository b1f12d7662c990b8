use crate::library::clock::Timezone;
use crate::library::logger::interface::{Level, LogResult, Logger};
use std::io::Write;
use std::sync::Arc;

/// Writes to stderr so stdout stays free for display output.
#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: Timezone,
}

impl LoggerConsole {
    pub fn new(timezone: Timezone) -> Self {
        Self {
            namespace: None,
            timezone,
        }
    }

    fn format_line(&self, level: Level, message: &str) -> String {
        let formatted = self.timezone.format_now("%Y-%m-%d %H:%M:%S%.3f");
        match &self.namespace {
            Some(namespace) => format!(
                "[{}] {:<5} {}: {}",
                formatted,
                level.as_str(),
                namespace,
                message
            ),
            None => format!("[{}] {:<5} {}", formatted, level.as_str(), message),
        }
    }
}

impl Logger for LoggerConsole {
    fn log(&self, level: Level, message: &str) -> LogResult {
        let line = self.format_line(level, message);
        writeln!(std::io::stderr().lock(), "{}", line)?;
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerConsole {
            namespace: Some(new_namespace),
            timezone: self.timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_without_namespace() {
        let logger = LoggerConsole::new(Timezone::utc());
        let line = logger.format_line(Level::Info, "hello");
        assert!(line.ends_with("] INFO  hello"), "{}", line);
    }

    #[test]
    fn test_namespaces_are_joined() {
        let logger = LoggerConsole {
            namespace: Some("monitor".to_string()),
            timezone: Timezone::utc(),
        };
        let line = logger.format_line(Level::Warn, "tick skipped");
        assert!(line.ends_with("] WARN  monitor: tick skipped"), "{}", line);
    }
}
