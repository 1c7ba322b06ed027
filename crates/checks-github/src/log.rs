//! Diagnostic trail written during context validation.

use tracing::{debug, warn};

/// Sink for human-readable diagnostic lines.
pub trait DiagnosticLog {
    fn log_info(&mut self, message: String);

    fn log_error(&mut self, message: String);
}

/// Collects diagnostic lines in order and mirrors them to `tracing`.
#[derive(Debug, Clone, Default)]
pub struct FilteredLog {
    title: String,
    info: Vec<String>,
    errors: Vec<String>,
}

impl FilteredLog {
    /// `title` prefixes the trail when it is rendered.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            info: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn info_messages(&self) -> &[String] {
        &self.info
    }

    pub fn error_messages(&self) -> &[String] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render the error trail as one block, title first.
    pub fn render_errors(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.errors {
            out.push_str("\n-> ");
            out.push_str(line);
        }
        out
    }
}

impl DiagnosticLog for FilteredLog {
    fn log_info(&mut self, message: String) {
        debug!(log = %self.title, "{message}");
        self.info.push(message);
    }

    fn log_error(&mut self, message: String) {
        warn!(log = %self.title, "{message}");
        self.errors.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_kept_in_order_per_level() {
        let mut log = FilteredLog::new("GitHub checks");
        log.log_info("first".to_string());
        log.log_error("bad".to_string());
        log.log_info("second".to_string());
        log.log_error("worse".to_string());

        assert_eq!(log.info_messages(), ["first", "second"]);
        assert_eq!(log.error_messages(), ["bad", "worse"]);
        assert!(log.has_errors());
    }

    #[test]
    fn test_render_errors() {
        let mut log = FilteredLog::new("Errors while resolving");
        assert_eq!(log.render_errors(), "Errors while resolving");

        log.log_error("Job does not use GitHub SCM".to_string());
        assert_eq!(
            log.render_errors(),
            "Errors while resolving\n-> Job does not use GitHub SCM"
        );
    }
}
