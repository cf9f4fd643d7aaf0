use crate::sink_trait::ReportSink;
use assessor_core::ReportError;
use std::collections::HashMap;

pub struct SinkRegistry {
    factories: HashMap<String, fn() -> Box<dyn ReportSink>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register("file", || Box::new(crate::file_sink::FileSink::new()));
        registry.register("log", || Box::new(crate::log_sink::LogSink::new()));
        registry
    }

    pub fn register(&mut self, name: &str, factory: fn() -> Box<dyn ReportSink>) {
        self.factories.insert(name.to_string(), factory);
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn ReportSink>, ReportError> {
        self.factories
            .get(name)
            .map(|f| f())
            .ok_or_else(|| ReportError::NotFound(name.to_string()))
    }

    pub fn list_sinks(&self) -> Vec<&str> {
        self.factories.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogSink;

    #[test]
    fn test_registry_has_builtin_sinks() {
        let registry = SinkRegistry::new();
        assert_eq!(registry.create("file").unwrap().name(), "file");
        assert_eq!(registry.create("log").unwrap().name(), "log");
        let mut names = registry.list_sinks();
        names.sort_unstable();
        assert_eq!(names, vec!["file", "log"]);
    }

    #[test]
    fn test_registry_unknown_sink_returns_not_found() {
        let registry = SinkRegistry::new();
        match registry.create("spreadsheet") {
            Err(ReportError::NotFound(name)) => assert_eq!(name, "spreadsheet"),
            _ => panic!("expected NotFound"),
        }
    }

    #[test]
    fn test_registry_register_custom_sink() {
        let mut registry = SinkRegistry::new();
        registry.register("stdout", || Box::new(LogSink::new()));
        assert!(registry.create("stdout").is_ok());
    }
}
