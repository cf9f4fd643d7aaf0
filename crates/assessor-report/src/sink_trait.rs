use assessor_core::{AssessmentResult, ReportError};
use async_trait::async_trait;

/// A report sink that receives finished assessments and renders them somewhere.
///
/// Implementations are registered via [`SinkRegistry`](crate::SinkRegistry)
/// and receive every result through [`write_result`](Self::write_result).
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Returns the sink's plugin name (e.g. `"file"`, `"log"`).
    fn name(&self) -> &str;
    /// One-time initialisation with sink-specific TOML configuration.
    async fn initialize(&mut self, config: toml::Value) -> Result<(), ReportError>;
    /// Render one assessment result.
    async fn write_result(&self, result: &AssessmentResult) -> Result<(), ReportError>;
    /// Returns `true` if the sink is currently able to accept results.
    fn is_healthy(&self) -> bool;
    /// Flush and release resources.
    async fn shutdown(&self) -> Result<(), ReportError>;
}
