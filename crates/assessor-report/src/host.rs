use crate::registry::SinkRegistry;
use crate::sink_trait::ReportSink;
use assessor_core::{AssessmentResult, ReportError};
use tokio::sync::mpsc;

type Sinks = Vec<Box<dyn ReportSink>>;

/// Fans every assessment result out to all configured sinks.
pub struct ReportHost {
    registry: SinkRegistry,
    sinks: Sinks,
    result_rx: Option<mpsc::UnboundedReceiver<AssessmentResult>>,
    task_handle: Option<tokio::task::JoinHandle<(Sinks, usize)>>,
}

impl ReportHost {
    pub fn new(result_rx: mpsc::UnboundedReceiver<AssessmentResult>) -> Self {
        Self {
            registry: SinkRegistry::new(),
            sinks: Vec::new(),
            result_rx: Some(result_rx),
            task_handle: None,
        }
    }

    pub fn registry_mut(&mut self) -> &mut SinkRegistry {
        &mut self.registry
    }

    pub async fn add_sink(&mut self, plugin_name: &str, config: toml::Value) -> Result<(), ReportError> {
        let mut sink = self.registry.create(plugin_name)?;
        sink.initialize(config).await?;
        tracing::debug!(sink = %sink.name(), "report sink added");
        self.sinks.push(sink);
        Ok(())
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Spawn the fan-out task. Runs until every sender of the result
    /// channel is dropped.
    pub fn start(&mut self) {
        let Some(mut rx) = self.result_rx.take() else {
            tracing::warn!("report host already started");
            return;
        };
        let sinks = std::mem::take(&mut self.sinks);

        let handle = tokio::spawn(async move {
            let mut received = 0usize;
            while let Some(result) = rx.recv().await {
                received += 1;
                for sink in &sinks {
                    if !sink.is_healthy() {
                        tracing::warn!(
                            source_id = %result.source_id,
                            sink = %sink.name(),
                            "sink unhealthy, skipping"
                        );
                        continue;
                    }
                    if let Err(e) = sink.write_result(&result).await {
                        tracing::error!(
                            source_id = %result.source_id,
                            sink = %sink.name(),
                            "write_result failed: {e}"
                        );
                    }
                }
            }
            (sinks, received)
        });

        self.task_handle = Some(handle);
    }

    /// Wait for the fan-out task to drain, then shut every sink down.
    /// Returns the number of results received.
    pub async fn shutdown(&mut self) -> usize {
        let Some(handle) = self.task_handle.take() else {
            return 0;
        };
        let (sinks, received) = match handle.await {
            Ok(done) => done,
            Err(e) => {
                tracing::error!("report task panicked: {e}");
                return 0;
            }
        };
        for sink in &sinks {
            if let Err(e) = sink.shutdown().await {
                tracing::warn!(sink = %sink.name(), "sink shutdown failed: {e}");
            }
        }
        received
    }
}
