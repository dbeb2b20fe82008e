use crate::domain::ports::Logger;
use async_trait::async_trait;

/// Console sink: forwards each level to the corresponding `tracing` macro.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

#[async_trait]
impl Logger for TracingLogger {
    async fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    async fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    async fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }
}

/// Discards everything. Useful when a caller wants a silent core.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

#[async_trait]
impl Logger for NullLogger {
    async fn info(&self, _message: &str) {}

    async fn error(&self, _message: &str) {}

    async fn debug(&self, _message: &str) {}
}
