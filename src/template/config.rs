use std::sync::{Arc, Mutex};

use crate::logging::{Logger, RECONCILE_TARGET};
use crate::metrics::TemplateMetrics;

/// Observability knobs for a template container.
#[derive(Clone)]
pub struct TemplateConfig {
    /// Optional structured logger used by the container.
    pub logger: Option<Logger>,
    /// Metrics accumulator, shareable between containers.
    pub metrics: Option<Arc<Mutex<TemplateMetrics>>>,
    /// Target field used for reconcile events.
    pub log_target: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            log_target: RECONCILE_TARGET.to_string(),
        }
    }
}

impl TemplateConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(TemplateMetrics::new())));
        }
    }

    /// Disable metrics collection.
    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<TemplateMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}
