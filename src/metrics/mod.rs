use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters describing how a template container has been driven.
#[derive(Debug, Default, Clone)]
pub struct TemplateMetrics {
    reconciles: u64,
    idle_reconciles: u64,
    notifications: u64,
    rejected: u64,
}

impl TemplateMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one full recompute that produced `changed` notifications.
    pub fn record_reconcile(&mut self, changed: usize) {
        self.reconciles = self.reconciles.saturating_add(1);
        if changed == 0 {
            self.idle_reconciles = self.idle_reconciles.saturating_add(1);
        } else {
            self.notifications = self.notifications.saturating_add(changed as u64);
        }
    }

    pub fn record_rejected(&mut self) {
        self.rejected = self.rejected.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            reconciles: self.reconciles,
            idle_reconciles: self.idle_reconciles,
            notifications: self.notifications,
            rejected: self.rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub reconciles: u64,
    pub idle_reconciles: u64,
    pub notifications: u64,
    pub rejected: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "template_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("reconciles".to_string(), json!(self.reconciles));
        map.insert("idle_reconciles".to_string(), json!(self.idle_reconciles));
        map.insert("notifications".to_string(), json!(self.notifications));
        map.insert("rejected".to_string(), json!(self.rejected));
        map
    }
}
