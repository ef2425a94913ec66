//! Per-process scheduling metrics and their aggregate.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |

use serde::{Deserialize, Serialize};

/// Performance figures for one process, derived from a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingMetrics {
    /// Process name.
    pub name: String,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to first execution.
    pub response_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
}

impl SchedulingMetrics {
    /// Creates a metrics row.
    pub fn new(
        name: impl Into<String>,
        waiting_time: i64,
        response_time: i64,
        turnaround_time: i64,
    ) -> Self {
        Self {
            name: name.into(),
            waiting_time,
            response_time,
            turnaround_time,
        }
    }
}

/// Aggregate figures over a whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Number of processes summarized.
    pub process_count: usize,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Elapsed time from the first interval start to the last interval end.
    pub makespan: i64,
    /// Total idle time.
    pub idle_time: i64,
    /// Fraction of the makespan spent running processes (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}
