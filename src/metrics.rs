//! Metrics calculation.
//!
//! Reads a finished timeline back against the original process list.
//! Idle intervals never count toward any process.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::error::SchedulingError;
use crate::models::{MetricsSummary, ProcessSpec, SchedulingMetrics, Timeline};

/// Computes waiting, response and turnaround time for every process.
///
/// Rows are returned in input order. The burst time used for waiting time
/// is the caller's original value.
///
/// # Errors
/// [`SchedulingError::ProcessNotFound`] if a process has no interval in
/// the timeline.
pub fn calculate_metrics(
    timeline: &Timeline,
    processes: &[ProcessSpec],
) -> Result<Vec<SchedulingMetrics>, SchedulingError> {
    processes
        .iter()
        .map(|p| process_metrics(timeline, p))
        .collect()
}

fn process_metrics(
    timeline: &Timeline,
    process: &ProcessSpec,
) -> Result<SchedulingMetrics, SchedulingError> {
    let not_found = || SchedulingError::ProcessNotFound(process.name.clone());
    let first_start = timeline.first_start(&process.name).ok_or_else(not_found)?;
    let completion = timeline.completion_time(&process.name).ok_or_else(not_found)?;

    let response_time = first_start - process.arrival_time;
    let turnaround_time = completion - process.arrival_time;
    let waiting_time = turnaround_time - process.burst_time;

    Ok(SchedulingMetrics::new(
        process.name.as_str(),
        waiting_time,
        response_time,
        turnaround_time,
    ))
}

impl MetricsSummary {
    /// Aggregates per-process metrics and timeline figures.
    pub fn calculate(timeline: &Timeline, metrics: &[SchedulingMetrics]) -> Self {
        let count = metrics.len();
        let mean = |f: fn(&SchedulingMetrics) -> i64| {
            if count == 0 {
                0.0
            } else {
                metrics.iter().map(|m| f(m) as f64).sum::<f64>() / count as f64
            }
        };

        let makespan = timeline.makespan();
        let throughput = if makespan > 0 {
            count as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            process_count: count,
            avg_waiting_time: mean(|m| m.waiting_time),
            avg_response_time: mean(|m| m.response_time),
            avg_turnaround_time: mean(|m| m.turnaround_time),
            makespan,
            idle_time: timeline.idle_time(),
            cpu_utilization: timeline.utilization().unwrap_or(0.0),
            throughput,
        }
    }
}
