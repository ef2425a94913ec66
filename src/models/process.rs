//! Process model.
//!
//! A process is the unit of work handed to the simulator: it becomes
//! eligible at its arrival time and needs a fixed amount of CPU time.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//! The consumer defines what one unit means (ms, ticks, seconds).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Read-only during a simulation run. Builders keep their own working copy
/// of the remaining burst time and never mutate the caller's records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique display label (e.g. "P1").
    pub name: String,
    /// Time the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required. Must be positive.
    pub burst_time: i64,
    /// Scheduling priority. Only priority-based algorithms read it; the
    /// direction is chosen by [`PriorityOrder`](crate::algorithms::PriorityOrder).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl ProcessSpec {
    /// Creates a process without a priority.
    pub fn new(name: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Default display name for the `index`-th process (0-based): `P1`, `P2`, ...
    pub fn default_name(index: usize) -> String {
        format!("P{}", index + 1)
    }
}
