//! Timeline builders, one per scheduling discipline.
//!
//! Each builder turns a process list into an ordered, contiguous
//! [`Timeline`]. Idle intervals are inserted whenever no process has
//! arrived yet at a decision point.
//!
//! # Usage
//!
//! ```
//! use u_procsched::algorithms::{RoundRobin, TimelineBuilder, TimelineContext};
//! use u_procsched::models::ProcessSpec;
//!
//! let processes = vec![ProcessSpec::new("P1", 0, 3), ProcessSpec::new("P2", 0, 2)];
//! let timeline = RoundRobin::new(2)
//!     .build(&processes, &TimelineContext::default())
//!     .unwrap();
//! assert_eq!(timeline.len(), 3);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod shortest;
mod state;

pub use fcfs::Fcfs;
pub use priority::{PriorityOrder, PriorityScheduling};
pub use round_robin::RoundRobin;
pub use shortest::{Sjf, Srtf};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::SchedulingError;
use crate::models::{ProcessSpec, Timeline, IDLE_LABEL};

/// Settings every builder shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineContext {
    /// Clock value the simulation starts at.
    pub start_time: i64,
    /// Label given to idle intervals.
    pub idle_label: String,
}

impl TimelineContext {
    /// Creates a context starting at the given time.
    pub fn at_time(start_time: i64) -> Self {
        Self {
            start_time,
            ..Default::default()
        }
    }

    /// Sets the idle label.
    pub fn with_idle_label(mut self, label: impl Into<String>) -> Self {
        self.idle_label = label.into();
        self
    }
}

impl Default for TimelineContext {
    fn default() -> Self {
        Self {
            start_time: 0,
            idle_label: IDLE_LABEL.to_string(),
        }
    }
}

/// A scheduling discipline that produces an execution timeline.
///
/// Builders never mutate the caller's processes; each run keeps its own
/// remaining-burst copy. An empty process list yields an empty timeline.
pub trait TimelineBuilder: Send + Sync + Debug {
    /// Discipline name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Builds the timeline for `processes`.
    ///
    /// Fails with [`SchedulingError::InvalidParameters`] when the
    /// discipline needs data the processes or the builder lack.
    fn build(
        &self,
        processes: &[ProcessSpec],
        context: &TimelineContext,
    ) -> Result<Timeline, SchedulingError>;

    /// Whether a running process can be interrupted.
    fn is_preemptive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = TimelineContext::at_time(5).with_idle_label("idle");
        assert_eq!(ctx.start_time, 5);
        assert_eq!(ctx.idle_label, "idle");
        assert_eq!(TimelineContext::default().idle_label, IDLE_LABEL);
    }

    #[test]
    fn test_builder_names() {
        let builders: Vec<Box<dyn TimelineBuilder>> = vec![
            Box::new(Fcfs),
            Box::new(Sjf),
            Box::new(Srtf),
            Box::new(PriorityScheduling::new(PriorityOrder::LowerIsHigher)),
            Box::new(PriorityScheduling::preemptive(PriorityOrder::LowerIsHigher)),
            Box::new(RoundRobin::new(2)),
        ];
        let names: Vec<_> = builders.iter().map(|b| b.name()).collect();
        assert_eq!(names, ["FCFS", "SJF", "SRTF", "PS", "PSP", "RR"]);

        let preemptive: Vec<_> = builders.iter().map(|b| b.is_preemptive()).collect();
        assert_eq!(preemptive, [false, false, true, false, true, true]);
    }

    #[test]
    fn test_empty_input_yields_empty_timeline() {
        let ctx = TimelineContext::default();
        assert!(Fcfs.build(&[], &ctx).unwrap().is_empty());
        assert!(Srtf.build(&[], &ctx).unwrap().is_empty());
        assert!(RoundRobin::new(3).build(&[], &ctx).unwrap().is_empty());
    }
}
