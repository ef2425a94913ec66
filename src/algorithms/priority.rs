//! Priority scheduling, non-preemptive and preemptive.

use serde::{Deserialize, Serialize};

use super::state::{run_preemptive, run_to_completion, SimulationState};
use super::{TimelineBuilder, TimelineContext};
use crate::error::SchedulingError;
use crate::models::{ProcessSpec, Timeline};

/// Which end of the priority scale runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityOrder {
    /// 1 is the highest priority, larger numbers are lower.
    LowerIsHigher,
    /// Larger numbers are higher priority.
    HigherIsHigher,
}

impl PriorityOrder {
    /// Maps a priority to a rank where smaller always runs first.
    #[inline]
    pub fn rank(self, priority: i32) -> i64 {
        match self {
            Self::LowerIsHigher => i64::from(priority),
            Self::HigherIsHigher => -i64::from(priority),
        }
    }
}

/// Priority scheduling.
///
/// Selects the arrived process with the most urgent priority. The
/// non-preemptive variant runs it to completion; the preemptive variant
/// re-evaluates on every arrival and keeps the running process while it is
/// still among the most urgent. Ties go to the earliest process in input
/// order.
///
/// Every process must carry a priority.
///
/// # Example
/// ```
/// use u_procsched::algorithms::{PriorityOrder, PriorityScheduling, TimelineBuilder, TimelineContext};
/// use u_procsched::models::ProcessSpec;
///
/// let processes = vec![
///     ProcessSpec::new("P1", 0, 4).with_priority(3),
///     ProcessSpec::new("P2", 1, 2).with_priority(1),
/// ];
/// let timeline = PriorityScheduling::preemptive(PriorityOrder::LowerIsHigher)
///     .build(&processes, &TimelineContext::default())
///     .unwrap();
/// let labels: Vec<_> = timeline.iter().map(|i| i.label.as_str()).collect();
/// assert_eq!(labels, ["P1", "P2", "P1"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityScheduling {
    order: PriorityOrder,
    preemptive: bool,
}

impl PriorityScheduling {
    /// Creates the non-preemptive variant.
    pub fn new(order: PriorityOrder) -> Self {
        Self {
            order,
            preemptive: false,
        }
    }

    /// Creates the preemptive variant.
    pub fn preemptive(order: PriorityOrder) -> Self {
        Self {
            order,
            preemptive: true,
        }
    }

    /// The priority direction in use.
    pub fn order(&self) -> PriorityOrder {
        self.order
    }

    fn ranks(&self, processes: &[ProcessSpec]) -> Result<Vec<i64>, SchedulingError> {
        processes
            .iter()
            .map(|p| {
                p.priority.map(|prio| self.order.rank(prio)).ok_or_else(|| {
                    SchedulingError::InvalidParameters(format!(
                        "process '{}' has no priority",
                        p.name
                    ))
                })
            })
            .collect()
    }
}

impl TimelineBuilder for PriorityScheduling {
    fn name(&self) -> &'static str {
        if self.preemptive {
            "PSP"
        } else {
            "PS"
        }
    }

    fn build(
        &self,
        processes: &[ProcessSpec],
        context: &TimelineContext,
    ) -> Result<Timeline, SchedulingError> {
        let ranks = self.ranks(processes)?;
        let state = SimulationState::new(processes, context);
        let timeline = if self.preemptive {
            run_preemptive(state, |_, i| ranks[i])
        } else {
            run_to_completion(state, |_, i| ranks[i])
        };
        Ok(timeline)
    }

    fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}
