//! First-Come-First-Served.

use super::state::{run_to_completion, SimulationState};
use super::{TimelineBuilder, TimelineContext};
use crate::error::SchedulingError;
use crate::models::{ProcessSpec, Timeline};

/// First-Come-First-Served, non-preemptive.
///
/// Runs processes to completion in arrival order. Processes arriving at the
/// same time keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl TimelineBuilder for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn build(
        &self,
        processes: &[ProcessSpec],
        context: &TimelineContext,
    ) -> Result<Timeline, SchedulingError> {
        let state = SimulationState::new(processes, context);
        Ok(run_to_completion(state, |s, i| s.process(i).arrival_time))
    }
}
