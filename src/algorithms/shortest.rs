//! Shortest-job disciplines: SJF (non-preemptive) and SRTF (preemptive).

use super::state::{run_preemptive, run_to_completion, SimulationState};
use super::{TimelineBuilder, TimelineContext};
use crate::error::SchedulingError;
use crate::models::{ProcessSpec, Timeline};

/// Shortest-Job-First, non-preemptive.
///
/// At each decision point runs the arrived process with the smallest burst
/// time to completion. Ties go to the earliest process in input order.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl TimelineBuilder for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn build(
        &self,
        processes: &[ProcessSpec],
        context: &TimelineContext,
    ) -> Result<Timeline, SchedulingError> {
        let state = SimulationState::new(processes, context);
        Ok(run_to_completion(state, |s, i| s.remaining(i)))
    }
}

/// Shortest-Remaining-Time-First, preemptive SJF.
///
/// The running process keeps the CPU while its remaining time is still a
/// minimum; a strictly shorter arrival preempts it. Consecutive time on the
/// same process is reported as one interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl TimelineBuilder for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn build(
        &self,
        processes: &[ProcessSpec],
        context: &TimelineContext,
    ) -> Result<Timeline, SchedulingError> {
        let state = SimulationState::new(processes, context);
        Ok(run_preemptive(state, |s, i| s.remaining(i)))
    }

    fn is_preemptive(&self) -> bool {
        true
    }
}
