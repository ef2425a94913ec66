//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived by the clock, in arrival order.
//! 2. If the ready queue is empty, idle until the next arrival and admit it.
//! 3. Run the head for `min(quantum, remaining)` units as one interval.
//! 4. Admit arrivals up to the new clock, then re-queue the head at the
//!    back unless it finished.
//!
//! Newly arrived processes therefore go ahead of the rotated one.

use std::collections::VecDeque;

use super::state::SimulationState;
use super::{TimelineBuilder, TimelineContext};
use crate::error::SchedulingError;
use crate::models::{ProcessSpec, Timeline};

/// Round Robin with a fixed time quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin builder. The quantum is checked at build time.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// The time slice granted per turn.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl TimelineBuilder for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn build(
        &self,
        processes: &[ProcessSpec],
        context: &TimelineContext,
    ) -> Result<Timeline, SchedulingError> {
        if self.quantum <= 0 {
            return Err(SchedulingError::InvalidParameters(format!(
                "quantum must be positive, got {}",
                self.quantum
            )));
        }

        // Stable: equal arrivals keep input order.
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        pending.sort_by_key(|&i| processes[i].arrival_time);
        let mut pending = pending.into_iter().peekable();

        let mut state = SimulationState::new(processes, context);
        let mut ready: VecDeque<usize> = VecDeque::new();

        let admit = |ready: &mut VecDeque<usize>,
                     pending: &mut std::iter::Peekable<std::vec::IntoIter<usize>>,
                     clock: i64| {
            while let Some(idx) = pending.next_if(|&i| processes[i].arrival_time <= clock) {
                ready.push_back(idx);
            }
        };

        admit(&mut ready, &mut pending, state.clock());
        while !state.is_done() {
            let Some(idx) = ready.pop_front() else {
                state.wait_for_arrival();
                admit(&mut ready, &mut pending, state.clock());
                if ready.is_empty() {
                    break;
                }
                continue;
            };

            let slice = self.quantum.min(state.remaining(idx));
            state.run(idx, slice);
            admit(&mut ready, &mut pending, state.clock());

            if !state.is_finished(idx) {
                ready.push_back(idx);
            }
        }

        Ok(state.into_timeline())
    }

    fn is_preemptive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeInterval;

    fn build(quantum: i64, processes: &[ProcessSpec]) -> Vec<TimeInterval> {
        RoundRobin::new(quantum)
            .build(processes, &TimelineContext::default())
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_rr_rotation() {
        let processes = vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 1, 3)];
        assert_eq!(
            build(2, &processes),
            vec![
                TimeInterval::process("P1", 0, 2),
                TimeInterval::process("P2", 2, 4),
                TimeInterval::process("P1", 4, 6),
                TimeInterval::process("P2", 6, 7),
                TimeInterval::process("P1", 7, 8),
            ]
        );
    }

    #[test]
    fn test_rr_arrival_at_slice_end_goes_before_rotated() {
        // P2 arrives exactly when P1's slice ends
        let processes = vec![
            ProcessSpec::new("P1", 0, 4),
            ProcessSpec::new("P2", 2, 2),
        ];
        let labels: Vec<_> = build(2, &processes).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, ["P1", "P2", "P1"]);
    }

    #[test]
    fn test_rr_short_final_slice() {
        let processes = vec![ProcessSpec::new("P1", 0, 3), ProcessSpec::new("P2", 0, 1)];
        assert_eq!(
            build(4, &processes),
            vec![
                TimeInterval::process("P1", 0, 3),
                TimeInterval::process("P2", 3, 4),
            ]
        );
    }

    #[test]
    fn test_rr_single_process_not_coalesced() {
        let processes = vec![ProcessSpec::new("P1", 0, 5)];
        assert_eq!(
            build(2, &processes),
            vec![
                TimeInterval::process("P1", 0, 2),
                TimeInterval::process("P1", 2, 4),
                TimeInterval::process("P1", 4, 5),
            ]
        );
    }

    #[test]
    fn test_rr_idle_when_queue_empty() {
        let processes = vec![ProcessSpec::new("P1", 0, 1), ProcessSpec::new("P2", 4, 2)];
        assert_eq!(
            build(3, &processes),
            vec![
                TimeInterval::process("P1", 0, 1),
                TimeInterval::idle("-", 1, 4),
                TimeInterval::process("P2", 4, 6),
            ]
        );
    }

    #[test]
    fn test_rr_leading_idle() {
        let processes = vec![ProcessSpec::new("P1", 3, 2)];
        assert_eq!(
            build(1, &processes),
            vec![
                TimeInterval::idle("-", 0, 3),
                TimeInterval::process("P1", 3, 4),
                TimeInterval::process("P1", 4, 5),
            ]
        );
    }

    #[test]
    fn test_rr_queue_order_by_arrival_not_input() {
        let processes = vec![
            ProcessSpec::new("late", 1, 1),
            ProcessSpec::new("early", 0, 2),
        ];
        let labels: Vec<_> = build(1, &processes).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, ["early", "late", "early"]);
    }

    #[test]
    fn test_rr_invalid_quantum() {
        let processes = vec![ProcessSpec::new("P1", 0, 1)];
        for q in [0, -2] {
            let err = RoundRobin::new(q)
                .build(&processes, &TimelineContext::default())
                .unwrap_err();
            assert!(matches!(err, SchedulingError::InvalidParameters(_)));
        }
    }
}
