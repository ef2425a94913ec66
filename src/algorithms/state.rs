//! Working state shared by every timeline builder.
//!
//! Holds the owned remaining-burst copy, the simulation clock and the
//! interval recorder. Processes are addressed by their index in the
//! caller's slice, which is also the tie-break order.

use log::trace;

use super::TimelineContext;
use crate::models::{ProcessSpec, TimeInterval, Timeline};

pub(crate) struct SimulationState<'a> {
    processes: &'a [ProcessSpec],
    remaining: Vec<i64>,
    finished: Vec<bool>,
    unfinished: usize,
    clock: i64,
    idle_label: &'a str,
    timeline: Timeline,
}

impl<'a> SimulationState<'a> {
    pub(crate) fn new(processes: &'a [ProcessSpec], context: &'a TimelineContext) -> Self {
        Self {
            processes,
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            finished: vec![false; processes.len()],
            unfinished: processes.len(),
            clock: context.start_time,
            idle_label: &context.idle_label,
            timeline: Timeline::new(),
        }
    }

    #[inline]
    pub(crate) fn clock(&self) -> i64 {
        self.clock
    }

    #[inline]
    pub(crate) fn process(&self, idx: usize) -> &'a ProcessSpec {
        &self.processes[idx]
    }

    #[inline]
    pub(crate) fn remaining(&self, idx: usize) -> i64 {
        self.remaining[idx]
    }

    #[inline]
    pub(crate) fn is_finished(&self, idx: usize) -> bool {
        self.finished[idx]
    }

    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        self.unfinished == 0
    }

    /// Unfinished processes that have arrived by the current clock, in input order.
    pub(crate) fn available(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.processes.len())
            .filter(move |&i| !self.finished[i] && self.processes[i].arrival_time <= self.clock)
    }

    /// Earliest arrival strictly after the clock among unfinished processes.
    pub(crate) fn next_arrival_after_clock(&self) -> Option<i64> {
        (0..self.processes.len())
            .filter(|&i| !self.finished[i])
            .map(|i| self.processes[i].arrival_time)
            .filter(|&t| t > self.clock)
            .min()
    }

    /// Inserts an idle interval up to the next arrival if nothing is available.
    pub(crate) fn wait_for_arrival(&mut self) {
        if self.is_done() || self.available().next().is_some() {
            return;
        }
        if let Some(next) = self.next_arrival_after_clock() {
            trace!("idle [{}, {})", self.clock, next);
            self.timeline
                .push(TimeInterval::idle(self.idle_label, self.clock, next));
            self.clock = next;
        }
    }

    /// Picks the available process with the smallest key.
    ///
    /// Ties go to `current` when it is still among the minimum, otherwise to
    /// the earliest process in input order.
    pub(crate) fn select_by<K, F>(&self, current: Option<usize>, key: F) -> Option<usize>
    where
        K: Ord,
        F: Fn(&Self, usize) -> K,
    {
        let mut best: Option<(usize, K)> = None;
        for idx in self.available() {
            let k = key(self, idx);
            let better = match &best {
                Some((_, best_key)) => k < *best_key,
                None => true,
            };
            if better {
                best = Some((idx, k));
            }
        }
        let (best_idx, best_key) = best?;

        match current {
            Some(cur) if cur != best_idx && !self.finished[cur] => {
                if self.process(cur).arrival_time <= self.clock && key(self, cur) == best_key {
                    Some(cur)
                } else {
                    Some(best_idx)
                }
            }
            _ => Some(best_idx),
        }
    }

    /// Runs `idx` for `duration` as a new interval.
    pub(crate) fn run(&mut self, idx: usize, duration: i64) {
        let processes = self.processes;
        let name = processes[idx].name.as_str();
        self.timeline
            .push(TimeInterval::process(name, self.clock, self.clock + duration));
        self.advance(idx, duration);
    }

    /// Runs `idx` for `duration`, merging into the last interval when it
    /// already belongs to `idx`.
    pub(crate) fn extend_run(&mut self, idx: usize, duration: i64) {
        let processes = self.processes;
        let name = processes[idx].name.as_str();
        match self.timeline.last_mut() {
            Some(last) if last.is_for(name) && last.end == self.clock => {
                last.end += duration;
                self.advance(idx, duration);
            }
            _ => self.run(idx, duration),
        }
    }

    fn advance(&mut self, idx: usize, duration: i64) {
        self.clock += duration;
        self.remaining[idx] -= duration;
        if self.remaining[idx] == 0 {
            self.finished[idx] = true;
            self.unfinished -= 1;
        }
    }

    pub(crate) fn into_timeline(self) -> Timeline {
        self.timeline
    }
}

/// Runs each selected process to completion before choosing again.
pub(crate) fn run_to_completion<K, F>(mut state: SimulationState<'_>, key: F) -> Timeline
where
    K: Ord,
    F: Fn(&SimulationState<'_>, usize) -> K,
{
    while !state.is_done() {
        state.wait_for_arrival();
        let Some(next) = state.select_by(None, &key) else {
            break;
        };
        let burst = state.remaining(next);
        state.run(next, burst);
    }
    state.into_timeline()
}

/// Re-evaluates the selection whenever a process arrives or finishes.
///
/// Equivalent to re-selecting at every time unit: between events the
/// running process's key never gets worse and no other key changes, so
/// the selection can only change at an arrival or a completion.
pub(crate) fn run_preemptive<K, F>(mut state: SimulationState<'_>, key: F) -> Timeline
where
    K: Ord,
    F: Fn(&SimulationState<'_>, usize) -> K,
{
    let mut current: Option<usize> = None;
    while !state.is_done() {
        state.wait_for_arrival();
        let Some(next) = state.select_by(current, &key) else {
            break;
        };

        let slice = match state.next_arrival_after_clock() {
            Some(arrival) => state.remaining(next).min(arrival - state.clock()),
            None => state.remaining(next),
        };

        if current == Some(next) {
            state.extend_run(next, slice);
        } else {
            if let Some(prev) = current {
                trace!(
                    "t={}: {} preempts {}",
                    state.clock(),
                    state.process(next).name,
                    state.process(prev).name
                );
            }
            state.run(next, slice);
        }

        current = (!state.is_finished(next)).then_some(next);
    }
    state.into_timeline()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{PriorityOrder, PriorityScheduling, Srtf, TimelineBuilder};
    use crate::models::IDLE_LABEL;
    use crate::workload::WorkloadGenerator;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn ctx() -> TimelineContext {
        TimelineContext::default()
    }

    /// Re-selects at every time unit. `key` sees the process and its
    /// remaining burst.
    fn unit_step<F>(processes: &[ProcessSpec], key: F) -> Vec<TimeInterval>
    where
        F: Fn(&ProcessSpec, i64) -> i64,
    {
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut intervals: Vec<TimeInterval> = Vec::new();
        let mut current: Option<usize> = None;
        let mut clock = 0;

        while remaining.iter().any(|&r| r > 0) {
            let ready: Vec<usize> = (0..processes.len())
                .filter(|&i| remaining[i] > 0 && processes[i].arrival_time <= clock)
                .collect();
            if ready.is_empty() {
                let next = (0..processes.len())
                    .filter(|&i| remaining[i] > 0)
                    .map(|i| processes[i].arrival_time)
                    .min()
                    .unwrap();
                intervals.push(TimeInterval::idle(IDLE_LABEL, clock, next));
                clock = next;
                current = None;
                continue;
            }

            let rank = |i: usize| key(&processes[i], remaining[i]);
            let best = ready.iter().map(|&i| rank(i)).min().unwrap();
            let chosen = match current {
                Some(cur) if ready.contains(&cur) && rank(cur) == best => cur,
                _ => *ready.iter().find(|&&i| rank(i) == best).unwrap(),
            };

            match intervals.last_mut() {
                Some(last) if current == Some(chosen) && last.is_for(&processes[chosen].name) => {
                    last.end += 1
                }
                _ => intervals.push(TimeInterval::process(
                    processes[chosen].name.as_str(),
                    clock,
                    clock + 1,
                )),
            }
            remaining[chosen] -= 1;
            clock += 1;
            current = (remaining[chosen] > 0).then_some(chosen);
        }
        intervals
    }

    #[test]
    fn test_preemptive_matches_unit_step() {
        let mut rng = SmallRng::seed_from_u64(2024);
        let generator = WorkloadGenerator::new(7)
            .with_arrival_range(0, 12)
            .with_burst_range(1, 6)
            .with_priority_range(1, 3);
        let context = ctx();

        for _ in 0..3000 {
            let processes = generator.generate(&mut rng);

            let srtf = Srtf.build(&processes, &context).unwrap();
            let expected = unit_step(&processes, |_, remaining| remaining);
            assert_eq!(srtf.intervals(), expected.as_slice(), "SRTF on {processes:?}");

            for order in [PriorityOrder::LowerIsHigher, PriorityOrder::HigherIsHigher] {
                let timeline = PriorityScheduling::preemptive(order)
                    .build(&processes, &context)
                    .unwrap();
                let expected = unit_step(&processes, |p, _| order.rank(p.priority.unwrap()));
                assert_eq!(
                    timeline.intervals(),
                    expected.as_slice(),
                    "{order:?} on {processes:?}"
                );
            }
        }
    }

    #[test]
    fn test_wait_inserts_idle_gap() {
        let processes = vec![ProcessSpec::new("P1", 3, 2)];
        let context = ctx();
        let mut state = SimulationState::new(&processes, &context);
        state.wait_for_arrival();
        assert_eq!(state.clock(), 3);

        let timeline = state.into_timeline();
        assert_eq!(timeline.len(), 1);
        assert!(timeline.intervals()[0].is_idle());
        assert_eq!(timeline.intervals()[0].label, "-");
    }

    #[test]
    fn test_wait_is_noop_when_available() {
        let processes = vec![ProcessSpec::new("P1", 0, 2)];
        let context = ctx();
        let mut state = SimulationState::new(&processes, &context);
        state.wait_for_arrival();
        assert_eq!(state.clock(), 0);
        assert!(state.into_timeline().is_empty());
    }

    #[test]
    fn test_select_prefers_input_order_on_tie() {
        let processes = vec![
            ProcessSpec::new("P1", 0, 4),
            ProcessSpec::new("P2", 0, 2),
            ProcessSpec::new("P3", 0, 2),
        ];
        let context = ctx();
        let state = SimulationState::new(&processes, &context);
        assert_eq!(state.select_by(None, |s, i| s.remaining(i)), Some(1));
    }

    #[test]
    fn test_select_keeps_current_on_tie() {
        let processes = vec![ProcessSpec::new("P1", 0, 2), ProcessSpec::new("P2", 0, 2)];
        let context = ctx();
        let state = SimulationState::new(&processes, &context);
        assert_eq!(state.select_by(Some(1), |s, i| s.remaining(i)), Some(1));
    }

    #[test]
    fn test_extend_run_coalesces() {
        let processes = vec![ProcessSpec::new("P1", 0, 5)];
        let context = ctx();
        let mut state = SimulationState::new(&processes, &context);
        state.run(0, 2);
        state.extend_run(0, 3);
        assert!(state.is_done());

        let timeline = state.into_timeline();
        assert_eq!(timeline.intervals(), &[TimeInterval::process("P1", 0, 5)]);
    }

    #[test]
    fn test_start_time_offsets_clock() {
        let processes = vec![ProcessSpec::new("P1", 0, 1)];
        let context = TimelineContext::at_time(10);
        let state = SimulationState::new(&processes, &context);
        assert_eq!(state.clock(), 10);
        assert_eq!(state.available().count(), 1);
    }
}
