//! Timeline (simulation output) model.
//!
//! A timeline is the ordered, gap-free sequence of execution intervals a
//! scheduling discipline produces. Periods where no process is eligible
//! appear as explicit idle intervals.

use serde::{Deserialize, Serialize};

/// Default label for idle intervals.
pub const IDLE_LABEL: &str = "-";

/// One execution interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Process name, or the idle label.
    pub label: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
    /// Whether no process ran during this interval.
    #[serde(default)]
    pub idle: bool,
}

impl TimeInterval {
    /// Creates an interval during which process `name` runs.
    pub fn process(name: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            label: name.into(),
            start,
            end,
            idle: false,
        }
    }

    /// Creates an idle interval.
    pub fn idle(label: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            idle: true,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether no process ran during this interval.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.idle
    }

    /// Whether this interval belongs to process `name`.
    #[inline]
    pub fn is_for(&self, name: &str) -> bool {
        !self.idle && self.label == name
    }
}

/// An ordered, contiguous sequence of [`TimeInterval`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<TimeInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval. Callers keep the sequence ordered and contiguous.
    pub fn push(&mut self, interval: TimeInterval) {
        debug_assert!(interval.end > interval.start);
        if let Some(last) = self.intervals.last() {
            debug_assert_eq!(last.end, interval.start);
        }
        self.intervals.push(interval);
    }

    /// Mutable access to the last interval (used to coalesce runs).
    pub(crate) fn last_mut(&mut self) -> Option<&mut TimeInterval> {
        self.intervals.last_mut()
    }

    /// All intervals, ordered by start time.
    pub fn intervals(&self) -> &[TimeInterval] {
        &self.intervals
    }

    /// Iterates intervals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeInterval> {
        self.intervals.iter()
    }

    /// Number of intervals, idle ones included.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the timeline has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Whether `interval` is the first one in the timeline.
    pub fn is_first(&self, interval: &TimeInterval) -> bool {
        self.intervals.first() == Some(interval)
    }

    /// Start of the first interval.
    pub fn start_time(&self) -> Option<i64> {
        self.intervals.first().map(|i| i.start)
    }

    /// End of the last interval.
    pub fn end_time(&self) -> Option<i64> {
        self.intervals.last().map(|i| i.end)
    }

    /// Total elapsed time from the first start to the last end.
    pub fn makespan(&self) -> i64 {
        match (self.start_time(), self.end_time()) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        }
    }

    /// Time spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.intervals
            .iter()
            .filter(|i| !i.idle)
            .map(TimeInterval::duration)
            .sum()
    }

    /// Time spent idle.
    pub fn idle_time(&self) -> i64 {
        self.intervals
            .iter()
            .filter(|i| i.idle)
            .map(TimeInterval::duration)
            .sum()
    }

    /// busy_time / makespan. Returns `None` for an empty timeline.
    pub fn utilization(&self) -> Option<f64> {
        let span = self.makespan();
        if span <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / span as f64)
    }

    /// Returns all intervals of process `name`, in order.
    pub fn intervals_for(&self, name: &str) -> Vec<&TimeInterval> {
        self.intervals.iter().filter(|i| i.is_for(name)).collect()
    }

    /// Start of the first interval of process `name`.
    pub fn first_start(&self, name: &str) -> Option<i64> {
        self.intervals.iter().find(|i| i.is_for(name)).map(|i| i.start)
    }

    /// End of the last interval of process `name`.
    pub fn completion_time(&self, name: &str) -> Option<i64> {
        self.intervals
            .iter()
            .rev()
            .find(|i| i.is_for(name))
            .map(|i| i.end)
    }
}

impl From<Vec<TimeInterval>> for Timeline {
    fn from(intervals: Vec<TimeInterval>) -> Self {
        Self { intervals }
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimeInterval;
    type IntoIter = std::slice::Iter<'a, TimeInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl IntoIterator for Timeline {
    type Item = TimeInterval;
    type IntoIter = std::vec::IntoIter<TimeInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}
