//! Simulation entry point.
//!
//! Maps an algorithm choice and its parameters to a timeline builder,
//! runs it and derives the metrics. This is the only module presentation
//! code needs to call.
//!
//! # Example
//!
//! ```
//! use u_procsched::models::ProcessSpec;
//! use u_procsched::simulation::{simulate, Algorithm, SimulationParams};
//!
//! let processes = vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 1, 3)];
//! let params = SimulationParams::new().with_quantum(2);
//! let result = simulate(&processes, Algorithm::RoundRobin, &params).unwrap();
//!
//! assert_eq!(result.timeline.len(), 5);
//! assert_eq!(result.metrics[1].turnaround_time, 6);
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithms::{
    Fcfs, PriorityOrder, PriorityScheduling, RoundRobin, Sjf, Srtf, TimelineBuilder,
    TimelineContext,
};
use crate::error::SchedulingError;
use crate::metrics::calculate_metrics;
use crate::models::{MetricsSummary, ProcessSpec, SchedulingMetrics, Timeline, IDLE_LABEL};
use crate::validation::validate_processes;

/// Supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Shortest-Remaining-Time-First.
    Srtf,
    /// Priority scheduling, non-preemptive.
    PriorityNonPreemptive,
    /// Priority scheduling, preemptive.
    PriorityPreemptive,
    /// Round Robin.
    RoundRobin,
}

impl Algorithm {
    /// All disciplines, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::PriorityNonPreemptive,
        Algorithm::PriorityPreemptive,
        Algorithm::RoundRobin,
    ];

    /// Canonical identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::PriorityNonPreemptive => "PS",
            Self::PriorityPreemptive => "PSP",
            Self::RoundRobin => "RR",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let algorithm = match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Self::Fcfs,
            "SJF" => Self::Sjf,
            "SRTF" => Self::Srtf,
            "PS" | "PRIORITY" => Self::PriorityNonPreemptive,
            "PSP" | "PRIORITY-PREEMPTIVE" => Self::PriorityPreemptive,
            "RR" | "ROUND-ROBIN" => Self::RoundRobin,
            _ => return Err(SchedulingError::UnknownAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}

/// Algorithm parameters and timeline settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Round Robin time slice. Required for RR.
    pub quantum: Option<i64>,
    /// Priority direction. Required for priority scheduling.
    pub priority_order: Option<PriorityOrder>,
    /// Clock value the simulation starts at. Must not be negative.
    pub start_time: i64,
    /// Label for idle intervals.
    pub idle_label: String,
}

impl SimulationParams {
    /// Creates default parameters: no quantum, no priority order, start at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the priority direction.
    pub fn with_priority_order(mut self, order: PriorityOrder) -> Self {
        self.priority_order = Some(order);
        self
    }

    /// Sets the simulation start time.
    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the idle interval label.
    pub fn with_idle_label(mut self, label: impl Into<String>) -> Self {
        self.idle_label = label.into();
        self
    }

    fn timeline_context(&self) -> TimelineContext {
        TimelineContext::at_time(self.start_time).with_idle_label(self.idle_label.as_str())
    }

    fn priority_order_for(&self, algorithm: Algorithm) -> Result<PriorityOrder, SchedulingError> {
        self.priority_order.ok_or_else(|| {
            SchedulingError::InvalidParameters(format!("{algorithm} requires a priority order"))
        })
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            quantum: None,
            priority_order: None,
            start_time: 0,
            idle_label: IDLE_LABEL.to_string(),
        }
    }
}

/// A complete, serializable simulation input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<ProcessSpec>,
    /// Discipline to use.
    pub algorithm: Algorithm,
    /// Algorithm parameters.
    #[serde(default)]
    pub params: SimulationParams,
}

impl SimulationRequest {
    /// Creates a request with default parameters.
    pub fn new(processes: Vec<ProcessSpec>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            params: SimulationParams::default(),
        }
    }

    /// Sets the parameters.
    pub fn with_params(mut self, params: SimulationParams) -> Self {
        self.params = params;
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<SimulationResult, SchedulingError> {
        simulate(&self.processes, self.algorithm, &self.params)
    }
}

/// Timeline and per-process metrics of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Ordered, contiguous execution intervals.
    pub timeline: Timeline,
    /// One row per input process, in input order.
    pub metrics: Vec<SchedulingMetrics>,
}

impl SimulationResult {
    /// Averages and utilization for this run.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary::calculate(&self.timeline, &self.metrics)
    }
}

/// Returns the builder for `algorithm` configured from `params`.
///
/// # Errors
/// [`SchedulingError::InvalidParameters`] when a required parameter is absent.
pub fn builder_for(
    algorithm: Algorithm,
    params: &SimulationParams,
) -> Result<Box<dyn TimelineBuilder>, SchedulingError> {
    let builder: Box<dyn TimelineBuilder> = match algorithm {
        Algorithm::Fcfs => Box::new(Fcfs),
        Algorithm::Sjf => Box::new(Sjf),
        Algorithm::Srtf => Box::new(Srtf),
        Algorithm::PriorityNonPreemptive => {
            Box::new(PriorityScheduling::new(params.priority_order_for(algorithm)?))
        }
        Algorithm::PriorityPreemptive => Box::new(PriorityScheduling::preemptive(
            params.priority_order_for(algorithm)?,
        )),
        Algorithm::RoundRobin => {
            let quantum = params.quantum.ok_or_else(|| {
                SchedulingError::InvalidParameters(format!("{algorithm} requires a quantum"))
            })?;
            Box::new(RoundRobin::new(quantum))
        }
    };
    Ok(builder)
}

/// Runs one complete simulation.
///
/// Validates the processes, builds the timeline with the selected
/// discipline and derives per-process metrics. The caller's processes are
/// never modified, and identical inputs always give identical output.
///
/// # Errors
/// - [`SchedulingError::InvalidInput`] for an empty list, non-positive
///   bursts, negative arrivals, duplicate names or a workload that would
///   run past `i64::MAX`.
/// - [`SchedulingError::InvalidParameters`] for a negative start time or a
///   missing quantum or priority.
pub fn simulate(
    processes: &[ProcessSpec],
    algorithm: Algorithm,
    params: &SimulationParams,
) -> Result<SimulationResult, SchedulingError> {
    debug!(
        "simulating {} processes with {algorithm}",
        processes.len()
    );
    validate_processes(processes, &params.idle_label, params.start_time)?;
    if params.start_time < 0 {
        return Err(SchedulingError::InvalidParameters(format!(
            "start time must not be negative, got {}",
            params.start_time
        )));
    }

    let builder = builder_for(algorithm, params)?;
    let timeline = builder.build(processes, &params.timeline_context())?;
    let metrics = calculate_metrics(&timeline, processes)?;

    debug!(
        "{algorithm}: {} intervals, makespan {}",
        timeline.len(),
        timeline.makespan()
    );
    Ok(SimulationResult { timeline, metrics })
}

/// Like [`simulate`], selecting the algorithm by identifier (e.g. `"RR"`).
///
/// # Errors
/// [`SchedulingError::UnknownAlgorithm`] for an unrecognized identifier,
/// plus everything [`simulate`] returns.
pub fn simulate_by_name(
    processes: &[ProcessSpec],
    algorithm_id: &str,
    params: &SimulationParams,
) -> Result<SimulationResult, SchedulingError> {
    let algorithm: Algorithm = algorithm_id.parse()?;
    simulate(processes, algorithm, params)
}
