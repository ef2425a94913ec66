//! CPU process-scheduling simulator for the U-Engine ecosystem.
//!
//! Given a set of processes (arrival time, burst time, optional priority),
//! computes the execution timeline a scheduling discipline produces and
//! derives per-process waiting, response and turnaround time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `TimeInterval`, `Timeline`,
//!   `SchedulingMetrics`, `MetricsSummary`
//! - **`algorithms`**: Timeline builders: FCFS, SJF, SRTF, priority
//!   (non-preemptive and preemptive), Round Robin
//! - **`metrics`**: Metrics derived from a timeline
//! - **`simulation`**: Single entry point dispatching by algorithm
//! - **`validation`**: Input integrity checks (empty input, burst, names)
//! - **`workload`**: Seeded random process lists
//!
//! # Architecture
//!
//! The engine is synchronous and pure: one call in, one complete
//! `(timeline, metrics)` pair out. Rendering, input editing and result
//! propagation belong to the caller.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod algorithms;
pub mod error;
pub mod metrics;
pub mod models;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::SchedulingError;
pub use simulation::{simulate, simulate_by_name, Algorithm, SimulationParams, SimulationResult};
