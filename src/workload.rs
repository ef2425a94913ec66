//! Random workload generation.
//!
//! Produces valid process lists for demos, benchmarks and randomized
//! tests. Processes are named `P1..Pn` in generation order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ProcessSpec;

/// Generator for random process lists.
///
/// Ranges are inclusive. Degenerate ranges are clamped so every generated
/// process passes validation: arrivals >= 0, bursts >= 1.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_procsched::workload::WorkloadGenerator;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let processes = WorkloadGenerator::new(4)
///     .with_burst_range(1, 5)
///     .generate(&mut rng);
/// assert_eq!(processes.len(), 4);
/// assert_eq!(processes[3].name, "P4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes per workload.
    pub count: usize,
    /// Inclusive arrival time range.
    pub arrival_range: (i64, i64),
    /// Inclusive burst time range.
    pub burst_range: (i64, i64),
    /// Inclusive priority range. `None` leaves priorities unset.
    pub priority_range: Option<(i32, i32)>,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes arriving in 0..=10 with
    /// bursts in 1..=10 and no priorities.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival_range: (0, 10),
            burst_range: (1, 10),
            priority_range: None,
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival_range = (min, max);
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the priority range, enabling priorities.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = Some((min, max));
        self
    }

    /// Generates one workload.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let (arrival_lo, arrival_hi) = clamp_range(self.arrival_range, 0);
        let (burst_lo, burst_hi) = clamp_range(self.burst_range, 1);

        (0..self.count)
            .map(|i| {
                let process = ProcessSpec::new(
                    ProcessSpec::default_name(i),
                    rng.random_range(arrival_lo..=arrival_hi),
                    rng.random_range(burst_lo..=burst_hi),
                );
                match self.priority_range {
                    Some((lo, hi)) => {
                        process.with_priority(rng.random_range(lo.min(hi)..=hi.max(lo)))
                    }
                    None => process,
                }
            })
            .collect()
    }
}

fn clamp_range((min, max): (i64, i64), floor: i64) -> (i64, i64) {
    let lo = min.max(floor);
    (lo, max.max(lo))
}
