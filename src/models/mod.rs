//! Simulation domain models.
//!
//! Provides the data types flowing through the engine: process
//! descriptions in, execution timelines and metrics out.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Caller-owned input row |
//! | `TimeInterval` | One execution (or idle) span |
//! | `Timeline` | Ordered, contiguous interval sequence |
//! | `SchedulingMetrics` | Per-process waiting/response/turnaround |
//! | `MetricsSummary` | Averages and CPU utilization for a run |

mod metrics;
mod process;
mod timeline;

pub use metrics::{MetricsSummary, SchedulingMetrics};
pub use process::ProcessSpec;
pub use timeline::{TimeInterval, Timeline, IDLE_LABEL};
