//! Service layer containing the computations behind each command.
//!
//! ## Service map
//! - `aggregation.rs` — contingency table over two dimensions + long-form reshape.
//! - `reactive.rs` — per-selection recomputation on top of the aggregation.
//! - `stats.rs` — means, quantiles, box statistics, least squares.
//! - `summary.rs` — per-sex metric means.
//! - `trend.rs` — prestige/income scatter with per-sex trend lines.
//! - `distribution.rs` — per-sex box statistics of one metric.
//! - `facets.rs` — prestige binning and per-bin income boxes.
//! - `profile.rs` — dataset description.
//! - `layout.rs` — catalog listing and the full dashboard.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Services only read the dataset; nothing here mutates it.
//! - Keep command handlers thin; delegate to services.

pub mod aggregation;
pub mod distribution;
pub mod facets;
pub mod layout;
pub mod output;
pub mod profile;
pub mod reactive;
pub mod stats;
pub mod summary;
pub mod trend;
