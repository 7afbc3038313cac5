//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `setup.rs` — fetch/catalog, which run before the dataset is loaded.
//! - `views.rs` — describe/summary/scatter/boxplot/facets/dashboard.
//! - `explore.rs` — crosstab and the interactive explore session.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate computation to `services/*`.
//! - Keep behavior and output schema stable.

pub mod explore;
pub mod setup;
pub mod views;

pub use explore::handle_explore_commands;
pub use setup::handle_setup_commands;
pub use views::handle_view_commands;
