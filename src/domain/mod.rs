//! Shared data model layer (types only).
//!
//! ## Files
//! - `catalog.rs` — the two selectable dimension catalogs and `InvalidDimension`.
//! - `records.rs` — the cleaned `Record` and the immutable `Dataset`.
//! - `models.rs` — report/output structs, including the long-form `RenderTable`.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and integration contracts.
//! Keep schema-impacting changes explicit and synchronized with `docs/contracts/*`.

pub mod catalog;
pub mod models;
pub mod records;
