//! Advisory collaborators for GHG footprints
//!
//! This crate consumes the [`EmissionsResult`](ghgp_core::inventory::EmissionsResult)
//! produced by `ghgp-core` and turns it into guidance:
//!
//! # Module Organisation
//!
//! - [`recommendations`]: Per-category reduction actions, with the largest
//!   emission categories flagged as priorities and industry-specific extras
//! - [`offsets`]: A verified carbon-offset project catalog and a scoring
//!   engine that assembles an offset portfolio matched to the emissions
//!   profile
//! - [`report`]: Plain-text/Markdown rendering of results and
//!   recommendations for export

pub mod offsets;
pub mod recommendations;
pub mod report;
