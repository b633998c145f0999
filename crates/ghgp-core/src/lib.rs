//! Core types and calculations for organizational GHG Protocol footprints
//!
//! This crate converts user-entered activity data (fuel use, electricity,
//! travel, commuting, waste, procurement spend) into tonnes of CO2
//! equivalent, classified into GHG Protocol Scopes 1, 2 and 3.
//!
//! # Module Organisation
//!
//! - [`factors`]: Emission factor tables with reference defaults and
//!   optional TOML overrides
//! - [`activity`]: The flat activity-input record and its categorical
//!   selectors
//! - [`protocol`]: The scope calculator - pure arithmetic over factors
//! - [`inventory`]: The derived emissions result with scope and category
//!   breakdowns
//!
//! # Example
//!
//! ```rust
//! use ghgp_core::activity::ActivityData;
//! use ghgp_core::protocol::FootprintCalculator;
//!
//! let mut activity = ActivityData::default();
//! activity.electricity.kwh = 50_000.0;
//!
//! let calculator = FootprintCalculator::new();
//! let result = calculator.calculate(&activity);
//! assert!(result.total_tonnes > 0.0);
//! ```

pub mod activity;
pub mod errors;
pub mod factors;
pub mod inventory;
pub mod protocol;

pub use errors::{FootprintError, FootprintResult};

/// Scalar type used for all quantities and emission factors.
pub type FloatValue = f64;
