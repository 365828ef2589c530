//! Resource Metric - An in-memory recorder of timestamped samples
//!
//! This crate provides a small container that accumulates numeric or boolean
//! samples, each with the time it was taken, and exposes both the full history
//! and the most recent value.
//!
//! # Features
//!
//! - **Recording**: Plain numbers and booleans, or structured objects that know
//!   how to reduce themselves to one
//! - **Snapshots**: Structured samples are frozen when recorded, so later edits
//!   by the caller never reach the stored history
//! - **Current value**: A `Metric` compares directly against scalars through its
//!   latest sample
//! - **Mix-ins**: Any type can carry recorder behaviour by holding a
//!   `MetricState`, without a common base type
//!
//! # Examples
//!
//! ```rust
//! use resource_metric::prelude::*;
//! use std::time::{Duration, SystemTime};
//!
//! fn main() -> Result<()> {
//!     let mut memory = Metric::new();
//!
//!     memory.record(61.2)?;
//!     memory.record_at(64.0, SystemTime::now() + Duration::from_secs(1))?;
//!
//!     for sample in memory.recorded()? {
//!         println!("{:?}: {}", sample.when, sample.value);
//!     }
//!     assert!(memory == 64.0);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Rejected samples surface as [`Error::Validation`] and leave the recorder
//! unchanged:
//!
//! ```rust
//! use resource_metric::{Error, Metric, Recorder, ValidationError};
//!
//! let mut metric = Metric::new();
//! match metric.record("high") {
//!     Err(Error::Validation(ValidationError::UnsupportedValueType(kind))) => assert_eq!(kind, "string"),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! assert!(metric.is_empty());
//! ```
//!
//! # Thread Safety
//!
//! Recording takes `&mut self`; share a recorder across threads behind your own
//! lock. The registries behind [`Metric::is_metric`] are process-wide and
//! internally synchronized.

#![doc(html_root_url = "https://docs.rs/resource-metric/0.1.0")]

mod error;
mod macros;

pub use error::{Error, Result, ValidationError};

// Public modules
pub mod core;
pub mod traits;

pub use crate::core::{
    metrics::{Metric, MetricState, StateMut},
    sample::{Input, Object, Raw, Sample, Snapshot},
    types::Value,
};
pub use traits::{Fields, Recorder, ValueOf};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::core::metrics::{Metric, MetricState, StateMut};
    pub use crate::core::sample::{Object, Raw, Sample};
    pub use crate::core::types::Value;
    pub use crate::mix;
    pub use crate::traits::{Fields, Recorder, ValueOf};
    pub use crate::Error;
    pub use crate::Result;
}
