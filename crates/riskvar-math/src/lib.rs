//! # riskvar Math
//!
//! Numerical building blocks for the riskvar Value-at-Risk engine.
//!
//! This crate provides:
//!
//! - **Statistics**: Sample mean, Bessel-corrected variance and standard
//!   deviation, and linear-interpolation percentiles
//! - **Distributions**: The standard Normal quantile function
//!
//! ## Design Philosophy
//!
//! - **Canonical input**: Every function takes a plain `&[f64]`
//! - **No silent NaN**: Empty or undersized samples are errors, not `NaN`
//! - **Reproducible**: Percentiles follow the conventional linear rule so
//!   results match other statistical packages

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unreadable_literal)]

pub mod distributions;
pub mod error;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distributions::standard_normal_inv_cdf;
    pub use crate::error::{MathError, MathResult};
    pub use crate::statistics::{
        mean, percentile, percentile_sorted, sample_std_dev, sample_variance, SampleStats,
    };
}

pub use error::{MathError, MathResult};
