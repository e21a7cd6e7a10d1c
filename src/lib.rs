//! Two ways to validate the same posts API.
//!
//! The filter group validates in an axum extractor in front of each route.
//! The pipeline group sends every request through a [`mediator::Mediator`]
//! whose validation stage runs before the handler. Both share one
//! [`validation::ValidatorRegistry`], and failures are rendered as
//! Problem Details by [`problem::ErrorMapper`].

mod error;

pub mod mediator;
pub mod posts;
pub mod problem;
pub mod validation;

#[cfg(feature = "http")]
pub mod config;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub mod telemetry;

pub use error::StoreError;
