//! Posts service integration tests.
//!
//! Each test starts its own server on a random port with a freshly seeded
//! store, so post counts are deterministic.

#![cfg(feature = "http")]

mod support;

mod filter;
mod pipeline;
