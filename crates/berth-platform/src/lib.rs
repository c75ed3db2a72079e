//! # berth-platform
//!
//! Platform abstraction for the berth connection layer.
//!
//! The settings loader reads configuration exclusively through the
//! [`Environment`] trait, so tests can substitute an in-memory
//! implementation instead of mutating process-global state.

pub mod env;

pub use env::{Environment, MapEnvironment, NativeEnvironment};
