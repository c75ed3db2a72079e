//! # berth-types
//!
//! Core type definitions for the berth connection layer.
//!
//! This crate is the foundation of the dependency graph -- all other
//! berth crates depend on it. It contains:
//!
//! - **[`error`]** -- the validation and capability error taxonomy
//! - **[`secret`]** -- [`SecretString`], the opaque wrapper for
//!   environment-sourced secret values
//! - **[`view`]** -- [`PublicView`], the only serializable form of
//!   connection state

pub mod error;
pub mod secret;
pub mod view;

pub use error::{ConfigValidationError, ConnectionError, FieldError, FieldReason, Result};
pub use secret::SecretString;
pub use view::PublicView;
