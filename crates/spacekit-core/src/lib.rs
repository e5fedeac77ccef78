//! # SpaceKit Core
//!
//! Core types, error taxonomy, and shared constants for SpaceKit.
//! Provides the primitives every other crate builds on: 2D plan points,
//! 3D vectors, and the error types surfaced to the user.

pub mod constants;
pub mod data;
pub mod error;

pub use data::{Point2D, Vector3};

pub use error::{excerpt, AiError, AssetError, Error, Result, ValidationError};
