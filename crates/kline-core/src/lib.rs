//! Core types and traits for K-line analysis.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, Period, MovingAverageTable, View)
//! - Decode, store and load error types
//! - Core traits for indicators and bar storage

pub mod types;
pub mod traits;
pub mod error;

pub use error::{DecodeError, LoadError, StoreError};
pub use types::*;
pub use traits::*;
