//! Moving-average engine.
//!
//! Computes simple moving averages over arbitrary numeric series for a set
//! of window lengths. Each window column is aligned with the input and
//! computed in O(n) with a running window sum.

pub mod moving_average;

pub use moving_average::{moving_averages, naive_moving_average, Sma};
