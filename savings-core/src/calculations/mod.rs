//! Savings estimate calculations.
//!
//! The calculator turns one area's figures into a net-savings amount,
//! exposing each intermediate step through [`SavingsBreakdown`].

pub mod common;
pub mod savings;

pub use savings::{SavingsBreakdown, SavingsCalculator};
