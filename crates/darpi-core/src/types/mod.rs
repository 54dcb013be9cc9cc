//! Portfolio input types.

pub mod portfolio;
pub mod risk;

pub use portfolio::Portfolio;
pub use risk::{CostTriple, Risk};
