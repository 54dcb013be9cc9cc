//! Report shaping for the tabular-export collaborator.

pub mod non_exceedance;

pub use non_exceedance::{NonExceedanceRow, NonExceedanceTable};
