//! Non-exceedance table: for each grid probability `p`, the cost that is
//! not exceeded with probability `p`.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use darpi_core::errors::SimulationError;

use crate::statistics::{empirical_ppf_simple, PpfData};

/// One `(cost, p)` row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonExceedanceRow {
    pub cost: f64,
    pub p: f64,
}

/// Two-column (cost, p) table built from the permissive PPF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonExceedanceTable {
    pub rows: Vec<NonExceedanceRow>,
}

impl NonExceedanceTable {
    /// Build the table from a sample or aggregate vector.
    pub fn from_samples(data: &[f64]) -> Result<Self, SimulationError> {
        Ok(Self::from(&empirical_ppf_simple(data)?))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as CSV with a `cost,p` header.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("cost,p\n");
        for row in &self.rows {
            let _ = writeln!(out, "{},{}", row.cost, row.p);
        }
        out
    }

    /// Render as a Markdown table, costs to two decimals.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("| cost | p |\n|---:|---:|\n");
        for row in &self.rows {
            let _ = writeln!(out, "| {:.2} | {:.2} |", row.cost, row.p);
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&PpfData> for NonExceedanceTable {
    fn from(ppf: &PpfData) -> Self {
        Self {
            rows: ppf
                .points()
                .map(|(cost, p)| NonExceedanceRow { cost, p })
                .collect(),
        }
    }
}
