//! A single named risk: a cost triple plus an occurrence probability.

use serde::{Deserialize, Serialize};

/// Best / most-likely / worst cost for one risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostTriple {
    pub minimum: f64,
    pub most_likely: f64,
    pub maximum: f64,
}

impl CostTriple {
    pub fn new(minimum: f64, most_likely: f64, maximum: f64) -> Self {
        Self {
            minimum,
            most_likely,
            maximum,
        }
    }
}

/// `(minimum, most_likely, maximum)`, the order risk registers list them in.
impl From<(f64, f64, f64)> for CostTriple {
    fn from((minimum, most_likely, maximum): (f64, f64, f64)) -> Self {
        Self::new(minimum, most_likely, maximum)
    }
}

/// A named cost risk. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub name: String,
    pub costs: CostTriple,
    /// Probability that the risk occurs at all, in [0, 1].
    pub probability: f64,
}

impl Risk {
    pub fn new(name: impl Into<String>, costs: impl Into<CostTriple>, probability: f64) -> Self {
        Self {
            name: name.into(),
            costs: costs.into(),
            probability,
        }
    }
}
