//! Insertion-ordered collection of uniquely named risks, plus document loading.
//!
//! Documents use one entry per risk:
//!
//! ```json
//! { "Risk 1": { "costs": [1000, 2000, 5000], "probability": 1 } }
//! ```
//!
//! and the equivalent TOML (`["Risk 1"]` tables with `costs` and `probability`).

use std::path::Path;

use rustc_hash::FxHashSet;
use serde_json::Value;

use super::risk::{CostTriple, Risk};
use crate::errors::{PortfolioError, SimulationError};

/// Named risks in insertion order. Names are unique.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    risks: Vec<Risk>,
    names: FxHashSet<String>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a portfolio from risks, rejecting duplicate names.
    pub fn from_risks(risks: impl IntoIterator<Item = Risk>) -> Result<Self, PortfolioError> {
        let mut portfolio = Self::new();
        for risk in risks {
            portfolio.insert(risk)?;
        }
        Ok(portfolio)
    }

    /// Append a risk. Fails if a risk with the same name is already present.
    pub fn insert(&mut self, risk: Risk) -> Result<(), PortfolioError> {
        if !self.names.insert(risk.name.clone()) {
            return Err(PortfolioError::DuplicateRisk { name: risk.name });
        }
        self.risks.push(risk);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Risk> {
        self.risks.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Risk> {
        self.risks.iter()
    }

    pub fn len(&self) -> usize {
        self.risks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.risks.is_empty()
    }

    /// Parse a JSON portfolio document.
    pub fn from_json_str(json: &str) -> Result<Self, PortfolioError> {
        let value: Value = serde_json::from_str(json).map_err(|e| PortfolioError::Parse {
            format: "json",
            message: e.to_string(),
        })?;
        Self::from_document(&value, "json")
    }

    /// Parse a TOML portfolio document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, PortfolioError> {
        let value: Value = toml::from_str(toml_str).map_err(|e| PortfolioError::Parse {
            format: "toml",
            message: e.to_string(),
        })?;
        Self::from_document(&value, "toml")
    }

    /// Load a portfolio file, choosing the format by extension (`.json` or `.toml`).
    pub fn load(path: &Path) -> Result<Self, PortfolioError> {
        let content = std::fs::read_to_string(path).map_err(|e| PortfolioError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(PortfolioError::Parse {
                format: "unknown",
                message: format!(
                    "unsupported portfolio extension {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                ),
            }),
        }
    }

    fn from_document(value: &Value, format: &'static str) -> Result<Self, PortfolioError> {
        let entries = value.as_object().ok_or_else(|| PortfolioError::Parse {
            format,
            message: "top level must be a table of risks".to_string(),
        })?;

        let mut portfolio = Self::new();
        for (name, entry) in entries {
            let risk = parse_risk(name, entry, format)?;
            portfolio.insert(risk)?;
        }
        Ok(portfolio)
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Risk;
    type IntoIter = std::slice::Iter<'a, Risk>;

    fn into_iter(self) -> Self::IntoIter {
        self.risks.iter()
    }
}

fn parse_risk(name: &str, entry: &Value, format: &'static str) -> Result<Risk, PortfolioError> {
    let parse_error = |message: String| PortfolioError::Parse {
        format,
        message: format!("risk `{name}`: {message}"),
    };

    let costs = entry
        .get("costs")
        .ok_or_else(|| parse_error("missing `costs`".to_string()))?
        .as_array()
        .ok_or_else(|| parse_error("`costs` must be an array".to_string()))?;
    if costs.len() != 3 {
        return Err(parse_error(format!(
            "`costs` must hold [minimum, most_likely, maximum], got {} values",
            costs.len()
        )));
    }
    let probability = entry
        .get("probability")
        .ok_or_else(|| parse_error("missing `probability`".to_string()))?;

    let number = |parameter: &str, v: &Value| {
        v.as_f64().ok_or_else(|| {
            PortfolioError::for_risk(
                name,
                SimulationError::InvalidParameterType {
                    parameter: parameter.to_string(),
                    value: v.to_string(),
                },
            )
        })
    };

    Ok(Risk {
        name: name.to_string(),
        costs: CostTriple::new(
            number("minimum", &costs[0])?,
            number("most_likely", &costs[1])?,
            number("maximum", &costs[2])?,
        ),
        probability: number("probability", probability)?,
    })
}
