use serde::{Deserialize, Serialize};

/// GHG Protocol scope of an emissions disclosure.
///
/// Scope 1 covers direct emissions, Scope 2 indirect emissions from
/// purchased energy, Scope 3 the remaining value-chain emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GhgScope {
    S1,
    S2,
    S3,
}

impl GhgScope {
    /// Map a standalone scope digit (`"1"`, `"2"`, `"3"`) onto its scope.
    pub fn from_digit(digit: &str) -> Option<Self> {
        match digit {
            "1" => Some(GhgScope::S1),
            "2" => Some(GhgScope::S2),
            "3" => Some(GhgScope::S3),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GhgScope::S1 => "S1",
            GhgScope::S2 => "S2",
            GhgScope::S3 => "S3",
        }
    }
}

/// A magnitude paired with the unit string the registry reported it in
/// (usually `"t CO2e"`). No unit conversion or re-scaling happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }
}

/// One observed disclosure: this much was emitted in this reporting year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsRealization {
    pub year: i32,
    pub value: Quantity,
}

/// A company's disclosed history, split per scope.
///
/// Entries keep the order they were encountered in the source payload;
/// nothing is sorted or deduplicated. Reporting years that disclose
/// Scope 2 under both the location-based and the market-based accounting
/// convention contribute two S2 entries for that year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricEmissionsScopes {
    #[serde(rename = "S1")]
    pub s1: Vec<EmissionsRealization>,
    #[serde(rename = "S2")]
    pub s2: Vec<EmissionsRealization>,
    #[serde(rename = "S3")]
    pub s3: Vec<EmissionsRealization>,
}

impl HistoricEmissionsScopes {
    /// Append one realization to its scope's list.
    pub fn push(&mut self, scope: GhgScope, realization: EmissionsRealization) {
        match scope {
            GhgScope::S1 => self.s1.push(realization),
            GhgScope::S2 => self.s2.push(realization),
            GhgScope::S3 => self.s3.push(realization),
        }
    }

    pub fn scope(&self, scope: GhgScope) -> &[EmissionsRealization] {
        match scope {
            GhgScope::S1 => &self.s1,
            GhgScope::S2 => &self.s2,
            GhgScope::S3 => &self.s3,
        }
    }

    /// Total number of realizations across all three scopes.
    pub fn len(&self) -> usize {
        self.s1.len() + self.s2.len() + self.s3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
