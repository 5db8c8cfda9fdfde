use serde::{Deserialize, Serialize};
use std::fmt;

/// Odometer distances, in kilometres.
pub type Distance = u32;

/// Catalog entry: a part and the distance it is expected to last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSpec {
    pub name: String,
    #[serde(rename = "lifespan_km")]
    pub lifespan_distance: Distance,
}

impl PartSpec {
    pub fn new(name: impl Into<String>, lifespan_distance: Distance) -> Self {
        Self {
            name: name.into(),
            lifespan_distance,
        }
    }
}

/// One accepted calculation. Appended to the session, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub part_name: String,
    pub last_serviced_distance: Distance,
    pub lifespan_distance: Distance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WearStatus {
    Ok,
    Replace,
}

impl WearStatus {
    pub fn label(self) -> &'static str {
        match self {
            WearStatus::Ok => "OK",
            WearStatus::Replace => "REPLACE",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            WearStatus::Ok => "None",
            WearStatus::Replace => "Service Required",
        }
    }
}

impl fmt::Display for WearStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WearResult {
    pub distance_driven: Distance,
    pub wear_ratio: f64,
    /// Truncated, not rounded; may exceed 100.
    pub wear_percent: u32,
    pub status: WearStatus,
}

/// Why a calculation produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    UnknownPart { name: String },
    ReadingBelowService { last: Distance, current: Distance },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UnknownPart { name } => {
                write!(f, "no lifespan is known for part '{}'", name)
            }
            Rejection::ReadingBelowService { last, current } => write!(
                f,
                "current reading {} km is below the last service reading {} km",
                current, last
            ),
        }
    }
}

/// Table row as shown at the time the record was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "part")]
    pub part_name: String,
    #[serde(rename = "lifespan_km")]
    pub lifespan_distance: Distance,
    pub status: WearStatus,
    pub wear_percent: u32,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub category: String,
    /// Always within 0..=100.
    pub wear_percent: f64,
}
