use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
)]
pub enum Clear {
    #[serde(rename = "P", alias = "PLAYED")]
    #[strum(to_string = "P", serialize = "PLAYED")]
    Played,
    #[default]
    #[serde(rename = "C", alias = "CLEARED")]
    #[strum(to_string = "C", serialize = "CLEARED")]
    Complete,
    #[serde(rename = "EXC")]
    #[strum(serialize = "EXC")]
    ExcessiveComplete,
    #[serde(rename = "UC")]
    #[strum(serialize = "UC")]
    UltimateChain,
    #[serde(rename = "PUC")]
    #[strum(serialize = "PUC")]
    PerfectUltimateChain,
}

impl Clear {
    /// Multiplier applied to a play's force.
    pub fn coefficient(&self) -> f64 {
        match self {
            Self::PerfectUltimateChain => 1.10,
            Self::UltimateChain => 1.05,
            Self::ExcessiveComplete => 1.02,
            Self::Complete => 1.00,
            Self::Played => 0.50,
        }
    }

    /// Map the clear label used in the game's score export
    /// (e.g. `"ULTIMATE CHAIN"`) to a clear type.
    pub fn from_result_label(label: &str) -> Option<Self> {
        match label {
            "PERFECT" => Some(Self::PerfectUltimateChain),
            "ULTIMATE CHAIN" => Some(Self::UltimateChain),
            "EXCESSIVE COMPLETE" => Some(Self::ExcessiveComplete),
            "COMPLETE" => Some(Self::Complete),
            "PLAYED" => Some(Self::Played),
            _ => None,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Clear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
