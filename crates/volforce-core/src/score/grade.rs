use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

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
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Grade {
    D = 0,
    C = 1,
    B = 2,
    A = 3,
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus = 4,
    #[serde(rename = "AA")]
    #[strum(serialize = "AA")]
    Aa = 5,
    #[serde(rename = "AA+")]
    #[strum(serialize = "AA+")]
    AaPlus = 6,
    #[serde(rename = "AAA")]
    #[strum(serialize = "AAA")]
    Aaa = 7,
    #[serde(rename = "AAA+")]
    #[strum(serialize = "AAA+")]
    AaaPlus = 8,
    S = 9,
}

/// Lower bound of each grade band, highest first.
const GRADE_BANDS: [(f64, Grade); 9] = [
    (0.99, Grade::S),
    (0.98, Grade::AaaPlus),
    (0.97, Grade::Aaa),
    (0.95, Grade::AaPlus),
    (0.93, Grade::Aa),
    (0.90, Grade::APlus),
    (0.87, Grade::A),
    (0.75, Grade::B),
    (0.65, Grade::C),
];

impl Grade {
    /// Grade for a normalized score in `[0, 1]`.
    pub fn from_frac_score(frac: f64) -> Self {
        GRADE_BANDS
            .iter()
            .find(|(threshold, _)| frac >= *threshold)
            .map(|&(_, grade)| grade)
            .unwrap_or(Self::D)
    }

    /// Multiplier applied to a play's force.
    pub fn coefficient(&self) -> f64 {
        match self {
            Self::S => 1.05,
            Self::AaaPlus => 1.02,
            Self::Aaa => 1.00,
            Self::AaPlus => 0.97,
            Self::Aa => 0.94,
            Self::APlus => 0.91,
            Self::A => 0.88,
            Self::B => 0.85,
            Self::C => 0.82,
            Self::D => 0.80,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
