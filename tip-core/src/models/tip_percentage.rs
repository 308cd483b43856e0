use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of selectable tip percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TipPercentage {
    #[default]
    NoTip,
    Five,
    Ten,
    Fifteen,
    Twenty,
    TwentyFive,
}

/// Error returned for a percentage outside the choice set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported tip percentage '{0}' (expected one of 0, 5, 10, 15, 20, 25)")]
pub struct InvalidTipPercentage(pub String);

impl TipPercentage {
    /// All choices in display order.
    pub const ALL: [TipPercentage; 6] = [
        Self::NoTip,
        Self::Five,
        Self::Ten,
        Self::Fifteen,
        Self::Twenty,
        Self::TwentyFive,
    ];

    pub fn percent(&self) -> u32 {
        match self {
            Self::NoTip => 0,
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
            Self::TwentyFive => 25,
        }
    }

    /// Selector label: "No Tip" at 0, otherwise e.g. "15%".
    pub fn label(&self) -> String {
        match self {
            Self::NoTip => "No Tip".to_string(),
            other => format!("{}%", other.percent()),
        }
    }

    pub fn is_no_tip(&self) -> bool {
        matches!(self, Self::NoTip)
    }
}

impl TryFrom<u32> for TipPercentage {
    type Error = InvalidTipPercentage;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|p| p.percent() == value)
            .ok_or_else(|| InvalidTipPercentage(value.to_string()))
    }
}

impl From<TipPercentage> for u32 {
    fn from(value: TipPercentage) -> Self {
        value.percent()
    }
}

impl FromStr for TipPercentage {
    type Err = InvalidTipPercentage;

    /// Accepts `"15"`, `"15%"`, `"no tip"`, `"no-tip"` or `"none"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if matches!(lowered.as_str(), "no tip" | "no-tip" | "notip" | "none") {
            return Ok(Self::NoTip);
        }

        trimmed
            .strip_suffix('%')
            .unwrap_or(trimmed)
            .trim()
            .parse::<u32>()
            .map_err(|_| InvalidTipPercentage(s.to_string()))
            .and_then(|value| {
                Self::try_from(value).map_err(|_| InvalidTipPercentage(s.to_string()))
            })
    }
}

impl fmt::Display for TipPercentage {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.label())
    }
}
