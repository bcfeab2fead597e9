//! Trip records and their display tags.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Visual accent for a trip card or a category badge.
///
/// Carries no meaning beyond picking a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accent {
    #[serde(rename = "accent-yellow")]
    Yellow,
    #[serde(rename = "accent-pink")]
    Pink,
    #[serde(rename = "accent-blue")]
    Blue,
    #[serde(rename = "accent-green")]
    Green,
}

impl Accent {
    /// CSS class selecting this accent.
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Yellow => "accent-yellow",
            Accent::Pink => "accent-pink",
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
        }
    }
}

/// A single travel itinerary with its budget.
///
/// `spent` may exceed `total_budget`; nothing here enforces otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Whole currency units.
    pub total_budget: u32,
    /// Whole currency units.
    pub spent: u32,
    pub color: Accent,
}

/// A category badge shown above the trip grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub accent: Accent,
}

/// Badges in display order.
pub const BADGES: [Badge; 4] = [
    Badge {
        label: "Budget",
        accent: Accent::Yellow,
    },
    Badge {
        label: "Savings",
        accent: Accent::Green,
    },
    Badge {
        label: "Flights",
        accent: Accent::Pink,
    },
    Badge {
        label: "Stays",
        accent: Accent::Blue,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_matches_serde_name() {
        for accent in [Accent::Yellow, Accent::Pink, Accent::Blue, Accent::Green] {
            let parsed: Accent =
                toml::Value::String(accent.css_class().to_string()).try_into().unwrap();
            assert_eq!(parsed, accent);
        }
    }

    #[test]
    fn test_badges_cover_every_accent() {
        let mut accents: Vec<_> = BADGES.iter().map(|b| b.accent.css_class()).collect();
        accents.sort();
        accents.dedup();
        assert_eq!(accents.len(), 4);
    }
}
