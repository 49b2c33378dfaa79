//! Audience enumeration shared by menus and items

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    #[default]
    #[serde(alias = "All", alias = "all ages", alias = "All Ages")]
    All,
    #[serde(alias = "Kids")]
    Kids,
    #[serde(alias = "Teens")]
    Teens,
    #[serde(alias = "Adults")]
    Adults,
    #[serde(alias = "Seniors")]
    Seniors,
    /// Any label the server sends that is not listed above.
    #[serde(other)]
    Other,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::All => "all",
            AgeGroup::Kids => "kids",
            AgeGroup::Teens => "teens",
            AgeGroup::Adults => "adults",
            AgeGroup::Seniors => "seniors",
            AgeGroup::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "all ages" => Some(AgeGroup::All),
            "kids" => Some(AgeGroup::Kids),
            "teens" => Some(AgeGroup::Teens),
            "adults" => Some(AgeGroup::Adults),
            "seniors" => Some(AgeGroup::Seniors),
            _ => None,
        }
    }
}
