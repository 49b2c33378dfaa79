//! Time-of-day availability labels

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    #[serde(alias = "Breakfast")]
    Breakfast,
    #[serde(alias = "Lunch")]
    Lunch,
    #[serde(alias = "Dinner")]
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 3] = [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Some(MealTime::Breakfast),
            "lunch" => Some(MealTime::Lunch),
            "dinner" => Some(MealTime::Dinner),
            _ => None,
        }
    }

    /// Meal period served at the given local hour (0-23).
    pub fn from_hour(hour: u32) -> Self {
        if hour < 11 {
            MealTime::Breakfast
        } else if hour < 17 {
            MealTime::Lunch
        } else {
            MealTime::Dinner
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hour_boundaries() {
        assert_eq!(MealTime::from_hour(0), MealTime::Breakfast);
        assert_eq!(MealTime::from_hour(10), MealTime::Breakfast);
        assert_eq!(MealTime::from_hour(11), MealTime::Lunch);
        assert_eq!(MealTime::from_hour(16), MealTime::Lunch);
        assert_eq!(MealTime::from_hour(17), MealTime::Dinner);
        assert_eq!(MealTime::from_hour(23), MealTime::Dinner);
    }

    #[test]
    fn test_deserialize_accepts_capitalized_labels() {
        let parsed: Vec<MealTime> = serde_json::from_str(r#"["lunch", "Dinner"]"#).unwrap();
        assert_eq!(parsed, vec![MealTime::Lunch, MealTime::Dinner]);
    }
}
