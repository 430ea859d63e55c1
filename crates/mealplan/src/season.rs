use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Northern hemisphere meteorological seasons.
    pub fn of(date: NaiveDate) -> Self {
        match date.month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn produce(&self) -> &'static [&'static str] {
        match self {
            Season::Spring => &["asparagus", "peas", "radishes", "lettuce", "strawberries"],
            Season::Summer => &["tomatoes", "zucchini", "corn", "berries", "stone fruits"],
            Season::Fall => &["squash", "apples", "root vegetables", "brussels sprouts", "pears"],
            Season::Winter => &["citrus", "cabbage", "potatoes", "onions", "carrots"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_boundaries() {
        let date = |m| NaiveDate::from_ymd_opt(2026, m, 15).unwrap();

        assert_eq!(Season::of(date(2)), Season::Winter);
        assert_eq!(Season::of(date(3)), Season::Spring);
        assert_eq!(Season::of(date(8)), Season::Summer);
        assert_eq!(Season::of(date(10)), Season::Fall);
        assert_eq!(Season::of(date(12)), Season::Winter);
    }
}
