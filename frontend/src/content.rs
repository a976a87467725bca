//! Roadmap content: the fixed list of learning steps for every skill level.
//!
//! The table ships as `assets/roadmap.json` and is parsed once at startup,
//! then handed to the roadmap generator as immutable data.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::UiError;

const BUILTIN_ROADMAP: &str = include_str!("../assets/roadmap.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [SkillLevel::Beginner, SkillLevel::Intermediate, SkillLevel::Advanced];

    /// Anything other than the three level names means "no level selected".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "advanced" => Some(SkillLevel::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner - Just starting out",
            SkillLevel::Intermediate => "Intermediate - Some experience",
            SkillLevel::Advanced => "Advanced - Looking to specialize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StepRecord {
    pub title: String,
    pub description: String,
    /// Free-form, e.g. "4-6 weeks" or "Ongoing".
    pub duration: String,
    pub priority: String,
}

impl StepRecord {
    pub fn priority(&self) -> Option<Priority> {
        Priority::parse(&self.priority)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RoadmapTable {
    levels: BTreeMap<SkillLevel, Vec<StepRecord>>,
}

impl RoadmapTable {
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn builtin() -> Result<Self, UiError> {
        Self::from_json(BUILTIN_ROADMAP)
    }

    /// Steps for `level` in their stored order. A level missing from the
    /// table yields an empty slice.
    pub fn steps(&self, level: SkillLevel) -> &[StepRecord] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SkillLevel::Beginner, 6)]
    #[case(SkillLevel::Intermediate, 5)]
    #[case(SkillLevel::Advanced, 5)]
    fn builtin_table_has_every_level(#[case] level: SkillLevel, #[case] expected: usize) {
        let table = RoadmapTable::builtin().unwrap();
        assert_eq!(table.steps(level).len(), expected);
    }

    #[test]
    fn builtin_beginner_starts_with_python() {
        let table = RoadmapTable::builtin().unwrap();
        let first = &table.steps(SkillLevel::Beginner)[0];
        assert_eq!(first.title, "Master Python Fundamentals");
        assert_eq!(first.duration, "4-6 weeks");
        assert_eq!(first.priority(), Some(Priority::High));
    }

    #[test]
    fn builtin_priorities_are_all_known() {
        let table = RoadmapTable::builtin().unwrap();
        for level in SkillLevel::ALL {
            assert!(table.steps(level).iter().all(|s| s.priority().is_some()));
        }
    }

    #[test]
    fn missing_level_is_empty() {
        let table = RoadmapTable::from_json(r#"{"beginner": []}"#).unwrap();
        assert!(table.steps(SkillLevel::Advanced).is_empty());
    }

    #[test]
    fn unknown_level_key_is_rejected() {
        let err = RoadmapTable::from_json(r#"{"expert": []}"#).unwrap_err();
        assert!(matches!(err, UiError::Content(_)));
    }

    #[rstest]
    #[case("beginner", Some(SkillLevel::Beginner))]
    #[case("intermediate", Some(SkillLevel::Intermediate))]
    #[case("advanced", Some(SkillLevel::Advanced))]
    #[case("", None)]
    #[case("Beginner", None)]
    #[case("expert", None)]
    fn parses_levels(#[case] raw: &str, #[case] expected: Option<SkillLevel>) {
        assert_eq!(SkillLevel::parse(raw), expected);
    }

    #[test]
    fn level_names_round_trip() {
        for level in SkillLevel::ALL {
            assert_eq!(SkillLevel::parse(level.as_str()), Some(level));
        }
    }
}
