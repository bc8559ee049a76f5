//! External-pressure score derived from an alignment verdict.
//! Lower scores mean more genuine interest.

use serde::Serialize;

use super::alignment::ValidationStatus;

/// Total over any input; unknown statuses score as moderate.
pub fn score_from_status(status: &str) -> u8 {
    match ValidationStatus::from_label(status) {
        Some(ValidationStatus::ExcellentMatch) => 20,
        Some(ValidationStatus::GoodFoundation) => 50,
        Some(ValidationStatus::RequiresReflection) => 80,
        None => 50,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureLevel {
    Low,
    Moderate,
    High,
}

impl PressureLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => PressureLevel::High,
            40..=69 => PressureLevel::Moderate,
            _ => PressureLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PressureLevel::High => "High external pressure detected",
            PressureLevel::Moderate => "Moderate external pressure",
            PressureLevel::Low => "Low external pressure - genuine interest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressureAssessment {
    pub score: u8,
    pub level: PressureLevel,
    pub label: &'static str,
}

impl PressureAssessment {
    pub fn from_status(status: &str) -> Self {
        let score = score_from_status(status);
        let level = PressureLevel::from_score(score);
        Self {
            score,
            level,
            label: level.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        assert_eq!(score_from_status("Excellent Match"), 20);
        assert_eq!(score_from_status("Good Foundation"), 50);
        assert_eq!(score_from_status("Requires Reflection"), 80);
    }

    #[test]
    fn test_unknown_status_scores_moderate() {
        assert_eq!(score_from_status(""), 50);
        assert_eq!(score_from_status("excellent match"), 50);
        assert_eq!(score_from_status("Perfect"), 50);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(PressureLevel::from_score(0), PressureLevel::Low);
        assert_eq!(PressureLevel::from_score(39), PressureLevel::Low);
        assert_eq!(PressureLevel::from_score(40), PressureLevel::Moderate);
        assert_eq!(PressureLevel::from_score(69), PressureLevel::Moderate);
        assert_eq!(PressureLevel::from_score(70), PressureLevel::High);
        assert_eq!(PressureLevel::from_score(100), PressureLevel::High);
    }

    #[test]
    fn test_assessment_from_status() {
        let a = PressureAssessment::from_status("Requires Reflection");
        assert_eq!(a.score, 80);
        assert_eq!(a.level, PressureLevel::High);
        assert_eq!(a.label, "High external pressure detected");

        let json = serde_json::to_value(PressureAssessment::from_status("Excellent Match")).unwrap();
        assert_eq!(json["level"], "low");
        assert_eq!(json["score"], 20);
    }
}
