//! Learning style model.
//!
//! A learning style is the coarse preference used to adjust the wording of the
//! generated explanation. It is either picked by hand or detected by the quiz.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three supported learning styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    /// Images, diagrams, maps and presentations
    Visual,
    /// Spoken explanations, podcasts and talks
    Auditory,
    /// Reading and writing
    #[default]
    Textual,
}

impl LearningStyle {
    /// All styles in the order the page lists them.
    pub const ALL: [LearningStyle; 3] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Textual,
    ];

    /// Stable identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Textual => "textual",
        }
    }

    /// English name, used inside the prompt sent to the model.
    pub fn name(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::Textual => "Textual",
        }
    }

    /// Label shown on the (Spanish) page.
    pub fn label(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditivo",
            LearningStyle::Textual => "Textual",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown learning style: {0}")]
pub struct UnknownStyle(pub String);

impl FromStr for LearningStyle {
    type Err = UnknownStyle;

    /// Accepts the wire id, the English name and the Spanish label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visual" => Ok(LearningStyle::Visual),
            "auditory" | "auditivo" => Ok(LearningStyle::Auditory),
            "textual" => Ok(LearningStyle::Textual),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_textual() {
        assert_eq!(LearningStyle::default(), LearningStyle::Textual);
    }

    #[test]
    fn test_parse_accepts_spanish_label() {
        assert_eq!("Auditivo".parse::<LearningStyle>(), Ok(LearningStyle::Auditory));
        assert_eq!(" VISUAL ".parse::<LearningStyle>(), Ok(LearningStyle::Visual));
        assert_eq!("auditory".parse::<LearningStyle>(), Ok(LearningStyle::Auditory));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "kinesthetic".parse::<LearningStyle>().unwrap_err();
        assert_eq!(err.to_string(), "unknown learning style: kinesthetic");
    }

    #[test]
    fn test_serde_uses_wire_ids() {
        let json = serde_json::to_string(&LearningStyle::Auditory).unwrap();
        assert_eq!(json, "\"auditory\"");

        let parsed: LearningStyle = serde_json::from_str("\"visual\"").unwrap();
        assert_eq!(parsed, LearningStyle::Visual);
    }

    #[test]
    fn test_labels() {
        assert_eq!(LearningStyle::Auditory.label(), "Auditivo");
        assert_eq!(LearningStyle::Auditory.to_string(), "Auditory");
        assert_eq!(LearningStyle::Textual.as_str(), "textual");
    }
}
