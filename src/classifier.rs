//! Learning style detection from the quiz answers.
//!
//! Each answer is checked against a fixed keyword set per style; a style's
//! count is the number of answers containing at least one of its keywords.
//! The decision is ordered rather than symmetric: two visual answers win,
//! otherwise two auditory answers win, and everything else (ties, no matches)
//! falls back to textual.

use serde::{Deserialize, Serialize};

use crate::models::LearningStyle;

/// Minimum number of matching answers for Visual or Auditory to win.
pub const WINNING_COUNT: usize = 2;

/// Visual keywords, lowercase and accent-free.
pub const VISUAL_KEYWORDS: &[&str] = &[
    "see",
    "image",
    "map",
    "presentation",
    "diagram",
    "visual",
    "ver",
    "imagen",
    "mapa",
    "presentacion",
    "diagrama",
];

/// Auditory keywords. Spanish entries are stems so conjugations match.
pub const AUDITORY_KEYWORDS: &[&str] = &[
    "listen",
    "explanation",
    "spoken",
    "podcast",
    "talk",
    "auditory",
    "escuch",
    "explicacion",
    "hablad",
    "charla",
    "auditiv",
];

/// Textual keywords.
pub const TEXTUAL_KEYWORDS: &[&str] = &[
    "read",
    "write",
    "text",
    "notes",
    "reading",
    "leer",
    "escrib",
    "texto",
    "apunte",
    "lectura",
];

/// Per-style count of answers that matched at least one keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTally {
    pub visual: usize,
    pub auditory: usize,
    pub textual: usize,
}

impl StyleTally {
    /// Apply the ordered decision rule.
    pub fn decide(&self) -> LearningStyle {
        if self.visual >= WINNING_COUNT {
            LearningStyle::Visual
        } else if self.auditory >= WINNING_COUNT {
            LearningStyle::Auditory
        } else {
            LearningStyle::Textual
        }
    }
}

/// Keyword set for a style.
pub fn keywords(style: LearningStyle) -> &'static [&'static str] {
    match style {
        LearningStyle::Visual => VISUAL_KEYWORDS,
        LearningStyle::Auditory => AUDITORY_KEYWORDS,
        LearningStyle::Textual => TEXTUAL_KEYWORDS,
    }
}

/// Lowercase and strip Spanish diacritics so `Explicación` matches `explicacion`.
fn normalize(answer: &str) -> String {
    answer
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' => 'a',
            'é' | 'è' => 'e',
            'í' | 'ì' => 'i',
            'ó' | 'ò' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

/// Whether the answer contains any keyword of the given style.
pub fn matches_style(answer: &str, style: LearningStyle) -> bool {
    let normalized = normalize(answer);
    keywords(style).iter().any(|kw| normalized.contains(kw))
}

/// Count matching answers for every style.
pub fn tally<S: AsRef<str>>(answers: &[S]) -> StyleTally {
    let mut tally = StyleTally::default();
    for answer in answers {
        let answer = answer.as_ref();
        if matches_style(answer, LearningStyle::Visual) {
            tally.visual += 1;
        }
        if matches_style(answer, LearningStyle::Auditory) {
            tally.auditory += 1;
        }
        if matches_style(answer, LearningStyle::Textual) {
            tally.textual += 1;
        }
    }
    tally
}

/// Detect the learning style from the three quiz answers.
pub fn classify<S: AsRef<str>>(answers: &[S; 3]) -> LearningStyle {
    let tally = tally(answers);
    let style = tally.decide();
    tracing::debug!(?tally, %style, "Classified quiz answers");
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_visual_answers() {
        let answers = [
            "Viendo imágenes o diagramas",
            "Mapas, gráficos o colores",
            "Ver presentaciones o dibujos",
        ];
        assert_eq!(classify(&answers), LearningStyle::Visual);
    }

    #[test]
    fn test_all_auditory_answers() {
        let answers = [
            "Escuchando explicaciones",
            "Lo que escuchas",
            "Escuchar podcasts o charlas",
        ];
        assert_eq!(
            tally(&answers),
            StyleTally {
                visual: 0,
                auditory: 3,
                textual: 0
            }
        );
        assert_eq!(classify(&answers), LearningStyle::Auditory);
    }

    #[test]
    fn test_all_textual_answers() {
        let answers = [
            "Leyendo o escribiendo sobre el tema",
            "Lo que lees o escribes",
            "Leer textos o tomar apuntes",
        ];
        assert_eq!(tally(&answers).textual, 3);
        assert_eq!(classify(&answers), LearningStyle::Textual);
    }

    #[test]
    fn test_visual_wins_over_auditory() {
        // Both reach two; visual is checked first.
        let answers = [
            "I like to see and listen",
            "Diagrams and podcasts",
            "Reading notes",
        ];
        let t = tally(&answers);
        assert_eq!(t.visual, 2);
        assert_eq!(t.auditory, 2);
        assert_eq!(classify(&answers), LearningStyle::Visual);
    }

    #[test]
    fn test_one_of_each_falls_back_to_textual() {
        let answers = [
            "Viendo imágenes o diagramas",
            "Lo que escuchas",
            "Leer textos o tomar apuntes",
        ];
        assert_eq!(
            tally(&answers),
            StyleTally {
                visual: 1,
                auditory: 1,
                textual: 1
            }
        );
        assert_eq!(classify(&answers), LearningStyle::Textual);
    }

    #[test]
    fn test_no_matches_falls_back_to_textual() {
        let answers = ["", "nothing here", "42"];
        assert_eq!(tally(&answers), StyleTally::default());
        assert_eq!(classify(&answers), LearningStyle::Textual);
    }

    #[test]
    fn test_two_textual_one_auditory_is_textual() {
        let answers = [
            "Escuchando explicaciones",
            "Lo que lees o escribes",
            "Leer textos o tomar apuntes",
        ];
        assert_eq!(classify(&answers), LearningStyle::Textual);
    }

    #[test]
    fn test_matching_ignores_case_and_accents() {
        assert!(matches_style("EXPLICACIÓN", LearningStyle::Auditory));
        assert!(matches_style("Imágenes", LearningStyle::Visual));
        assert!(matches_style("PRESENTACIÓN", LearningStyle::Visual));
        assert!(!matches_style("Lo que escuchas", LearningStyle::Visual));
    }

    #[test]
    fn test_answer_counts_once_per_style() {
        // Several visual keywords in one answer still count one answer.
        let answers = ["see the image on the map", "", ""];
        assert_eq!(tally(&answers).visual, 1);
    }

    #[test]
    fn test_every_quiz_option_matches_its_own_style() {
        for question in crate::models::QUIZ.iter() {
            for (option, style) in question.options.iter().zip(LearningStyle::ALL) {
                assert!(
                    matches_style(option, style),
                    "{option:?} should match {style}"
                );
                for other in LearningStyle::ALL.iter().filter(|s| **s != style) {
                    assert!(
                        !matches_style(option, *other),
                        "{option:?} should not match {other}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_decide_with_one_visual_two_auditory() {
        let t = StyleTally {
            visual: 1,
            auditory: 2,
            textual: 0,
        };
        assert_eq!(t.decide(), LearningStyle::Auditory);
    }
}
