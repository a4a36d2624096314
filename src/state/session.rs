//! Per-browser session state.
//!
//! SessionState is the explicit context passed to handlers: it holds the
//! currently selected or detected learning style and whether the quiz is
//! showing. It lives only as long as the process.

use serde::Serialize;

use crate::classifier::{self, StyleTally};
use crate::error::ValidationError;
use crate::models::{LearningStyle, QUESTION_COUNT};

/// State of one browser session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Current learning style (Textual until changed)
    pub style: LearningStyle,

    /// Whether the page shows the quiz instead of the dropdown
    pub quiz_mode: bool,

    /// Counts from the last quiz submission, if any
    pub last_tally: Option<StyleTally>,
}

impl SessionState {
    /// Create a new session with the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify quiz answers and store the detected style.
    pub fn apply_quiz<S: AsRef<str>>(&mut self, answers: &[S]) -> Result<StyleTally, ValidationError> {
        if answers.len() != QUESTION_COUNT {
            return Err(ValidationError::WrongAnswerCount {
                expected: QUESTION_COUNT,
                got: answers.len(),
            });
        }
        let tally = classifier::tally(answers);
        self.style = tally.decide();
        self.last_tally = Some(tally);
        Ok(tally)
    }

    /// Store a manually selected style.
    pub fn select_style(&mut self, style: LearningStyle) {
        self.style = style;
        self.last_tally = None;
    }

    /// Toggle between quiz and manual selection.
    pub fn set_quiz_mode(&mut self, enabled: bool) {
        self.quiz_mode = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_textual() {
        let state = SessionState::new();
        assert_eq!(state.style, LearningStyle::Textual);
        assert!(!state.quiz_mode);
        assert!(state.last_tally.is_none());
    }

    #[test]
    fn test_apply_quiz_updates_style() {
        let mut state = SessionState::new();
        let tally = state
            .apply_quiz(&[
                "Escuchando explicaciones",
                "Lo que escuchas",
                "Escuchar podcasts o charlas",
            ])
            .unwrap();
        assert_eq!(tally.auditory, 3);
        assert_eq!(state.style, LearningStyle::Auditory);
        assert_eq!(state.last_tally, Some(tally));
    }

    #[test]
    fn test_apply_quiz_rejects_wrong_count() {
        let mut state = SessionState::new();
        state.select_style(LearningStyle::Visual);
        let err = state.apply_quiz(&["Lo que escuchas"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongAnswerCount {
                expected: 3,
                got: 1
            }
        );
        // Unchanged on rejection
        assert_eq!(state.style, LearningStyle::Visual);
    }

    #[test]
    fn test_manual_selection_clears_tally() {
        let mut state = SessionState::new();
        state
            .apply_quiz(&[
                "Viendo imágenes o diagramas",
                "Mapas, gráficos o colores",
                "Ver presentaciones o dibujos",
            ])
            .unwrap();
        assert_eq!(state.style, LearningStyle::Visual);

        state.select_style(LearningStyle::Auditory);
        assert_eq!(state.style, LearningStyle::Auditory);
        assert!(state.last_tally.is_none());
    }

    #[test]
    fn test_quiz_mode_is_independent_of_style() {
        let mut state = SessionState::new();
        state.set_quiz_mode(true);
        state.select_style(LearningStyle::Visual);
        assert!(state.quiz_mode);

        state.set_quiz_mode(false);
        assert!(!state.quiz_mode);
        assert_eq!(state.style, LearningStyle::Visual);
    }
}
