//! Data types shared by the classifier, the tutor service and the web layer.

pub mod quiz;
pub mod style;

pub use quiz::{QuizQuestion, QUESTION_COUNT, QUIZ};
pub use style::{LearningStyle, UnknownStyle};
