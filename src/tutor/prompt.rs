//! Prompt construction for tutor queries.

use crate::models::LearningStyle;

/// Model identifier sent with every request.
pub const MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.7;

/// System message sent ahead of every prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a patient, clear tutor who adapts your explanations to the student's learning style.";

/// Build the user message for a topic and style.
///
/// The topic is embedded verbatim after the `Topic:` marker.
pub fn build_prompt(topic: &str, style: LearningStyle) -> String {
    format!(
        "Act as an educational tutor. Explain the following topic according to the \"{style}\" learning style.\n\
         Adapt the answer so that it is clear, didactic and easy for a student to understand.\n\
         \n\
         Topic: {topic}",
        style = style.name(),
        topic = topic,
    )
}
