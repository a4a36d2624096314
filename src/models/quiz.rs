//! The fixed three-question learning style quiz.

use serde::Serialize;

/// A quiz question with its fixed answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    /// Question text
    pub prompt: &'static str,
    /// The three options, listed visual, auditory, textual
    pub options: [&'static str; 3],
}

/// Number of questions in the quiz.
pub const QUESTION_COUNT: usize = 3;

/// The quiz shown when the user asks for automatic detection.
pub const QUIZ: [QuizQuestion; QUESTION_COUNT] = [
    QuizQuestion {
        prompt: "¿Cómo prefieres aprender algo nuevo?",
        options: [
            "Viendo imágenes o diagramas",
            "Escuchando explicaciones",
            "Leyendo o escribiendo sobre el tema",
        ],
    },
    QuizQuestion {
        prompt: "¿Qué te resulta más fácil recordar?",
        options: [
            "Mapas, gráficos o colores",
            "Lo que escuchas",
            "Lo que lees o escribes",
        ],
    },
    QuizQuestion {
        prompt: "En una clase ideal, preferirías...",
        options: [
            "Ver presentaciones o dibujos",
            "Escuchar podcasts o charlas",
            "Leer textos o tomar apuntes",
        ],
    },
];
