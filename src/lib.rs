//! Tutor - a learning-style aware tutoring web service
//!
//! A short quiz (or a manual choice) picks a learning style; questions are
//! then sent to a chat-completion API with a prompt adapted to that style.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod models;
pub mod startup;
pub mod state;
pub mod traits;
pub mod tutor;
pub mod web;
