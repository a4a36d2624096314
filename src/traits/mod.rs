//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport used by the OpenAI backend
//! - [`crate::tutor::TutorBackend`] lives next to the service it feeds

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
