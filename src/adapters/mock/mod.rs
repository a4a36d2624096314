//! Test doubles for the trait seams.
//!
//! - [`MockHttpClient`] - Configurable HTTP responses with request recording
//! - [`MockTutor`] - Canned tutor answers or failures

pub mod http;
pub mod tutor;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use tutor::MockTutor;
