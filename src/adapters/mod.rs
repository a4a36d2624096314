//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockTutor`] - Stub tutor backend

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockTutor};
pub use reqwest_http::ReqwestHttpClient;
