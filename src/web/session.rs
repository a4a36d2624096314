//! Session cookie extraction.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::SET_COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum_extra::headers::{Cookie, HeaderMapExt};
use uuid::Uuid;

use crate::state::SessionId;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "tutor_session";

/// Session id taken from the request cookie, or freshly minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCookie {
    pub id: SessionId,
    /// True when the browser sent no valid cookie
    pub fresh: bool,
}

impl SessionCookie {
    /// Read the session id from a `Cookie` header map.
    pub fn from_headers(headers: &axum::http::HeaderMap) -> Self {
        let existing = headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_string))
            .and_then(|value| Uuid::parse_str(value.trim()).ok());

        match existing {
            Some(id) => Self { id, fresh: false },
            None => Self {
                id: Uuid::new_v4(),
                fresh: true,
            },
        }
    }

    /// `Set-Cookie` value for this session.
    pub fn header_value(&self) -> String {
        format!(
            "{}={}; HttpOnly; SameSite=Lax; Path=/",
            SESSION_COOKIE, self.id
        )
    }

    /// Attach `Set-Cookie` to a response when the session is new.
    pub fn attach(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if self.fresh {
            match HeaderValue::from_str(&self.header_value()) {
                Ok(value) => {
                    response.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => tracing::error!("Invalid session cookie header: {}", e),
            }
        }
        response
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;
    use axum::http::{HeaderMap, StatusCode};

    #[test]
    fn test_missing_cookie_is_fresh() {
        let session = SessionCookie::from_headers(&HeaderMap::new());
        assert!(session.fresh);
    }

    #[test]
    fn test_existing_cookie_is_reused() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("other=1; tutor_session={}", id)).unwrap(),
        );
        let session = SessionCookie::from_headers(&headers);
        assert_eq!(session, SessionCookie { id, fresh: false });
    }

    #[test]
    fn test_garbage_cookie_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("tutor_session=not-a-uuid"));
        assert!(SessionCookie::from_headers(&headers).fresh);
    }

    #[test]
    fn test_attach_only_when_fresh() {
        let id = Uuid::new_v4();
        let fresh = SessionCookie { id, fresh: true };
        let response = fresh.attach(StatusCode::OK);
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert_eq!(
            cookie,
            format!("tutor_session={}; HttpOnly; SameSite=Lax; Path=/", id)
        );

        let known = SessionCookie { id, fresh: false };
        assert!(known.attach(StatusCode::OK).headers().get(SET_COOKIE).is_none());
    }
}
