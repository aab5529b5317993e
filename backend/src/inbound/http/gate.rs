//! Route gates implemented as extractors.
//!
//! Pages are segregated by authentication state: app pages require a live
//! session backed by a stored user, auth pages require the absence of one.
//! Both gates answer with a `302 Found` redirect instead of an error page,
//! mirroring how a browser-facing app shuffles users between `/sign-in` and
//! `/app`.
//!
//! A session that points at a user the repository no longer knows is
//! treated as unauthenticated. The cookie is left alone; it keeps reading
//! as a redirect until it expires or is replaced by a fresh login.

use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, User};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{APP_PATH, SIGN_IN_PATH};

/// Gate answer: send the client somewhere else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("redirecting to {location}")]
pub struct GateRedirect {
    location: &'static str,
}

impl GateRedirect {
    fn to_sign_in() -> Self {
        Self {
            location: SIGN_IN_PATH,
        }
    }

    fn to_app() -> Self {
        Self { location: APP_PATH }
    }

    /// Redirect target sent in the `Location` header.
    pub fn location(&self) -> &'static str {
        self.location
    }
}

impl ResponseError for GateRedirect {
    fn status_code(&self) -> StatusCode {
        StatusCode::FOUND
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, self.location))
            .finish()
    }
}

/// Extractor for app pages: the session user, loaded from the repository.
///
/// Missing sessions and sessions naming an unknown user both redirect to
/// the sign-in page.
pub struct Authenticated(pub User);

impl FromRequest for Authenticated {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = SessionContext::from_request(req, payload);
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        Box::pin(async move {
            let session = session.await?;
            let state = state_or_internal(state)?;
            let Some(user_id) = session.user_id()? else {
                return Err(GateRedirect::to_sign_in().into());
            };
            let user = state
                .users
                .find_by_id(&user_id)
                .await
                .map_err(|error| Error::internal(format!("user lookup failed: {error}")))?;
            match user {
                Some(user) => Ok(Self(user)),
                None => {
                    warn!(user_id = %user_id, "session references an unknown user");
                    Err(GateRedirect::to_sign_in().into())
                }
            }
        })
    }
}

/// Extractor for auth pages: succeeds only without a usable session.
///
/// A client that is already signed in is redirected to the app overview.
pub struct Anonymous;

impl FromRequest for Anonymous {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = SessionContext::from_request(req, payload);
        Box::pin(async move {
            let session = session.await?;
            if session.user_id()?.is_some() {
                return Err(GateRedirect::to_app().into());
            }
            Ok(Self)
        })
    }
}

fn state_or_internal(
    state: Option<web::Data<HttpState>>,
) -> Result<web::Data<HttpState>, actix_web::Error> {
    state.ok_or_else(|| Error::internal("HttpState missing from app data").into())
}
