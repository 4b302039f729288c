use std::future::{ready, Ready};

use actix_web::{
    cookie::Cookie, dev::Payload, error::ErrorInternalServerError, http::StatusCode, web, Error,
    FromRequest, HttpRequest, HttpResponse,
};

use crate::services::session::{SessionHandle, SessionStore, SESSION_COOKIE};

/// The visitor's planner session, resolved from the `planner_session` cookie.
/// A session is created on first contact; responses built through
/// [`CurrentSession::respond`] then carry the new cookie.
#[derive(Clone)]
pub struct CurrentSession {
    pub id: String,
    pub handle: SessionHandle,
    pub is_new: bool,
}

impl FromRequest for CurrentSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(store) = req.app_data::<web::Data<SessionStore>>() else {
            log::error!("Session store missing from app data");
            return ready(Err(ErrorInternalServerError("Session store not configured")));
        };

        let cookie = req.cookie(SESSION_COOKIE);
        let (id, handle, is_new) = store.get_or_create(cookie.as_ref().map(|c| c.value()));
        if is_new {
            log::debug!("Started planner session {}", id);
        }

        ready(Ok(CurrentSession { id, handle, is_new }))
    }
}

/// The visitor's session if the cookie names a live one. Never creates a
/// session; used by read-only routes.
pub struct KnownSession(pub Option<SessionHandle>);

impl FromRequest for KnownSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(store) = req.app_data::<web::Data<SessionStore>>() else {
            log::error!("Session store missing from app data");
            return ready(Err(ErrorInternalServerError("Session store not configured")));
        };

        let cookie = req.cookie(SESSION_COOKIE);
        ready(Ok(KnownSession(store.find(cookie.as_ref().map(|c| c.value())))))
    }
}

impl CurrentSession {
    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, self.id.clone())
            .path("/")
            .http_only(true)
            .finish()
    }

    /// An HTML response that sets the cookie when the session is new.
    pub fn respond(&self, status: StatusCode, body: String) -> HttpResponse {
        let mut builder = HttpResponse::build(status);
        builder.content_type("text/html; charset=utf-8");
        if self.is_new {
            builder.cookie(self.cookie());
        }
        builder.body(body)
    }

    pub fn ok(&self, body: String) -> HttpResponse {
        self.respond(StatusCode::OK, body)
    }
}
