use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use axum_extra::typed_header::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use tracing::warn;

use crate::{auth::jwt::decode_session_jwt, model::user::User, state::AppState};

pub const SESSION_COOKIE: &str = "namecast_session";

/// Http-only session cookie carrying the signed token. Validity is bounded
/// by the token's own `exp` claim, so no Max-Age is set.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build()
}

pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// Request-scoped session: the logged-in account, loaded from the session
/// cookie (or a Bearer header on API calls). Rejection is a redirect to the
/// login page.
pub struct SessionUser(pub User);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let to_login = || Redirect::to("/login");

        let jar = CookieJar::from_headers(&parts.headers);
        let token = match jar.get(SESSION_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => {
                let TypedHeader(Authorization(bearer)) =
                    TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                        .await
                        .map_err(|_| to_login())?;
                bearer.token().to_string()
            }
        };

        let claims = decode_session_jwt(&token, &state.jwt_secret).map_err(|_| to_login())?;

        let user = match state.db.load_user(&claims.sub).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(to_login()),
            Err(err) => {
                warn!(user_id = %claims.sub, error = %err, "session account load failed");
                return Err(to_login());
            }
        };

        Ok(SessionUser(user))
    }
}
