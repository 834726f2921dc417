use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::authorizer::authorize_credentials,
    auth::jwt::make_session_jwt,
    auth::session::session_cookie,
    auth::types::*,
    auth::utils::hash_password,
    model::user::User,
    state::AppState,
    templates,
};

const LOGIN_ERROR_TARGET: &str = "/login?error=1";

pub async fn api_register_handler(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    let email = req.email.trim().to_lowercase();

    if email.is_empty() || req.password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "email_and_password_required".into(),
        ));
    }

    // Check existing account
    let existing = state
        .db
        .find_user_by_email(&email)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    if existing.is_some() {
        return Err((StatusCode::BAD_REQUEST, "email_already_registered".into()));
    }

    // Hash password
    let hash = hash_password(&req.password)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    // Create account
    let user = User {
        id: Uuid::new_v4().to_string(),
        email: email.clone(),
        name: req.name,
        password_hash: Some(hash),
        created_ts: chrono::Utc::now().timestamp(),
        meta: None,
    };

    state
        .db
        .save_user(&user)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    // Issue session token
    let identity = Identity {
        id: user.id.clone(),
        email: email.clone(),
    };
    let jwt = make_session_jwt(&identity, &state.jwt_secret)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(AuthResponse {
        jwt,
        user_id: user.id,
        email,
    }))
}

pub async fn api_login_handler(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    let identity = authorize_credentials(&state.db, &req.email, &req.password)
        .await
        .ok_or((StatusCode::UNAUTHORIZED, "invalid_credentials".to_string()))?;

    let jwt = make_session_jwt(&identity, &state.jwt_secret)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(AuthResponse {
        jwt,
        user_id: identity.id,
        email: identity.email,
    }))
}

#[derive(Deserialize)]
pub struct LoginPageQuery {
    #[serde(default)]
    pub error: Option<u8>,
}

#[derive(Serialize)]
struct LoginPageContext {
    error: bool,
}

pub async fn login_page(
    Query(query): Query<LoginPageQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    templates::render(
        "login.html",
        LoginPageContext {
            error: query.error.is_some(),
        },
    )
}

pub async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let Some(identity) = authorize_credentials(&state.db, &form.email, &form.password).await
    else {
        return Redirect::to(LOGIN_ERROR_TARGET).into_response();
    };

    match make_session_jwt(&identity, &state.jwt_secret) {
        Ok(token) => {
            let jar = jar.add(session_cookie(token));
            (jar, Redirect::to("/admin")).into_response()
        }
        Err(err) => {
            error!(user_id = %identity.id, error = %err, "failed to mint session token");
            Redirect::to(LOGIN_ERROR_TARGET).into_response()
        }
    }
}
