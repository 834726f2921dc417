use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::{
    auth::session::{removal_cookie, SessionUser},
    state::AppState,
    templates,
};

const BLOG_SLUGS: &[&str] = &["python", "javascript", "java", "cpp", "cs"];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_page).post(home_submit))
        .route("/blogpost/{slug}", get(blogpost_page))
        .route("/admin", get(admin_page))
        .route("/admin/logout", get(admin_logout))
}

// ============================================================
// HOME: server-side form feeding the prediction page
// ============================================================
#[derive(Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    pub error: Option<u8>,
}

#[derive(Serialize)]
struct HomeContext {
    error: bool,
}

#[derive(Deserialize)]
pub struct NameForm {
    pub name: String,
}

async fn home_page(Query(query): Query<HomeQuery>) -> Result<Html<String>, (StatusCode, String)> {
    templates::render(
        "home.html",
        HomeContext {
            error: query.error.is_some(),
        },
    )
}

/// Post/Redirect/Get: validate the submitted name and hand off to the
/// prediction page.
async fn home_submit(Form(form): Form<NameForm>) -> Redirect {
    let name = form.name.trim();
    if name.is_empty() {
        return Redirect::to("/?error=1");
    }
    Redirect::to(&format!("/prediction/{}", encode_path_segment(name)))
}

// RFC 3986 unreserved characters stay literal, everything else is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

// ============================================================
// DYNAMIC ROUTE DEMO
// ============================================================
#[derive(Serialize)]
struct BlogpostContext {
    slug: String,
    found: bool,
}

async fn blogpost_page(Path(slug): Path<String>) -> Response {
    let found = BLOG_SLUGS.contains(&slug.as_str());
    let status = if found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    match templates::render("blogpost.html", BlogpostContext { slug, found }) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

// ============================================================
// ADMIN SHELL (session-gated)
// ============================================================
#[derive(Serialize)]
struct AdminUserRow {
    id: String,
    email: String,
    created: String,
}

#[derive(Serialize)]
struct AdminContext {
    viewer_email: String,
    users: Vec<AdminUserRow>,
}

async fn admin_page(
    State(state): State<AppState>,
    SessionUser(viewer): SessionUser,
) -> Result<Html<String>, Response> {
    let users = state
        .db
        .list_users()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response())?;

    let rows = users
        .into_iter()
        .map(|user| AdminUserRow {
            id: user.id,
            email: user.email,
            created: chrono::DateTime::from_timestamp(user.created_ts, 0)
                .map(|ts| ts.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        })
        .collect();

    templates::render(
        "admin.html",
        AdminContext {
            viewer_email: viewer.email,
            users: rows,
        },
    )
    .map_err(IntoResponse::into_response)
}

async fn admin_logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(removal_cookie()), Redirect::to("/login"))
}

#[cfg(test)]
mod tests {
    use super::{blogpost_page, encode_path_segment};
    use axum::{extract::Path, http::StatusCode};

    #[tokio::test]
    async fn known_slug_renders_post() {
        let response = blogpost_page(Path("python".into())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let response = blogpost_page(Path("rust".into())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn encodes_reserved_path_bytes() {
        assert_eq!(encode_path_segment("alice"), "alice");
        assert_eq!(encode_path_segment("mary-j_a.ne~"), "mary-j_a.ne~");
        assert_eq!(encode_path_segment("mary jane"), "mary%20jane");
        assert_eq!(encode_path_segment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(encode_path_segment("Łukasz"), "%C5%81ukasz");
    }
}
