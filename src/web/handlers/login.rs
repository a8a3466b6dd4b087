//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::session_cookie::{expired_session_cookie, session_cookie, session_token};
use crate::web::forms::LoginForm;

/// Template for the login page.
///
/// The sign-up variant adds a name field; both submit to `POST /login`.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub signup: bool,
    pub email: String,
    pub name: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub mode: Option<String>,
}

/// Renders the login page, or skips it when the browser already has a session.
///
/// # Endpoint
///
/// `GET /login` (`?mode=signup` for the sign-up variant)
pub async fn login_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LoginQuery>,
) -> Result<Response, AppError> {
    if let Some(token) = session_token(&headers)
        && state.session_service.is_authenticated(&token).await?
    {
        return Ok(Redirect::to("/dashboard").into_response());
    }

    Ok(LoginTemplate {
        signup: query.mode.as_deref() == Some("signup"),
        email: String::new(),
        name: String::new(),
        errors: Vec::new(),
    }
    .into_response())
}

/// Opens a session and redirects to the dashboard.
///
/// # Endpoint
///
/// `POST /login`
///
/// There is no credential backend: any well-formed submission logs in.
///
/// # Errors
///
/// Re-renders the form with `422 Unprocessable Entity` if validation fails.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.check() {
        let page = LoginTemplate {
            signup: form.is_signup(),
            email: form.email,
            name: form.name.unwrap_or_default(),
            errors,
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    let token = state.session_service.login().await?;
    tracing::info!(signup = form.is_signup(), "dashboard login");

    Ok((
        [(SET_COOKIE, session_cookie(&token, state.secure_cookies))],
        Redirect::to("/dashboard"),
    )
        .into_response())
}

/// Closes the session and returns to the login page.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = session_token(&headers) {
        state.session_service.logout(&token).await?;
    }

    Ok((
        [(SET_COOKIE, expired_session_cookie(state.secure_cookies))],
        Redirect::to("/login"),
    )
        .into_response())
}
