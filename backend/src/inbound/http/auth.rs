//! Registration, login, and logout handlers.
//!
//! ```text
//! GET  /register  registration form
//! POST /register  username=..&email=..&password=..
//! GET  /login     login form
//! POST /login     email=..&password=..
//! GET  /logout
//! ```

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{LoginCredentials, Registration};
use crate::inbound::http::error::LOGIN_PATH;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, html, redirect};

/// Landing page after a successful login.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Form body for `POST /register`.
#[derive(Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterForm> for Registration {
    fn from(form: RegisterForm) -> Self {
        Registration::new(form.username, form.email, form.password)
    }
}

/// Form body for `POST /login`.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl From<LoginForm> for LoginCredentials {
    fn from(form: LoginForm) -> Self {
        LoginCredentials::new(form.email, form.password)
    }
}

/// Render the registration form.
pub async fn register_form(state: web::Data<HttpState>) -> HttpResponse {
    html(state.views.register())
}

/// Create an account, then send the visitor to the login page.
///
/// A duplicate email answers with the plain-text rejection instead.
pub async fn register(
    state: web::Data<HttpState>,
    form: web::Form<RegisterForm>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::from(form.into_inner());
    state.accounts.register(&registration).await?;
    Ok(redirect(LOGIN_PATH))
}

/// Render the login form.
pub async fn login_form(state: web::Data<HttpState>) -> HttpResponse {
    html(state.views.login())
}

/// Authenticate and start a session, then go to the dashboard.
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::from(form.into_inner());
    let student_id = state.accounts.authenticate(&credentials).await?;
    session.persist_student(student_id)?;
    Ok(redirect(DASHBOARD_PATH))
}

/// End the session, whether or not one was active.
pub async fn logout(session: SessionContext) -> HttpResponse {
    if let Some(id) = session.student_id() {
        info!(student_id = %id, "student logged out");
    }
    session.clear();
    redirect(LOGIN_PATH)
}
