//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix cookie session so handlers deal only with the
//! authenticated student's id.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, StudentId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Per-request view of the visitor's session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Record `id` as the authenticated student.
    ///
    /// The session id is renewed so a pre-login cookie cannot be replayed.
    pub fn persist_student(&self, id: StudentId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the authenticated student's id, if any.
    ///
    /// A value that does not decode as an id is treated as absent.
    pub fn student_id(&self) -> Option<StudentId> {
        match self.0.get::<i32>(USER_ID_KEY) {
            Ok(id) => id.map(StudentId::new),
            Err(error) => {
                warn!(%error, "invalid user id in session cookie");
                None
            }
        }
    }

    /// Require an authenticated student.
    ///
    /// Fails with [`ErrorCode::Unauthorized`](crate::domain::ErrorCode), which
    /// the HTTP layer turns into a redirect to the login page.
    pub fn require_student(&self) -> Result<StudentId, Error> {
        self.student_id()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop the authenticated student, if any. Safe to call repeatedly.
    pub fn clear(&self) {
        self.0.remove(USER_ID_KEY);
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, HttpResponse, test, web};

    async fn show_student(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = session.require_student()?;
        Ok(HttpResponse::Ok().body(id.to_string()))
    }

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(test_session_middleware())
            .route(
                "/set",
                web::get().to(|session: SessionContext| async move {
                    session.persist_student(StudentId::new(7))?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
            .route(
                "/set-invalid",
                web::get().to(|session: Session| async move {
                    session
                        .insert(USER_ID_KEY, "not-a-number")
                        .expect("set invalid user id");
                    HttpResponse::Ok()
                }),
            )
            .route(
                "/clear",
                web::get().to(|session: SessionContext| async move {
                    session.clear();
                    HttpResponse::Ok()
                }),
            )
            .route("/get", web::get().to(show_student))
    }

    #[actix_web::test]
    async fn round_trips_student_id() {
        let app = test::init_service(session_test_app()).await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = session_cookie(&set_res);

        let get_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/get").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        assert_eq!(test::read_body(get_res).await, "7");
    }

    #[actix_web::test]
    async fn missing_student_redirects_to_login() {
        let app = test::init_service(session_test_app()).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/get").to_request()).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get(header::LOCATION).expect("location"),
            "/login"
        );
    }

    #[actix_web::test]
    async fn tampered_student_id_is_treated_as_anonymous() {
        let app = test::init_service(session_test_app()).await;
        let set_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/set-invalid").to_request(),
        )
        .await;
        let cookie = session_cookie(&set_res);

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/get").cookie(cookie).to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
    }

    #[actix_web::test]
    async fn cleared_session_is_anonymous() {
        let app = test::init_service(session_test_app()).await;
        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        let login_cookie = session_cookie(&set_res);

        let clear_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/clear")
                .cookie(login_cookie)
                .to_request(),
        )
        .await;
        let cleared_cookie = session_cookie(&clear_res);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/get")
                .cookie(cleared_cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FOUND);
    }
}
