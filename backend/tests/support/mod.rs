//! Shared helpers for HTTP integration tests.

use std::sync::Arc;

use actix_http::Request;
use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{test, web};

use coursedesk::domain::ports::{CourseRepository, StudentRepository};
use coursedesk::inbound::http::health::HealthState;
use coursedesk::outbound::security::BcryptPasswordHasher;
use coursedesk::server::{
    AppDependencies, SESSION_COOKIE_NAME, build_app, http_state_from_repositories,
};

/// Initialise the full application over the given repositories.
pub async fn init_app<S, C>(
    students: Arc<S>,
    courses: Arc<C>,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>
where
    S: StudentRepository + 'static,
    C: CourseRepository + 'static,
{
    let http_state = http_state_from_repositories(
        students,
        courses,
        BcryptPasswordHasher::new(BcryptPasswordHasher::MIN_COST),
    );
    test::init_service(build_app(AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(http_state),
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }))
    .await
}

/// One browsing context: remembers the latest session cookie.
#[derive(Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
}

/// Status, `Location` header, and body of a response.
pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl Browser {
    pub async fn get<S>(&mut self, app: &S, uri: &str) -> Page
    where
        S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        self.send(app, test::TestRequest::get().uri(uri)).await
    }

    pub async fn post<S>(&mut self, app: &S, uri: &str, form: &[(&str, &str)]) -> Page
    where
        S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        self.send(app, test::TestRequest::post().uri(uri).set_form(form))
            .await
    }

    async fn send<S>(&mut self, app: &S, mut request: test::TestRequest) -> Page
    where
        S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        if let Some(cookie) = self.cookie.clone() {
            request = request.cookie(cookie);
        }
        let res = test::call_service(app, request.to_request()).await;
        if let Some(cookie) = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        {
            self.cookie = Some(cookie.into_owned());
        }
        let status = res.status();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = test::read_body(res).await;
        Page {
            status,
            location,
            body: String::from_utf8(body.to_vec()).expect("utf8 body"),
        }
    }
}

impl Page {
    /// Assert a `302 Found` to `target`.
    pub fn assert_redirect(&self, target: &str) {
        assert_eq!(self.status, StatusCode::FOUND, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some(target));
    }
}
