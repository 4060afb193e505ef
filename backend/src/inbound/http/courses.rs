//! Course catalogue handlers.
//!
//! ```text
//! GET  /course               list all courses
//! GET  /course/create        creation form (login required)
//! POST /course/create        course_name=..&course_price=..&course_duration=..&course_discount=..
//! GET  /course/delete/{id}   delete (login required)
//! ```

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{CourseFieldError, CourseId, Error, NewCourse};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, html, redirect};

/// Course listing path; mutations redirect here.
pub const COURSES_PATH: &str = "/course";

/// Form body for `POST /course/create`. Numeric fields arrive as text.
#[derive(Debug, Deserialize)]
pub struct CourseForm {
    pub course_name: String,
    pub course_price: String,
    pub course_duration: String,
    pub course_discount: String,
}

impl TryFrom<CourseForm> for NewCourse {
    type Error = CourseFieldError;

    fn try_from(form: CourseForm) -> Result<Self, Self::Error> {
        NewCourse::try_from_form(
            &form.course_name,
            &form.course_price,
            &form.course_duration,
            &form.course_discount,
        )
    }
}

fn map_course_field_error(err: CourseFieldError) -> Error {
    let field = err.field.form_name();
    Error::invalid_request(format!("{field} must be an integer"))
        .with_details(json!({ "field": field, "value": err.value }))
}

/// Render every stored course.
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let courses = state.catalog.list_courses().await?;
    Ok(html(state.views.courses(&courses)))
}

/// Render the course creation form.
pub async fn create_course_form(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_student()?;
    Ok(html(state.views.create_course()))
}

/// Store a new course and return to the listing.
///
/// The session is checked before the form is read, so anonymous visitors
/// are redirected even when the body is malformed.
pub async fn create_course(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: Result<web::Form<CourseForm>, actix_web::Error>,
) -> ApiResult<HttpResponse> {
    let actor = session.require_student()?;
    let form = form.map_err(|err| Error::invalid_request(err.to_string()))?;
    let course = NewCourse::try_from(form.into_inner()).map_err(map_course_field_error)?;
    state.catalog.create_course(actor, course).await?;
    Ok(redirect(COURSES_PATH))
}

/// Delete a course and return to the listing.
///
/// Non-integer ids never reach this handler; the path extractor answers 404.
pub async fn delete_course(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let actor = session.require_student()?;
    let id = CourseId::new(path.into_inner());
    state.catalog.delete_course(actor, id).await?;
    Ok(redirect(COURSES_PATH))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::dev::ServiceResponse;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{MockAccountService, MockCourseCatalog};
    use crate::domain::{Course, StudentId};
    use crate::inbound::http::routes;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use crate::inbound::http::views::MockViewRenderer;

    fn state(catalog: MockCourseCatalog, views: MockViewRenderer) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(MockAccountService::new()),
            Arc::new(catalog),
            Arc::new(views),
        ))
    }

    /// Test app with an extra route that logs student 1 in.
    async fn app(
        catalog: MockCourseCatalog,
        views: MockViewRenderer,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(state(catalog, views))
                .wrap(test_session_middleware())
                .route(
                    "/test/login",
                    web::get().to(|session: SessionContext| async move {
                        session.persist_student(StudentId::new(1))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .configure(routes::configure),
        )
        .await
    }

    async fn login_cookie(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> actix_web::cookie::Cookie<'static> {
        let res = test::call_service(app, test::TestRequest::get().uri("/test/login").to_request())
            .await;
        session_cookie(&res)
    }

    fn algebra() -> Course {
        Course {
            id: CourseId::new(1),
            name: "Algebra".to_owned(),
            price: 100,
            duration: 30,
            discount: 10,
        }
    }

    #[actix_web::test]
    async fn listing_is_public_html() {
        let mut catalog = MockCourseCatalog::new();
        catalog
            .expect_list_courses()
            .times(1)
            .returning(|| Ok(vec![algebra()]));
        let mut views = MockViewRenderer::new();
        views
            .expect_courses()
            .times(1)
            .returning(|courses| format!("{} courses", courses.len()));
        let app = app(catalog, views).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/course").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).expect("content type"),
            "text/html; charset=utf-8"
        );
        assert_eq!(test::read_body(res).await, "1 courses");
    }

    #[rstest]
    #[case(test::TestRequest::get().uri("/course/create"))]
    #[case(
        test::TestRequest::post()
            .uri("/course/create")
            .set_form([("course_name", "Algebra"), ("course_price", "100")])
    )]
    #[case(test::TestRequest::get().uri("/course/delete/1"))]
    #[actix_web::test]
    async fn anonymous_mutations_redirect_to_login(#[case] request: test::TestRequest) {
        let mut catalog = MockCourseCatalog::new();
        catalog.expect_create_course().never();
        catalog.expect_delete_course().never();
        let app = app(catalog, MockViewRenderer::new()).await;

        let res = test::call_service(&app, request.to_request()).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get(header::LOCATION).expect("location"),
            "/login"
        );
    }

    #[actix_web::test]
    async fn create_parses_fields_and_redirects_to_listing() {
        let mut catalog = MockCourseCatalog::new();
        catalog
            .expect_create_course()
            .times(1)
            .returning(|actor, course| {
                assert_eq!(actor, StudentId::new(1));
                assert_eq!(course.price, 100);
                assert_eq!(course.discount, -10);
                Ok(course.into_course(CourseId::new(1)))
            });
        let app = app(catalog, MockViewRenderer::new()).await;
        let cookie = login_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/course/create")
                .cookie(cookie)
                .set_form([
                    ("course_name", "Algebra"),
                    ("course_price", "100"),
                    ("course_duration", "30"),
                    ("course_discount", "-10"),
                ])
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get(header::LOCATION).expect("location"),
            "/course"
        );
    }

    #[rstest]
    #[case("abc", "course_price must be an integer")]
    #[case("99999999999", "course_price must be an integer")]
    #[actix_web::test]
    async fn create_rejects_non_integer_fields(#[case] price: &str, #[case] message: &str) {
        let mut catalog = MockCourseCatalog::new();
        catalog.expect_create_course().never();
        let app = app(catalog, MockViewRenderer::new()).await;
        let cookie = login_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/course/create")
                .cookie(cookie)
                .set_form([
                    ("course_name", "Algebra"),
                    ("course_price", price),
                    ("course_duration", "30"),
                    ("course_discount", "10"),
                ])
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(test::read_body(res).await, message);
    }

    #[actix_web::test]
    async fn authenticated_create_with_missing_field_is_bad_request() {
        let mut catalog = MockCourseCatalog::new();
        catalog.expect_create_course().never();
        let app = app(catalog, MockViewRenderer::new()).await;
        let cookie = login_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/course/create")
                .cookie(cookie)
                .set_form([("course_name", "Algebra")])
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn deleting_missing_course_is_not_found() {
        let mut catalog = MockCourseCatalog::new();
        catalog
            .expect_delete_course()
            .times(1)
            .returning(|_, id| Err(Error::not_found(format!("course {id} not found"))));
        let app = app(catalog, MockViewRenderer::new()).await;
        let cookie = login_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/course/delete/42")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn non_integer_delete_id_is_not_found() {
        let mut catalog = MockCourseCatalog::new();
        catalog.expect_delete_course().never();
        let app = app(catalog, MockViewRenderer::new()).await;
        let cookie = login_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/course/delete/abc")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
