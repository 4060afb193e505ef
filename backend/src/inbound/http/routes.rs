//! Route table for the web application.
//!
//! | Method   | Path                  | Handler                        |
//! |----------|-----------------------|--------------------------------|
//! | GET      | `/`                   | [`pages::home`]                |
//! | GET/POST | `/register`           | [`auth::register_form`] / [`auth::register`] |
//! | GET/POST | `/login`              | [`auth::login_form`] / [`auth::login`] |
//! | GET      | `/logout`             | [`auth::logout`]               |
//! | GET      | `/dashboard`          | [`pages::dashboard`]           |
//! | GET      | `/course`             | [`courses::list_courses`]      |
//! | GET/POST | `/course/create`      | [`courses::create_course_form`] / [`courses::create_course`] |
//! | GET      | `/course/delete/{id}` | [`courses::delete_course`]     |
//! | GET      | `/health/ready`       | [`health::ready`]              |
//! | GET      | `/health/live`        | [`health::live`]               |
//!
//! Handlers read [`HttpState`](super::state::HttpState) and the session from
//! request data, so the app must register both before calling [`configure`].

use actix_web::web;

use super::{auth, courses, health, pages};

/// Register every application route on `cfg`.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use coursedesk::inbound::http::routes;
///
/// let app = App::new().configure(routes::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::home))
        .service(
            web::resource("/register")
                .route(web::get().to(auth::register_form))
                .route(web::post().to(auth::register)),
        )
        .service(
            web::resource("/login")
                .route(web::get().to(auth::login_form))
                .route(web::post().to(auth::login)),
        )
        .route("/logout", web::get().to(auth::logout))
        .route("/dashboard", web::get().to(pages::dashboard))
        .route("/course", web::get().to(courses::list_courses))
        .service(
            web::resource("/course/create")
                .route(web::get().to(courses::create_course_form))
                .route(web::post().to(courses::create_course)),
        )
        .route("/course/delete/{id}", web::get().to(courses::delete_course))
        .route("/health/ready", web::get().to(health::ready))
        .route("/health/live", web::get().to(health::live));
}
