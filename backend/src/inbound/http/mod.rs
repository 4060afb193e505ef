//! HTTP inbound adapter serving the web pages and form endpoints.

pub mod auth;
pub mod courses;
pub mod error;
pub mod health;
pub mod pages;
pub mod routes;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

use actix_web::HttpResponse;
use actix_web::http::header;

pub use error::ApiResult;

/// `200 OK` with an HTML body.
pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body)
}

/// `302 Found` pointing at `location`.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
