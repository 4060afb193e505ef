//! Wiring of repositories and services into [`HttpState`].

use std::sync::Arc;

use crate::domain::ports::{CourseRepository, StudentRepository};
use crate::domain::{CourseCatalogService, StudentAccountService};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::HtmlViews;
use crate::outbound::memory::{InMemoryCourseRepository, InMemoryStudentRepository};
use crate::outbound::persistence::{DbPool, DieselCourseRepository, DieselStudentRepository};
use crate::outbound::security::BcryptPasswordHasher;

/// Build handler state over the given repositories.
pub fn http_state_from_repositories<S, C>(
    students: Arc<S>,
    courses: Arc<C>,
    hasher: BcryptPasswordHasher,
) -> HttpState
where
    S: StudentRepository + 'static,
    C: CourseRepository + 'static,
{
    HttpState::new(
        Arc::new(StudentAccountService::new(
            Arc::clone(&students),
            Arc::new(hasher),
        )),
        Arc::new(CourseCatalogService::new(courses, students)),
        Arc::new(HtmlViews),
    )
}

/// Build handler state backed by SQLite when a pool is present, otherwise by
/// fresh in-memory repositories.
pub(crate) fn build_http_state(pool: Option<&DbPool>, hasher: BcryptPasswordHasher) -> HttpState {
    match pool {
        Some(pool) => http_state_from_repositories(
            Arc::new(DieselStudentRepository::new(pool.clone())),
            Arc::new(DieselCourseRepository::new(pool.clone())),
            hasher,
        ),
        None => http_state_from_repositories(
            Arc::new(InMemoryStudentRepository::new()),
            Arc::new(InMemoryCourseRepository::new()),
            hasher,
        ),
    }
}
