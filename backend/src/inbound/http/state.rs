//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` so they depend only on domain
//! ports and the view renderer, never on a concrete store.

use std::sync::Arc;

use crate::domain::ports::{AccountService, CourseCatalog};
use crate::inbound::http::views::ViewRenderer;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountService>,
    pub catalog: Arc<dyn CourseCatalog>,
    pub views: Arc<dyn ViewRenderer>,
}

impl HttpState {
    /// Bundle the driving ports and renderer.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use coursedesk::domain::{CourseCatalogService, StudentAccountService};
    /// use coursedesk::inbound::http::state::HttpState;
    /// use coursedesk::inbound::http::views::HtmlViews;
    /// use coursedesk::outbound::memory::{InMemoryCourseRepository, InMemoryStudentRepository};
    /// use coursedesk::outbound::security::BcryptPasswordHasher;
    ///
    /// let students = Arc::new(InMemoryStudentRepository::new());
    /// let courses = Arc::new(InMemoryCourseRepository::new());
    /// let state = HttpState::new(
    ///     Arc::new(StudentAccountService::new(
    ///         students.clone(),
    ///         Arc::new(BcryptPasswordHasher::default()),
    ///     )),
    ///     Arc::new(CourseCatalogService::new(courses, students)),
    ///     Arc::new(HtmlViews),
    /// );
    /// # let _ = state;
    /// ```
    pub fn new(
        accounts: Arc<dyn AccountService>,
        catalog: Arc<dyn CourseCatalog>,
        views: Arc<dyn ViewRenderer>,
    ) -> Self {
        Self {
            accounts,
            catalog,
            views,
        }
    }
}
