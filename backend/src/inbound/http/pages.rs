//! Home and dashboard pages.

use actix_web::{HttpResponse, web};

use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, html};

/// Public landing page.
pub async fn home(state: web::Data<HttpState>) -> HttpResponse {
    html(state.views.home())
}

/// Course and student totals. Login required.
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let actor = session.require_student()?;
    let stats = state.catalog.dashboard_stats(actor).await?;
    Ok(html(state.views.dashboard(&stats)))
}
