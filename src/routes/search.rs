use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::models::search::{SearchForm, SearchKind};
use crate::routes::html;
use crate::services::travel_service::TravelService;
use crate::views::cards::ResultsView;
use crate::views::{self, Renderer};

/// One search tab. Backend failures still render the tab's mock list.
pub async fn search(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    kind: web::Path<String>,
    form: web::Form<SearchForm>,
) -> Result<HttpResponse, AppError> {
    let kind: SearchKind = kind.parse()?;
    let outcome = service.search(kind, &form).await?;
    log::info!(
        "{} search returned {} results from {:?}",
        kind,
        outcome.results.len(),
        outcome.source
    );

    let view = ResultsView::from(&outcome.results);
    let body = renderer.render_with_notice(views::RESULTS, &view, Some(&outcome.notice))?;
    Ok(html(body))
}
