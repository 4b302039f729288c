pub mod booking;
pub mod cards;
pub mod itinerary;
pub mod pages;
pub mod planner;
mod templates;

use handlebars::{html_escape, Handlebars, RenderError, TemplateError};
use serde::Serialize;

use crate::models::notice::Notice;

pub const RESULTS: &str = "results";
pub const GRID: &str = "grid";
pub const RECOMMENDATIONS: &str = "recommendations";
pub const ITINERARY: &str = "itinerary";
pub const DETAILED_ITINERARY: &str = "detailed_itinerary";
pub const STEP: &str = "step";
pub const BOOKING_FORM: &str = "booking_form";
pub const BOOKING_CONFIRMATION: &str = "booking_confirmation";
pub const TRIP_SEARCH: &str = "trip_search";
pub const DESTINATIONS: &str = "destinations";
pub const CONTINENT_OPTIONS: &str = "continent_options";
pub const UPLOAD_RESULT: &str = "upload_result";
pub const RECENT_UPLOAD: &str = "recent_upload";
pub const GALLERY: &str = "gallery";

/// A status line. Used on its own and embedded in other fragments.
pub fn notice_html(message: &str, level: &str) -> String {
    format!(
        r#"<div class="notice notice-{}" role="status">{}</div>"#,
        html_escape(level),
        html_escape(message)
    )
}

pub fn notice_fragment(notice: &Notice) -> String {
    notice_html(&notice.message, notice.level.as_str())
}

#[derive(Serialize)]
struct WithNotice<'a, T: Serialize> {
    #[serde(flatten)]
    view: &'a T,
    notice: Option<String>,
}

/// Compiled templates, shared by all workers.
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();

        handlebars.register_partial("price_lines", templates::PRICE_LINES)?;
        handlebars.register_partial("flight_card", templates::FLIGHT_CARD)?;
        handlebars.register_partial("hotel_card", templates::HOTEL_CARD)?;
        handlebars.register_partial("activity_card", templates::ACTIVITY_CARD)?;
        handlebars.register_partial("package_card", templates::PACKAGE_CARD)?;
        handlebars.register_partial("agent_card", templates::AGENT_CARD)?;
        handlebars.register_partial("destination_card", templates::DESTINATION_CARD)?;

        let pages = [
            (RESULTS, templates::RESULTS),
            (GRID, templates::GRID),
            (RECOMMENDATIONS, templates::RECOMMENDATIONS),
            (ITINERARY, templates::ITINERARY),
            (DETAILED_ITINERARY, templates::DETAILED_ITINERARY),
            (STEP, templates::STEP),
            (BOOKING_FORM, templates::BOOKING_FORM),
            (BOOKING_CONFIRMATION, templates::BOOKING_CONFIRMATION),
            (TRIP_SEARCH, templates::TRIP_SEARCH),
            (DESTINATIONS, templates::DESTINATIONS),
            (CONTINENT_OPTIONS, templates::CONTINENT_OPTIONS),
            (UPLOAD_RESULT, templates::UPLOAD_RESULT),
            (RECENT_UPLOAD, templates::RECENT_UPLOAD),
            (GALLERY, templates::GALLERY),
        ];
        for (name, source) in pages {
            handlebars.register_template_string(name, source)?;
        }

        Ok(Self { handlebars })
    }

    pub fn render<T: Serialize>(&self, name: &str, view: &T) -> Result<String, RenderError> {
        self.handlebars.render(name, view)
    }

    /// Renders `name` with a notice placed at the top of the fragment.
    pub fn render_with_notice<T: Serialize>(
        &self,
        name: &str,
        view: &T,
        notice: Option<&Notice>,
    ) -> Result<String, RenderError> {
        let framed = WithNotice {
            view,
            notice: notice.map(notice_fragment),
        };
        self.handlebars.render(name, &framed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::search::SearchKind;
    use crate::services::fallback;
    use crate::views::cards::ResultsView;

    #[test]
    fn test_notice_is_escaped() {
        let html = notice_html("<b>Found</b> 2", "success");
        assert!(html.contains("&lt;b&gt;Found&lt;/b&gt; 2"));
        assert!(html.contains("notice-success"));
    }

    #[test]
    fn test_templates_compile() {
        assert!(Renderer::new().is_ok());
    }

    #[test]
    fn test_results_fragment() {
        let renderer = Renderer::new().unwrap();
        let view = ResultsView::from(&fallback::mock_results(SearchKind::Hotels));
        let html = renderer
            .render_with_notice(RESULTS, &view, Some(&Notice::info("Found 2 hotel options! (mock data)")))
            .unwrap();
        assert!(html.contains("Le Grand Hotel Paris"));
        assert!(html.contains("Champs-Élysées, Paris"));
        assert!(html.contains("fa-swimming-pool"));
        assert!(html.contains("Found 2 hotel options! (mock data)"));
        assert!(html.contains("/book/hotels/h2"));
    }

    #[test]
    fn test_empty_results_fragment() {
        let renderer = Renderer::new().unwrap();
        let view = ResultsView::from(&crate::models::search::SearchResults::Agents(Vec::new()));
        let html = renderer.render(RESULTS, &view).unwrap();
        assert!(html.contains("No agents found"));
        assert!(html.contains("Try adjusting your search criteria."));
    }

    #[test]
    fn test_card_text_is_escaped() {
        let renderer = Renderer::new().unwrap();
        let activity = crate::models::listing::Activity {
            name: Some("<script>alert(1)</script>".to_string()),
            ..Default::default()
        };
        let view = ResultsView::from(&crate::models::search::SearchResults::Activities(vec![activity]));
        let html = renderer.render(RESULTS, &view).unwrap();
        assert!(!html.contains("<script>"));
    }
}
