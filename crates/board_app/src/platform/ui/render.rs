use board_core::{AppViewModel, LoadPhase};
use board_engine::{render_filter_control, render_html, render_shortcuts, MarkupError};

/// Composes the widget's page fragment from the current view.
///
/// Until the feed is ready (or after it failed) the container stays empty:
/// no listing and no filters.
pub fn render_page(view: &AppViewModel) -> Result<String, MarkupError> {
    let mut page = String::new();

    match (view.phase, view.listing.as_ref()) {
        (LoadPhase::Ready, Some(listing)) => {
            page.push_str("<form class=\"job-filters\">");
            for control in &view.controls {
                page.push_str(&render_filter_control(control)?);
            }
            page.push_str("</form>");
            if !view.shortcuts.is_empty() {
                page.push_str(&render_shortcuts(&view.shortcuts)?);
            }
            page.push_str(&render_html(listing)?);
        }
        _ => page.push_str("<div class=\"job-listing\"></div>"),
    }

    Ok(page)
}
