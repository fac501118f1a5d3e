/// Element id of the results column.
pub const RESULTS_SECTION_ID: &str = "results-section";

/// Smooth-scroll the results column into view, if it is mounted.
pub fn scroll_to_results() {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(section) = doc.get_element_by_id(RESULTS_SECTION_ID) {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
