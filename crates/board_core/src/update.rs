use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => match state.begin_loading() {
            Some(url) => vec![Effect::FetchFeed { url }],
            None => Vec::new(),
        },
        Msg::FeedLoaded { extraction } => {
            let dropped = extraction.dropped;
            match state.install(extraction) {
                Some((sections, jobs)) => vec![Effect::ListingReady {
                    sections,
                    jobs,
                    dropped,
                }],
                None => Vec::new(),
            }
        }
        Msg::FeedFailed { message } => {
            if state.fail(&message) {
                vec![Effect::ReportFailure { message }]
            } else {
                Vec::new()
            }
        }
        Msg::FilterChanged { axis, value } => {
            state.change_filter(axis, &value);
            Vec::new()
        }
        Msg::SectionToggled { section } => {
            state.toggle_section(section);
            Vec::new()
        }
        Msg::ShortcutClicked { name } => {
            state.click_shortcut(&name);
            Vec::new()
        }
    };

    (state, effects)
}
