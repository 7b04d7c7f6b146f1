#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page finished loading; the widget may start its single fetch.
    Started,
    /// Engine delivered the grouped feed.
    FeedLoaded { extraction: crate::Extraction },
    /// Engine could not fetch or parse the feed.
    FeedFailed { message: String },
    /// User picked a value in one of the filter selects. Blank clears it.
    FilterChanged { axis: crate::Axis, value: String },
    /// User clicked a section's accordion trigger.
    SectionToggled { section: crate::SectionId },
    /// User clicked a quick-filter button.
    ShortcutClicked { name: String },
}
