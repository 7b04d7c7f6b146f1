//! XHTML output for the listing and its filter controls.
//!
//! Hidden elements carry the `hidden` attribute; that is the only show/hide
//! mechanism used. Expanded sections carry the `is-open` class on trigger,
//! icon and content alike.

use board_core::{Axis, DisplayDocument, FilterControlView, JobEntry, Section, ShortcutView};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub const NO_RESULTS_TEXT: &str = "No results found.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("failed to write markup: {0}")]
pub struct MarkupError(String);

struct Html {
    writer: Writer<Vec<u8>>,
}

impl Html {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<(), MarkupError> {
        let mut start = BytesStart::new(tag);
        for attr in attrs {
            start.push_attribute(*attr);
        }
        self.event(Event::Start(start))
    }

    fn close(&mut self, tag: &str) -> Result<(), MarkupError> {
        self.event(Event::End(BytesEnd::new(tag)))
    }

    fn text_element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> Result<(), MarkupError> {
        self.open(tag, attrs)?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.close(tag)
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), MarkupError> {
        self.writer
            .write_event(event)
            .map_err(|err| MarkupError(err.to_string()))
    }

    fn finish(self) -> Result<String, MarkupError> {
        String::from_utf8(self.writer.into_inner()).map_err(|err| MarkupError(err.to_string()))
    }
}

fn with_hidden<'a>(mut attrs: Vec<(&'a str, &'a str)>, visible: bool) -> Vec<(&'a str, &'a str)> {
    if !visible {
        attrs.push(("hidden", "hidden"));
    }
    attrs
}

fn open_class(base: &str, expanded: bool) -> String {
    if expanded {
        format!("{base} is-open")
    } else {
        base.to_string()
    }
}

/// Writes the listing container content: all sections plus the empty state.
pub fn render_html(listing: &DisplayDocument) -> Result<String, MarkupError> {
    let mut html = Html::new();
    html.open("div", &[("class", "job-listing")])?;
    for section in listing.sections() {
        write_section(&mut html, section)?;
    }
    let attrs = with_hidden(vec![("class", "no-results")], listing.no_results_visible());
    html.open("div", &attrs)?;
    html.text_element("div", &[], NO_RESULTS_TEXT)?;
    html.close("div")?;
    html.close("div")?;
    html.finish()
}

fn write_section(html: &mut Html, section: &Section) -> Result<(), MarkupError> {
    let index = section.id.0.to_string();
    let trigger_class = open_class("accordion-item-trigger", section.expanded);
    let icon_class = open_class("accordion-icon", section.expanded);
    let content_class = open_class("accordion-item-content", section.expanded);

    let attrs = with_hidden(
        vec![("class", "accordion-item"), ("data-section", index.as_str())],
        section.visible,
    );
    html.open("div", &attrs)?;

    html.open("div", &[("class", trigger_class.as_str())])?;
    html.text_element("h3", &[("class", "accordion-title")], &section.category)?;
    html.text_element("div", &[("class", "quantity")], &section.count_text)?;
    html.open("div", &[("class", icon_class.as_str())])?;
    html.close("div")?;
    html.close("div")?;

    html.open("div", &[("class", content_class.as_str())])?;
    for job in &section.jobs {
        write_job(html, job)?;
    }
    html.close("div")?;

    html.close("div")
}

fn write_job(html: &mut Html, job: &JobEntry) -> Result<(), MarkupError> {
    let attrs = with_hidden(
        vec![
            ("class", "accordion-list"),
            ("href", job.detail_url.as_str()),
            ("data-job-id", job.id.as_str()),
        ],
        job.visible,
    );
    html.open("a", &attrs)?;
    html.text_element("h4", &[("class", "job-title")], &job.title)?;
    html.open("div", &[("class", "job-attributes")])?;
    for axis in Axis::ALL {
        let data = format!("data-{}", axis.name());
        html.text_element("span", &[(data.as_str(), job.value(axis))], job.value(axis))?;
    }
    html.close("div")?;
    html.close("a")
}

/// Writes one filter `<select>`: an empty "all" option followed by the values.
pub fn render_filter_control(control: &FilterControlView) -> Result<String, MarkupError> {
    let mut html = Html::new();
    let name = format!("{}-filter", control.axis.name());
    html.open("select", &[("name", name.as_str())])?;

    let all = option_attrs("", control.selected.is_empty());
    html.text_element("option", &all, "All")?;
    for value in &control.options {
        let attrs = option_attrs(value, *value == control.selected);
        html.text_element("option", &attrs, value)?;
    }

    html.close("select")?;
    html.finish()
}

/// Writes the quick-filter buttons; blocked shortcuts are marked disabled.
pub fn render_shortcuts(shortcuts: &[ShortcutView]) -> Result<String, MarkupError> {
    let mut html = Html::new();
    html.open("div", &[("class", "city-filters")])?;
    for shortcut in shortcuts {
        let mut attrs = vec![
            ("class", "city-filter"),
            ("data-shortcut", shortcut.name.as_str()),
            ("data-location", shortcut.location.as_str()),
        ];
        if !shortcut.enabled {
            attrs.push(("disabled", "disabled"));
        }
        html.text_element("button", &attrs, &shortcut.location)?;
    }
    html.close("div")?;
    html.finish()
}

fn option_attrs(value: &str, selected: bool) -> Vec<(&str, &str)> {
    let mut attrs = vec![("value", value)];
    if selected {
        attrs.push(("selected", "selected"));
    }
    attrs
}
