use board_core::{
    render_listing, Axes, Axis, CategoryMap, FilterOptionSet, JobRecord, LinkTemplate,
};
use pretty_assertions::assert_eq;

fn job(id: &str, category: &str, kind: &str, location: &str) -> JobRecord {
    JobRecord::new(Some(id), Some("Engineer"), Some(category), Some(kind), Some(location)).unwrap()
}

fn map() -> CategoryMap {
    vec![
        job("1", "Sales", "Full-time", "Munich"),
        job("2", "Engineering", "Part-time", "Paris"),
        job("3", "Sales", "Full-time", "Munich"),
        job("4", "Engineering", "Full-time", "Chicago"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn options_are_distinct_in_discovery_order() {
    let options = FilterOptionSet::build(&map());

    assert_eq!(options.categories, vec!["Sales", "Engineering"]);
    assert_eq!(options.employment_types, vec!["Full-time", "Part-time"]);
    assert_eq!(options.locations, vec!["Munich", "Paris", "Chicago"]);
}

#[test]
fn options_for_missing_controls_are_skipped() {
    let present = Axes {
        category: false,
        ..Axes::all()
    };
    let options = FilterOptionSet::build(&map()).restricted_to(present);

    assert!(options.for_axis(Axis::Category).is_empty());
    assert_eq!(options.for_axis(Axis::Location).len(), 3);
}

#[test]
fn empty_map_yields_empty_options_and_listing() {
    let map = CategoryMap::new();
    let options = FilterOptionSet::build(&map);
    assert_eq!(options, FilterOptionSet::default());

    let links = LinkTemplate::new("https://acme.jobs.example.com", "en", "en").unwrap();
    let doc = render_listing(&map, &links);
    assert!(doc.sections().is_empty());
    assert!(!doc.no_results_visible());
}

#[test]
fn listing_follows_map_order_and_links_jobs() {
    let links = LinkTemplate::new("https://acme.jobs.example.com", "de", "en").unwrap();
    let doc = render_listing(&map(), &links);

    let layout: Vec<(String, Vec<String>)> = doc
        .sections()
        .iter()
        .map(|s| (s.category.clone(), s.jobs.iter().map(|j| j.id.clone()).collect()))
        .collect();
    assert_eq!(
        layout,
        vec![
            ("Sales".to_string(), vec!["1".to_string(), "3".to_string()]),
            ("Engineering".to_string(), vec!["2".to_string(), "4".to_string()]),
        ]
    );

    let first = &doc.sections()[0];
    assert_eq!(first.count_text, "2 Jobs");
    assert!(first.visible);
    assert!(!first.expanded);
    assert_eq!(
        first.jobs[0].detail_url,
        "https://acme.jobs.example.com/job/1?language=de&display=en"
    );
    assert_eq!(first.jobs[0].value(Axis::Location), "Munich");
    assert_eq!(first.jobs[0].value(Axis::Category), "Sales");
    assert!(!doc.no_results_visible());
}
