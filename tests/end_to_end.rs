use dining_map::data::location::{Coordinates, Location};
use dining_map::geo::distance::{distance, walk_minutes};
use dining_map::publish::publisher::{Publisher, ViewerOutcome};
use dining_map::render::builder::build;
use dining_map::{LocationRegistry, MapConfig};

fn single_location_registry() -> LocationRegistry {
    LocationRegistry::new(vec![Location::new(
        "dietrick-hall",
        "Dietrick Hall (D2)",
        Coordinates::new(37.22475, -80.42091),
        "All-you-care-to-eat dining hall at Dietrick",
        "Mon-Fri: 7AM-9PM, Sat-Sun: 9AM-8PM",
    )])
    .unwrap()
}

#[test]
fn test_single_location_document() {
    let artifact = build(&single_location_registry(), &MapConfig::default());
    let html = artifact.to_html();

    assert!(html.contains("Dietrick Hall (D2)"));
    assert!(html.contains(r#"<div id="label-dietrick-hall" class="location-label">Dietrick Hall</div>"#));

    // maud escapes `&` inside attribute values
    assert!(html.contains(
        "https://www.google.com/maps/dir/?api=1&amp;destination=37.22475,-80.42091&amp;travelmode=walking"
    ));
    assert!(html.contains("http://maps.apple.com/?daddr=37.22475,-80.42091&amp;dirflg=w&amp;t=m"));
    assert!(html.contains("https://www.waze.com/ul?ll=37.22475%2C-80.42091&amp;navigate=yes&amp;zoom=17"));

    assert_eq!(html.matches(r#"class="distance-placeholder""#).count(), 1);
}

#[test]
fn test_document_controls_and_branding() {
    let html = build(&single_location_registry(), &MapConfig::default()).to_html();

    for layer in ["Light Mode", "Dark Mode", "Satellite View"] {
        assert!(html.contains(layer), "missing tile layer {}", layer);
    }
    assert!(html.contains("L.control.fullscreen"));
    assert!(html.contains("L.control.locate"));
    assert!(html.contains(r#"<div class="branding"><span>🦃 Virginia Tech Dining</span></div>"#));
}

#[test]
fn test_reserved_characters_do_not_break_markup() {
    let registry = LocationRegistry::new(vec![Location::new(
        "grill",
        "Tom & Jerry's <Grill> (TJ)",
        Coordinates::new(37.0, -80.0),
        "</script><b>bold</b>",
        "24/7",
    )])
    .unwrap();
    let html = build(&registry, &MapConfig::default()).to_html();

    assert!(html.contains("Tom &amp; Jerry's &lt;Grill&gt; (TJ)"));
    assert!(html.contains("&lt;/script&gt;&lt;b&gt;bold&lt;/b&gt;"));
    // the only closing script tags are the ones the page itself emits
    assert_eq!(html.matches("</script>").count(), 5);
}

#[test]
fn test_publish_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let config = MapConfig {
        output_dir: tmp.path().join("VT_Dining_Maps"),
        open_viewer: false,
        ..MapConfig::default()
    };
    let registry = LocationRegistry::vt_dining_halls().unwrap();

    let result = Publisher::from_config(&config)
        .publish(&build(&registry, &config))
        .unwrap();

    assert!(matches!(result.viewer, ViewerOutcome::Skipped));
    let file_name = result.path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("VT_Dining_Halls_"));
    assert!(file_name.ends_with(".html"));
    // VT_Dining_Halls_YYYYMMDD_HHMMSS.html
    assert_eq!(file_name.len(), "VT_Dining_Halls_".len() + 15 + ".html".len());

    let written = std::fs::read_to_string(&result.path).unwrap();
    for location in &registry {
        assert!(written.contains(location.get_key()));
    }
}

#[test]
fn test_native_estimates_for_registry() {
    let registry = LocationRegistry::vt_dining_halls().unwrap();
    let dietrick = registry.get_by_key("dietrick-hall").unwrap().get_coordinates();
    let perry = registry.get_by_key("perry-place").unwrap().get_coordinates();

    let d = distance(dietrick, perry);
    assert!((d - 712.25).abs() < 1.0, "got {}", d);
    assert_eq!(walk_minutes(d), 9);
}
