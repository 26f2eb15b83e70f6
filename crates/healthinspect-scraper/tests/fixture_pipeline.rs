//! End-to-end pipeline tests against the stored King County results page.

use std::path::PathBuf;

use healthinspect_core::{ResultRecord, SortKey};
use healthinspect_scraper::{
    find_listings, load_fixture, parse_document, results_from_page, ResultOptions,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/inspection_page.html")
}

fn results(sort: Option<SortKey>, count: usize, reverse: bool) -> Vec<ResultRecord> {
    let page = load_fixture(&fixture_path()).expect("fixture should load");
    results_from_page(
        &page,
        &ResultOptions {
            sort,
            count,
            reverse,
        },
    )
    .expect("fixture should parse")
    .collect()
}

fn name(record: &ResultRecord) -> &str {
    &record.metadata.get("Business Name").expect("business name")[0]
}

#[test]
fn fixture_contains_four_listings_in_page_order() {
    let page = load_fixture(&fixture_path()).unwrap();
    let doc = parse_document(&page.body, &page.encoding).unwrap();
    let listings = find_listings(&doc.root_element());
    let ids: Vec<&str> = listings
        .iter()
        .filter_map(|el| el.value().attr("id"))
        .collect();
    assert_eq!(ids, ["PR0001001~", "PR0002002~", "PR0003003~", "PR0004004~"]);
}

#[test]
fn unsorted_results_keep_page_order() {
    let records = results(None, 10, false);
    let names: Vec<&str> = records.iter().map(name).collect();
    assert_eq!(
        names,
        [
            "HAPPY NOODLE HOUSE",
            "BLUE WATER TAVERN",
            "SPACE NEEDLE CAFE",
            "ROSE CITY DELI"
        ]
    );
}

#[test]
fn first_listing_metadata_and_scores() {
    let records = results(None, 1, false);
    assert_eq!(records.len(), 1);
    let noodle = &records[0];
    assert_eq!(
        noodle.metadata.get("Business Category").unwrap(),
        ["Seating 13-50 - Risk Category III"]
    );
    assert_eq!(
        noodle.metadata.get("Address").unwrap(),
        ["100 MERCER ST", "Seattle, WA 98109"]
    );
    assert_eq!(noodle.metadata.get("Phone").unwrap(), ["(206) 555-0101"]);
    assert_eq!(noodle.scores.total_inspections, 3);
    assert_eq!(noodle.scores.high_score, 20);
    assert!((noodle.scores.average_score - 10.0).abs() < f64::EPSILON);
}

#[test]
fn wrapped_label_and_blank_score_are_handled() {
    let records = results(None, 2, false);
    let tavern = &records[1];
    assert_eq!(name(tavern), "BLUE WATER TAVERN");
    assert_eq!(tavern.metadata.get("Phone").unwrap(), [""]);
    assert_eq!(tavern.scores.total_inspections, 2);
    assert_eq!(tavern.scores.high_score, 35);
    assert!((tavern.scores.average_score - 20.0).abs() < f64::EPSILON);
}

#[test]
fn malformed_listing_is_repaired() {
    let records = results(None, 3, false);
    let cafe = &records[2];
    assert_eq!(name(cafe), "SPACE NEEDLE CAFE");
    assert_eq!(
        cafe.metadata.get("Address").unwrap(),
        ["400 BROAD ST", "Seattle, WA 98109"]
    );
    assert_eq!(cafe.scores.total_inspections, 0);
    assert_eq!(cafe.scores.high_score, 0);
}

#[test]
fn sorts_by_high_score_ascending() {
    let records = results(Some(SortKey::HighScore), 5, false);
    let names: Vec<&str> = records.iter().map(name).collect();
    assert_eq!(
        names,
        [
            "SPACE NEEDLE CAFE",
            "HAPPY NOODLE HOUSE",
            "BLUE WATER TAVERN",
            "ROSE CITY DELI"
        ]
    );
}

#[test]
fn sorts_by_total_inspections_descending() {
    let records = results(Some(SortKey::TotalInspections), 5, true);
    let names: Vec<&str> = records.iter().map(name).collect();
    assert_eq!(
        names,
        [
            "HAPPY NOODLE HOUSE",
            "BLUE WATER TAVERN",
            "ROSE CITY DELI",
            "SPACE NEEDLE CAFE"
        ]
    );
}

#[test]
fn count_limits_listings_before_sorting() {
    let records = results(Some(SortKey::AverageScore), 2, true);
    let names: Vec<&str> = records.iter().map(name).collect();
    assert_eq!(names, ["BLUE WATER TAVERN", "HAPPY NOODLE HOUSE"]);
}
