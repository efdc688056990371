use std::collections::HashSet;

use super::diagnosis::{self, Severity};
use super::market::{self, Crop, Market, Trend};
use super::schemes::{CategoryFilter, SCHEMES, SchemeCategory};
use super::voice::{ResponseBucket, SAMPLE_QUERIES};

// =============================================================================
// diagnosis
// =============================================================================

#[test]
fn diagnosis_confidence_is_a_percentage() {
    let records = diagnosis::all();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.confidence <= 100));
}

#[test]
fn diagnosis_table_has_localized_names() {
    let records = diagnosis::all();
    assert_eq!(records[0].disease, "Late Blight");
    assert_eq!(records[0].severity, Severity::High);
    assert_eq!(records[1].disease, "Aphid Infestation");
    assert!(records.iter().all(|r| !r.localized_name.is_empty()));
}

// =============================================================================
// schemes
// =============================================================================

#[test]
fn scheme_ids_are_unique() {
    let ids: HashSet<_> = SCHEMES.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), SCHEMES.len());
}

#[test]
fn category_filter_parses_selector_values() {
    assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!("Irrigation".parse::<CategoryFilter>().unwrap(), CategoryFilter::Only(SchemeCategory::Irrigation));
    assert!("loans".parse::<CategoryFilter>().is_err());
}

#[test]
fn every_category_has_a_scheme() {
    for category in SchemeCategory::ALL {
        assert!(SCHEMES.iter().any(|s| s.category == category), "{category} has no scheme");
    }
}

// =============================================================================
// market
// =============================================================================

#[test]
fn trend_agrees_with_percent_change() {
    for record in market::price_table(Market::Bangalore) {
        assert_eq!(record.trend, Trend::from_change(record.percent_change), "{}", record.crop);
    }
}

#[test]
fn percent_change_is_rounded_to_one_decimal() {
    let table = market::price_table(Market::Bangalore);
    assert!((table[0].percent_change - 7.1).abs() < f64::EPSILON);
    assert!((table[1].percent_change - -6.7).abs() < f64::EPSILON);
    assert_eq!(table[2].percent_change, 0.0);
    assert_eq!(table[2].trend, Trend::Stable);
}

#[test]
fn zero_previous_price_is_stable() {
    let record = market::MarketPrice::new(Crop::Carrot, 10.0, 0.0, Market::Mysore);
    assert_eq!(record.percent_change, 0.0);
    assert_eq!(record.trend, Trend::Stable);
}

#[test]
fn price_table_carries_selected_market() {
    let table = market::price_table(Market::Hubli);
    assert!(table.iter().all(|r| r.market == "Hubli"));
}

#[test]
fn price_history_is_a_week() {
    let labels: Vec<_> = market::price_history().into_iter().map(|p| p.label).collect();
    assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
}

#[test]
fn selections_parse_from_values() {
    assert_eq!("onion".parse::<Crop>().unwrap(), Crop::Onion);
    assert_eq!("HUBLI".parse::<Market>().unwrap(), Market::Hubli);
    let err = "delhi".parse::<Market>().unwrap_err();
    assert_eq!(err.to_string(), "unknown market 'delhi'");
}

// =============================================================================
// voice
// =============================================================================

#[test]
fn sample_queries_cover_each_bucket() {
    let buckets: Vec<_> = SAMPLE_QUERIES.iter().map(|q| q.bucket).collect();
    assert_eq!(buckets, ResponseBucket::PRIORITY);
}
