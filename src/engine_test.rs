use super::*;
use crate::data::voice::SAMPLE_QUERIES;
use tokio::time::Instant;

fn engine_with_seed(seed: u64) -> ResponseEngine {
    ResponseEngine::new(&DashboardConfig { seed: Some(seed), ..DashboardConfig::default() })
}

fn leaf() -> ImageRef {
    ImageRef::new("leaf.jpg", "image/jpeg", b"jpeg".to_vec())
}

// =============================================================================
// diagnose
// =============================================================================

#[tokio::test(start_paused = true)]
async fn diagnose_reports_every_step_in_order() {
    let engine = engine_with_seed(7);
    let image = leaf();
    let mut seen = Vec::new();

    let record = engine.diagnose(Some(&image), |p| seen.push(p)).await.unwrap();

    assert_eq!(seen, [20, 40, 60, 80, 100]);
    assert!(crate::data::diagnosis::all().contains(&record));
}

#[tokio::test(start_paused = true)]
async fn diagnose_suspends_once_per_step() {
    let engine = engine_with_seed(7);
    let image = leaf();
    let start = Instant::now();
    let mut stamps = Vec::new();

    engine
        .diagnose(Some(&image), |_| stamps.push(start.elapsed()))
        .await
        .unwrap();

    let expected: Vec<_> = (1..=5).map(|i| Duration::from_millis(800 * i)).collect();
    assert_eq!(stamps, expected);
}

#[tokio::test(start_paused = true)]
async fn diagnose_without_image_fails_immediately() {
    let engine = engine_with_seed(7);
    let start = Instant::now();
    let mut called = false;

    let err = engine.diagnose(None, |_| called = true).await.unwrap_err();

    assert_eq!(err, AnalysisError::InputMissing { input: "image" });
    assert_eq!(err.error_code(), "E_INPUT_MISSING");
    assert!(!called);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn same_seed_picks_same_diagnosis() {
    let image = leaf();
    let a = engine_with_seed(99).diagnose(Some(&image), |_| {}).await.unwrap();
    let b = engine_with_seed(99).diagnose(Some(&image), |_| {}).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test(start_paused = true)]
async fn every_diagnosis_is_reachable() {
    let engine = engine_with_seed(1);
    let image = leaf();
    let mut diseases = std::collections::HashSet::new();
    for _ in 0..64 {
        diseases.insert(engine.diagnose(Some(&image), |_| {}).await.unwrap().disease);
    }
    assert_eq!(diseases.len(), DIAGNOSES.len());
}

// =============================================================================
// route_query
// =============================================================================

#[test]
fn price_keyword_routes_to_market() {
    assert_eq!(route_query("What is the PRICE of onions today?"), ResponseBucket::Market);
    assert_eq!(route_query("ಈರುಳ್ಳಿ ಬೆಲೆ"), ResponseBucket::Market);
}

#[test]
fn spot_and_disease_route_to_diagnosis() {
    assert_eq!(route_query("Brown Spots everywhere"), ResponseBucket::Diagnosis);
    assert_eq!(route_query("is this a disease?"), ResponseBucket::Diagnosis);
}

#[test]
fn subsidy_and_scheme_route_to_schemes() {
    assert_eq!(route_query("any Subsidy for tractors"), ResponseBucket::Schemes);
    assert_eq!(route_query("government scheme list"), ResponseBucket::Schemes);
}

#[test]
fn market_wins_over_later_buckets() {
    assert_eq!(route_query("price of disease spray and subsidy"), ResponseBucket::Market);
    assert_eq!(route_query("disease scheme"), ResponseBucket::Diagnosis);
}

#[test]
fn unmatched_query_defaults_to_market() {
    assert_eq!(route_query("hello there"), ResponseBucket::Market);
}

#[test]
fn sample_queries_route_to_their_bucket_in_both_languages() {
    for sample in SAMPLE_QUERIES {
        assert_eq!(route_query(sample.text(Language::En)), sample.bucket, "{:?}", sample.text.en);
        assert_eq!(route_query(sample.text(Language::Kn)), sample.bucket, "{:?}", sample.text.kn);
    }
}

// =============================================================================
// answer
// =============================================================================

#[tokio::test(start_paused = true)]
async fn answer_is_localized_and_delayed() {
    let engine = engine_with_seed(3);
    let start = Instant::now();

    let reply = engine.answer("drip irrigation subsidy", Language::Kn).await.unwrap();

    assert_eq!(reply, ResponseBucket::Schemes.reply().kn);
    assert_eq!(start.elapsed(), Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn answer_rejects_blank_query_without_delay() {
    let engine = engine_with_seed(3);
    let start = Instant::now();

    let err = engine.answer("   ", Language::En).await.unwrap_err();

    assert_eq!(err, AnalysisError::InputMissing { input: "query" });
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn price_routing_is_seed_independent() {
    for seed in [0, 1, 2, u64::MAX] {
        let reply = engine_with_seed(seed).answer("tomato price", Language::En).await.unwrap();
        assert_eq!(reply, ResponseBucket::Market.reply().en);
    }
}

// =============================================================================
// market_prices
// =============================================================================

#[tokio::test(start_paused = true)]
async fn market_prices_rebuilds_after_delay() {
    let engine = engine_with_seed(5);
    let start = Instant::now();

    let (prices, history) = engine.market_prices(Market::Mysore).await;

    assert_eq!(start.elapsed(), Duration::from_millis(1500));
    assert_eq!(prices.len(), 3);
    assert!(prices.iter().all(|p| p.market == "Mysore"));
    assert_eq!(history.len(), 7);
}
