use std::time::Duration;

use super::*;
use crate::config::DashboardConfig;

fn panel() -> MarketPanel {
    MarketPanel::new(Arc::new(ResponseEngine::new(&DashboardConfig { seed: Some(1), ..DashboardConfig::default() })))
}

#[tokio::test(start_paused = true)]
async fn mount_loads_default_selection() {
    let panel = panel();
    assert!(panel.snapshot().snapshot.is_none());

    let snap = panel.mount().await;

    let state = panel.snapshot();
    assert_eq!(state.crop, Crop::Tomato);
    assert_eq!(state.market, Market::Bangalore);
    assert!(!state.loading);
    assert_eq!(snap.market, Market::Bangalore);
    assert_eq!(snap.generation, 1);
}

#[tokio::test(start_paused = true)]
async fn onion_at_hubli_shows_three_records_and_a_week() {
    let panel = panel();
    panel.mount().await;
    panel.select_crop(Crop::Onion).await.unwrap();
    panel.select_market(Market::Hubli).await.unwrap();

    let snap = panel.refresh().await;

    let crops: Vec<_> = snap.prices.iter().map(|p| p.crop.as_str()).collect();
    assert_eq!(crops, ["Tomato", "Onion", "Potato"]);
    let labels: Vec<_> = snap.history.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    assert_eq!(snap.market, Market::Hubli);
}

#[tokio::test(start_paused = true)]
async fn refresh_replaces_everything() {
    let panel = panel();
    let before = panel.mount().await;

    let after = panel.refresh().await;

    assert!(!Arc::ptr_eq(&before, &after));
    assert!(after.generation > before.generation);
    for (old, new) in before.prices.iter().zip(&after.prices) {
        assert!(!std::ptr::eq(old, new));
    }
    assert!(!std::ptr::eq(before.history.as_ptr(), after.history.as_ptr()));
    let current = panel.snapshot().snapshot.unwrap();
    assert!(Arc::ptr_eq(&current, &after));
}

#[tokio::test(start_paused = true)]
async fn loading_is_set_while_refreshing() {
    let panel = panel();
    let task = tokio::spawn({
        let panel = panel.clone();
        async move { panel.refresh().await }
    });

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(panel.snapshot().loading);

    task.await.unwrap();
    assert!(!panel.snapshot().loading);
}

#[tokio::test(start_paused = true)]
async fn unchanged_selection_does_not_refresh() {
    let panel = panel();
    panel.mount().await;

    let start = tokio::time::Instant::now();
    assert!(panel.select_crop(Crop::Tomato).await.is_none());
    assert!(panel.select_market(Market::Bangalore).await.is_none());
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn latest_issued_refresh_wins() {
    let panel = panel();
    let first = tokio::spawn({
        let panel = panel.clone();
        async move { panel.refresh().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    let second = panel.select_market(Market::Belgaum).await.unwrap();
    let first = first.await.unwrap();

    assert_eq!(first.generation, 1);
    assert_eq!(second.generation, 2);
    let state = panel.snapshot();
    assert!(!state.loading);
    assert_eq!(state.snapshot.unwrap().market, Market::Belgaum);
}

#[test]
fn insight_follows_trend() {
    let snap = MarketSnapshot {
        generation: 1,
        market: Market::Bangalore,
        prices: crate::data::market::price_table(Market::Bangalore),
        history: crate::data::market::price_history(),
    };

    assert!(snap.insight(Crop::Tomato).unwrap().contains("7.1% higher"));
    assert!(snap.insight(Crop::Onion).unwrap().contains("6.7% lower"));
    assert!(snap.insight(Crop::Potato).unwrap().contains("steady"));
    assert!(snap.insight(Crop::Carrot).is_none());
    assert_eq!(snap.price_range(), Some((38.0, 45.0)));
}

#[tokio::test(start_paused = true)]
async fn load_sets_both_selections_with_one_regeneration() {
    let panel = panel();
    let start = tokio::time::Instant::now();

    let snap = panel.load(Crop::Onion, Market::Hubli).await;

    assert_eq!(start.elapsed(), Duration::from_millis(1500));
    assert_eq!(snap.generation, 1);
    assert_eq!(snap.market, Market::Hubli);
    let state = panel.snapshot();
    assert_eq!(state.crop, Crop::Onion);
    assert_eq!(state.market, Market::Hubli);
    assert!(!state.loading);
}
