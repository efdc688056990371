use super::*;
use crate::notify;

fn dashboard() -> (Dashboard, notify::NotificationFeed) {
    let (notifier, feed) = notify::channel();
    (Dashboard::new(&DashboardConfig { seed: Some(5), ..DashboardConfig::default() }, notifier), feed)
}

#[test]
fn opens_on_diagnosis_tab() {
    let (mut dash, _feed) = dashboard();
    assert_eq!(dash.active_tab(), Tab::Diagnosis);
    dash.select_tab(Tab::Voice);
    assert_eq!(dash.active_tab(), Tab::Voice);
}

#[test]
fn tabs_parse_case_insensitively() {
    assert_eq!("market".parse::<Tab>().unwrap(), Tab::Market);
    assert_eq!("SCHEMES".parse::<Tab>().unwrap(), Tab::Schemes);
    assert!("weather".parse::<Tab>().is_err());
}

#[test]
fn header_and_voice_panel_share_listening_flag() {
    let (dash, mut feed) = dashboard();
    assert_eq!(dash.header().mic_label(), "Start Speaking");

    assert!(dash.header().toggle_voice());
    assert!(dash.voice.is_listening());
    assert_eq!(dash.header().mic_label(), "Stop Listening");

    assert!(!dash.voice.toggle_listening());
    assert!(!dash.voice.snapshot().listening);
    assert_eq!(dash.header().mic_label(), "Start Speaking");

    let titles: Vec<_> = feed.drain().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, ["Voice Assistant Activated", "Voice Assistant Deactivated"]);
}

#[tokio::test(start_paused = true)]
async fn panels_share_one_notification_feed() {
    let (dash, mut feed) = dashboard();

    assert!(dash.diagnosis.run_analysis().await.is_err());
    dash.voice.ask("scheme for tractors").await.unwrap();

    let titles: Vec<_> = feed.drain().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, ["No Image Selected", "Voice Query Processed"]);
}

#[test]
fn headline_stats_are_fixed() {
    let stats = Dashboard::headline_stats();
    assert_eq!(stats.len(), 4);
    assert_eq!(stats[1].value, "₹45/kg");
}
