use super::*;
use crate::notify;

#[test]
fn starts_idle() {
    let (notifier, _feed) = notify::channel();
    assert!(!ListeningFlag::new(notifier).is_listening());
}

#[test]
fn toggle_flips_and_announces() {
    let (notifier, mut feed) = notify::channel();
    let flag = ListeningFlag::new(notifier);

    assert!(flag.toggle());
    assert!(flag.is_listening());
    assert!(!flag.toggle());
    assert!(!flag.is_listening());

    let titles: Vec<_> = feed.drain().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, ["Voice Assistant Activated", "Voice Assistant Deactivated"]);
}

#[test]
fn clones_share_one_value() {
    let (notifier, _feed) = notify::channel();
    let header = ListeningFlag::new(notifier);
    let voice_panel = header.clone();

    header.toggle();
    assert!(voice_panel.is_listening());
    voice_panel.toggle();
    assert!(!header.is_listening());
}
