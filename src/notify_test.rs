use super::*;

#[test]
fn notifications_arrive_in_order() {
    let (notifier, mut feed) = channel();
    notifier.notify("First", "one");
    notifier.alert("Second", "two");

    let got = feed.drain();
    assert_eq!(got.len(), 2);
    assert_eq!(got[0].title, "First");
    assert_eq!(got[0].variant, Variant::Default);
    assert_eq!(got[1].title, "Second");
    assert_eq!(got[1].variant, Variant::Destructive);
}

#[test]
fn send_after_feed_dropped_is_silent() {
    let (notifier, feed) = channel();
    drop(feed);
    notifier.notify("Nobody", "listening");
}

#[tokio::test]
async fn next_returns_none_when_notifiers_dropped() {
    let (notifier, mut feed) = channel();
    notifier.notify("Only", "one");
    drop(notifier);

    assert_eq!(feed.next().await.map(|n| n.title), Some("Only".to_string()));
    assert!(feed.next().await.is_none());
}
