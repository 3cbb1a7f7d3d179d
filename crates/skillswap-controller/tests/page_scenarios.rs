//! End-to-end page scenarios driven through the runtime

use skillswap_controller::{Controller, Runtime, Timings};
use skillswap_store::ListingStore;
use skillswap_types::{AuthMode, ListingId, NotificationPhase, Severity, UiEvent};
use skillswap_view::{html, PageView, RecordingSurface};
use std::time::Duration;

fn runtime() -> Runtime<RecordingSurface> {
    let store = ListingStore::with_default_seed().unwrap();
    let controller = Controller::new(store, Timings::default());
    Runtime::start(controller, RecordingSurface::new()).unwrap()
}

fn last_frame(runtime: &Runtime<RecordingSurface>) -> PageView {
    runtime.surface().last().cloned().unwrap()
}

fn card_ids(frame: &PageView) -> Vec<u32> {
    frame.listings.cards().iter().map(|c| c.id.get()).collect()
}

#[tokio::test(start_paused = true)]
async fn test_initial_frame_lists_all_listings() {
    let rt = runtime();
    assert_eq!(rt.surface().len(), 1);
    assert_eq!(card_ids(&last_frame(&rt)), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test(start_paused = true)]
async fn test_search_guitar() {
    let mut rt = runtime();
    rt.dispatch(UiEvent::SearchChanged("guitar".into())).unwrap();
    let frame = last_frame(&rt);
    assert_eq!(card_ids(&frame), vec![2]);
    assert_eq!(frame.listings.cards()[0].title, "Guitar Lessons");
}

#[tokio::test(start_paused = true)]
async fn test_category_arts() {
    let mut rt = runtime();
    rt.dispatch(UiEvent::CategoryChanged("arts".into())).unwrap();
    assert_eq!(card_ids(&last_frame(&rt)), vec![5, 6]);
}

#[tokio::test(start_paused = true)]
async fn test_no_results_frame() {
    let mut rt = runtime();
    rt.dispatch(UiEvent::SearchChanged("underwater basket weaving".into()))
        .unwrap();
    let frame = last_frame(&rt);
    assert!(frame.listings.is_empty());

    let markup = html::render_listings(&frame.listings);
    assert_eq!(markup.matches("class=\"no-results\"").count(), 1);
    assert_eq!(markup.matches("class=\"skill-card\"").count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_save_twice_and_notifications_expire() {
    let mut rt = runtime();

    rt.dispatch(UiEvent::SaveClicked(ListingId(1))).unwrap();
    let frame = last_frame(&rt);
    let card = frame.listings.card(ListingId(1)).unwrap();
    assert_eq!(card.save.label, "Saved");
    assert!(rt.controller().store().get(ListingId(1)).unwrap().saved);
    assert_eq!(frame.notifications.len(), 1);
    assert_eq!(frame.notifications[0].severity, Severity::Success);

    tokio::time::sleep(Duration::from_millis(100)).await;
    rt.dispatch(UiEvent::SaveClicked(ListingId(1))).unwrap();
    let frame = last_frame(&rt);
    assert_eq!(frame.listings.card(ListingId(1)).unwrap().save.label, "Save");
    assert!(!rt.controller().store().get(ListingId(1)).unwrap().saved);
    assert_eq!(frame.notifications.len(), 2);

    // First notification starts fading after 3s
    let fired = rt.next_timer().await.unwrap();
    rt.fire(fired).unwrap();
    let frame = last_frame(&rt);
    assert_eq!(frame.notifications[0].phase, NotificationPhase::Fading);
    assert_eq!(frame.notifications[1].phase, NotificationPhase::Visible);

    rt.settle().await.unwrap();
    assert!(last_frame(&rt).notifications.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_newsletter_validation() {
    let mut rt = runtime();

    rt.dispatch(UiEvent::NewsletterInput("not-an-email".into()))
        .unwrap();
    rt.dispatch(UiEvent::NewsletterSubmit).unwrap();
    let frame = last_frame(&rt);
    assert_eq!(frame.newsletter_email, "not-an-email");
    assert_eq!(frame.notifications.last().unwrap().severity, Severity::Error);

    rt.dispatch(UiEvent::NewsletterInput("a@b.com".into())).unwrap();
    rt.dispatch(UiEvent::NewsletterSubmit).unwrap();
    let frame = last_frame(&rt);
    assert_eq!(frame.newsletter_email, "");
    assert_eq!(
        frame.notifications.last().unwrap().severity,
        Severity::Success
    );
}

#[tokio::test(start_paused = true)]
async fn test_overlay_toggle_switches_forms() {
    let mut rt = runtime();
    rt.dispatch(UiEvent::GetStarted).unwrap();
    rt.dispatch(UiEvent::AuthToggle).unwrap();

    let overlay = last_frame(&rt).overlay.unwrap();
    assert_eq!(overlay.mode, AuthMode::Login);
    assert_eq!(overlay.field_ids(), vec!["loginEmail", "loginPassword"]);

    rt.dispatch(UiEvent::AuthToggle).unwrap();
    let overlay = last_frame(&rt).overlay.unwrap();
    assert_eq!(overlay.mode, AuthMode::Register);
    let labels: Vec<&str> = overlay.fields.iter().map(|f| f.label).collect();
    assert_eq!(
        labels,
        vec![
            "Full Name",
            "Email",
            "Password",
            "Skills You Offer",
            "Skills You Want to Learn"
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_auth_submit_hides_overlay_after_delay() {
    let mut rt = runtime();
    rt.dispatch(UiEvent::JoinNow).unwrap();
    rt.dispatch(UiEvent::AuthSubmit).unwrap();
    assert!(last_frame(&rt).overlay.is_some());

    tokio::time::sleep(Duration::from_millis(1400)).await;
    assert!(last_frame(&rt).overlay.is_some());

    // Hide fires at 1.5s, before the notification fade at 3s
    let fired = rt.next_timer().await.unwrap();
    rt.fire(fired).unwrap();
    let frame = last_frame(&rt);
    assert!(frame.overlay.is_none());
    assert_eq!(frame.notifications.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reopened_overlay_survives_stale_hide() {
    let mut rt = runtime();
    rt.dispatch(UiEvent::JoinNow).unwrap();
    rt.dispatch(UiEvent::AuthSubmit).unwrap();
    rt.dispatch(UiEvent::OverlayClose).unwrap();
    rt.dispatch(UiEvent::GetStarted).unwrap();

    rt.settle().await.unwrap();
    let frame = last_frame(&rt);
    assert!(frame.overlay.is_some());
    assert!(frame.notifications.is_empty());
}
