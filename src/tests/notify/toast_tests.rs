use std::time::{Duration, Instant};

use crate::notify::{NotificationCenter, NotificationLevel};

const DISMISS: Duration = Duration::from_millis(4000);
const EXIT: Duration = Duration::from_millis(300);

fn center() -> NotificationCenter {
    NotificationCenter::new(DISMISS, EXIT)
}

#[test]
fn toast_stays_visible_until_its_dismissal_duration() {
    let mut center = center();
    let now = Instant::now();
    center.push("Message sent successfully!", NotificationLevel::Success, now);

    center.tick(now + DISMISS - Duration::from_millis(1));
    assert_eq!(center.toasts().len(), 1);
    assert!(!center.toasts()[0].is_leaving());
}

#[test]
fn toast_enters_the_leaving_phase_after_dismissal() {
    let mut center = center();
    let now = Instant::now();
    center.push("heads up", NotificationLevel::Info, now);

    center.tick(now + DISMISS);
    assert_eq!(center.toasts().len(), 1);
    assert!(center.toasts()[0].is_leaving());
}

#[test]
fn toast_is_removed_after_dismissal_plus_exit_transition() {
    let mut center = center();
    let now = Instant::now();
    center.push("bye", NotificationLevel::Info, now);

    center.tick(now + DISMISS);
    center.tick(now + DISMISS + EXIT);
    assert!(center.is_empty());
}

#[test]
fn a_late_tick_removes_an_expired_toast_in_one_pass() {
    // No intermediate tick observed the leaving phase; the toast must still
    // be gone once dismissal plus exit have both elapsed.
    let mut center = center();
    let now = Instant::now();
    center.push("bye", NotificationLevel::Error, now);

    center.tick(now + DISMISS + EXIT + Duration::from_millis(1));
    assert!(center.is_empty());
}

#[test]
fn toasts_expire_independently() {
    let mut center = center();
    let now = Instant::now();
    center.push("first", NotificationLevel::Info, now);
    center.push("second", NotificationLevel::Error, now + Duration::from_millis(1000));

    center.tick(now + DISMISS + EXIT);
    assert_eq!(center.toasts().len(), 1);
    assert_eq!(center.toasts()[0].message, "second");

    center.tick(now + Duration::from_millis(1000) + DISMISS + EXIT);
    assert!(center.is_empty());
}

#[test]
fn next_deadline_reports_the_earliest_stage_change() {
    let mut center = center();
    let now = Instant::now();
    assert!(center.next_deadline().is_none());

    center.push("first", NotificationLevel::Info, now);
    center.push("second", NotificationLevel::Info, now + Duration::from_millis(500));
    assert_eq!(center.next_deadline(), Some(now + DISMISS));

    center.tick(now + DISMISS);
    // The leaving toast's removal now comes first.
    assert_eq!(center.next_deadline(), Some(now + DISMISS + EXIT));
}

#[test]
fn levels_default_to_info() {
    assert_eq!(NotificationLevel::default(), NotificationLevel::Info);
}
