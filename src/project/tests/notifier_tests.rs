//! Unit tests for the notifier port and its adapters.

use crate::project::adapters::{RecordedNotification, RecordingNotifier};
use crate::project::ports::{MockNotifier, Notifier};
use rstest::rstest;

#[rstest]
fn recording_notifier_captures_events_in_order() {
    let notifier = RecordingNotifier::new();

    notifier.notify("task_created", "task 1 created");
    notifier.notify("status_changed", "task 1: todo -> done");

    assert_eq!(
        notifier.recorded(),
        vec![
            RecordedNotification {
                event: "task_created".to_owned(),
                message: "task 1 created".to_owned(),
            },
            RecordedNotification {
                event: "status_changed".to_owned(),
                message: "task 1: todo -> done".to_owned(),
            },
        ]
    );
}

#[rstest]
fn recording_notifier_clones_share_state() {
    let notifier = RecordingNotifier::new();
    let handle = notifier.clone();

    handle.notify("allocated", "task 2: Dev#1 x6");

    assert_eq!(notifier.recorded().len(), 1);
}

#[rstest]
fn mock_notifier_verifies_collaborator_calls() {
    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .withf(|event, message| event == "task_added" && message.contains("42"))
        .times(1)
        .return_const(());

    // A collaborator outside the core reports the event; the domain itself
    // never holds a notifier reference.
    notifier.notify("task_added", "task 42 added to project");
}
