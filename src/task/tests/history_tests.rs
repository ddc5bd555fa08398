//! Unit tests for task history entries and actions.

use crate::task::domain::{HistoryAction, Task, TaskId};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
#[case(HistoryAction::Create, "create")]
#[case(HistoryAction::Edit, "edit")]
#[case(HistoryAction::StatusChange, "status_change")]
fn action_as_str_returns_canonical_name(#[case] action: HistoryAction, #[case] expected: &str) {
    assert_eq!(action.as_str(), expected);
    assert_eq!(action.to_string(), expected);
}

#[rstest]
fn entries_are_appended_in_call_order(clock: DefaultClock) {
    let mut task = Task::new(TaskId::new(1));
    task.create("First", "", &clock).expect("create task");
    task.edit(Some("Second"), None, &clock).expect("edit task");
    task.set_status("done", &clock).expect("set status");

    let actions: Vec<_> = task.history().iter().map(|entry| entry.action()).collect();
    assert_eq!(
        actions,
        vec![
            HistoryAction::Create,
            HistoryAction::Edit,
            HistoryAction::StatusChange,
        ]
    );
}

#[rstest]
fn timestamps_never_decrease_across_entries(clock: DefaultClock) {
    let mut task = Task::new(TaskId::new(2));
    task.create("Timed", "", &clock).expect("create task");
    task.set_status("in_progress", &clock).expect("set status");
    task.set_status("done", &clock).expect("set status");

    let timestamps: Vec<_> = task
        .history()
        .iter()
        .map(|entry| entry.timestamp())
        .collect();
    assert!(timestamps.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[rstest]
fn entry_exposes_details_of_the_mutation(clock: DefaultClock) {
    let mut task = Task::new(TaskId::new(3));
    task.create("Ship release", "", &clock).expect("create task");

    let entry = task.history().last().expect("one entry");
    assert_eq!(entry.action(), HistoryAction::Create);
    assert_eq!(entry.details(), "title='Ship release'");
}

#[rstest]
fn entry_serialises_with_snake_case_action(clock: DefaultClock) {
    let mut task = Task::new(TaskId::new(4));
    task.set_status("blocked", &clock).expect("set status");

    let entry = task.history().last().expect("one entry");
    let value = serde_json::to_value(entry).expect("serialise entry");
    assert_eq!(value["action"], "status_change");
    assert_eq!(value["details"], "todo -> blocked");
}
