//! Unit tests for status and priority parsing and the transition matrix.

use crate::task::domain::{EffectiveStatus, Priority, TaskStatus};
use rstest::rstest;

#[rstest]
#[case(TaskStatus::ToDo, "TO_DO")]
#[case(TaskStatus::InProgress, "IN_PROGRESS")]
#[case(TaskStatus::Completed, "COMPLETED")]
#[case(TaskStatus::Cancelled, "CANCELLED")]
fn stored_status_round_trips_through_canonical_form(
    #[case] status: TaskStatus,
    #[case] canonical: &str,
) {
    assert_eq!(status.as_str(), canonical);
    assert_eq!(TaskStatus::try_from(canonical), Ok(status));
}

#[rstest]
#[case("todo", TaskStatus::ToDo)]
#[case("To-Do", TaskStatus::ToDo)]
#[case("open", TaskStatus::ToDo)]
#[case("inprogress", TaskStatus::InProgress)]
#[case("in-progress", TaskStatus::InProgress)]
#[case("progress", TaskStatus::InProgress)]
#[case("started", TaskStatus::InProgress)]
#[case("complete", TaskStatus::Completed)]
#[case("COMPLETED_TASK", TaskStatus::Completed)]
#[case("done", TaskStatus::Completed)]
#[case("canceled", TaskStatus::Cancelled)]
#[case("CANCELLED_TASK", TaskStatus::Cancelled)]
#[case("  In_Progress  ", TaskStatus::InProgress)]
fn stored_status_parsing_folds_observed_spellings(
    #[case] raw: &str,
    #[case] expected: TaskStatus,
) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
#[case("")]
#[case("blocked")]
#[case("overdue")]
#[case("TO DO")]
fn stored_status_parsing_rejects_unknown_values(#[case] raw: &str) {
    assert!(TaskStatus::try_from(raw).is_err());
}

#[rstest]
#[case(TaskStatus::ToDo, false)]
#[case(TaskStatus::InProgress, false)]
#[case(TaskStatus::Completed, true)]
#[case(TaskStatus::Cancelled, true)]
fn is_terminal_returns_expected(#[case] status: TaskStatus, #[case] expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[rstest]
#[case(TaskStatus::ToDo, TaskStatus::ToDo, false)]
#[case(TaskStatus::ToDo, TaskStatus::InProgress, true)]
#[case(TaskStatus::ToDo, TaskStatus::Completed, false)]
#[case(TaskStatus::ToDo, TaskStatus::Cancelled, true)]
#[case(TaskStatus::InProgress, TaskStatus::ToDo, false)]
#[case(TaskStatus::InProgress, TaskStatus::InProgress, false)]
#[case(TaskStatus::InProgress, TaskStatus::Completed, true)]
#[case(TaskStatus::InProgress, TaskStatus::Cancelled, true)]
#[case(TaskStatus::Completed, TaskStatus::ToDo, false)]
#[case(TaskStatus::Completed, TaskStatus::InProgress, false)]
#[case(TaskStatus::Completed, TaskStatus::Completed, false)]
#[case(TaskStatus::Completed, TaskStatus::Cancelled, false)]
#[case(TaskStatus::Cancelled, TaskStatus::ToDo, false)]
#[case(TaskStatus::Cancelled, TaskStatus::InProgress, false)]
#[case(TaskStatus::Cancelled, TaskStatus::Completed, false)]
#[case(TaskStatus::Cancelled, TaskStatus::Cancelled, false)]
fn can_transition_to_returns_expected(
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[test]
fn effective_status_preserves_stored_statuses() {
    assert_eq!(EffectiveStatus::from(TaskStatus::ToDo), EffectiveStatus::ToDo);
    assert_eq!(
        EffectiveStatus::from(TaskStatus::InProgress),
        EffectiveStatus::InProgress
    );
    assert_eq!(
        EffectiveStatus::from(TaskStatus::Completed),
        EffectiveStatus::Completed
    );
    assert_eq!(
        EffectiveStatus::from(TaskStatus::Cancelled),
        EffectiveStatus::Cancelled
    );
}

#[test]
fn overdue_display_form_is_uppercase() {
    assert_eq!(EffectiveStatus::Overdue.as_str(), "OVERDUE");
}

#[test]
fn priority_orders_from_low_to_urgent() {
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);
    assert!(Priority::High < Priority::Urgent);
}

#[rstest]
#[case("low", Priority::Low)]
#[case("MEDIUM", Priority::Medium)]
#[case("normal", Priority::Medium)]
#[case("High", Priority::High)]
#[case("urgent", Priority::Urgent)]
#[case("critical", Priority::Urgent)]
fn priority_parsing_folds_observed_spellings(#[case] raw: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(raw), Ok(expected));
}

#[test]
fn priority_defaults_to_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn priority_parsing_rejects_unknown_values() {
    assert!(Priority::try_from("whenever").is_err());
}
