use crate::workflows::casting::domain::CastingApplicationStatus;
use crate::workflows::casting::transitions::validate_transition;

use CastingApplicationStatus::*;

const ALL: [CastingApplicationStatus; 8] = [
    Applied,
    UnderReview,
    Shortlisted,
    CallbackScheduled,
    CallbackCompleted,
    Selected,
    Rejected,
    Withdrawn,
];

#[test]
fn every_pair_in_the_table_is_accepted() {
    for from in ALL {
        for to in from.allowed_transitions() {
            assert!(
                validate_transition(from, *to).is_ok(),
                "expected {from} -> {to} to be accepted"
            );
        }
    }
}

#[test]
fn every_pair_outside_the_table_is_rejected() {
    for from in ALL {
        for to in ALL {
            if from.allowed_transitions().contains(&to) {
                continue;
            }
            let err = validate_transition(from, to).expect_err("pair outside table");
            assert_eq!(err.from, from);
            assert_eq!(err.to, to);
        }
    }
}

#[test]
fn terminal_statuses_accept_no_transitions() {
    for terminal in [Selected, Rejected, Withdrawn] {
        assert!(terminal.is_terminal());
        for to in ALL {
            assert!(
                validate_transition(terminal, to).is_err(),
                "terminal {terminal} must not transition to {to}"
            );
        }
    }
}

#[test]
fn rejection_names_both_states() {
    let err = validate_transition(Applied, Selected).expect_err("not in table");
    let message = err.to_string();
    assert!(message.contains("applied"));
    assert!(message.contains("selected"));
}

#[test]
fn callback_leg_is_ordered() {
    assert!(validate_transition(Shortlisted, CallbackScheduled).is_ok());
    assert!(validate_transition(CallbackScheduled, CallbackCompleted).is_ok());
    assert!(validate_transition(CallbackCompleted, Selected).is_ok());
    assert!(validate_transition(CallbackCompleted, Withdrawn).is_err());
    assert!(validate_transition(CallbackScheduled, Selected).is_err());
}
